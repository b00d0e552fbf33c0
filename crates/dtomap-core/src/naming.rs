use std::borrow::Cow;

/// How a Rust identifier becomes a table or column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Naming {
    /// `SomeFieldName` becomes `some_field_name`.
    #[default]
    SnakeCase,

    /// ASCII lowercase only.
    LowerCase,

    /// The identifier unchanged.
    Verbatim,

    /// Always this literal, whatever the identifier.
    Forced(Cow<'static, str>),
}

impl Naming {
    pub fn forced(name: impl Into<Cow<'static, str>>) -> Naming {
        Naming::Forced(name.into())
    }

    pub fn resolve(&self, ident: &str) -> String {
        match self {
            Naming::SnakeCase => snake_case(ident),
            Naming::LowerCase => ident.to_ascii_lowercase(),
            Naming::Verbatim => ident.to_string(),
            Naming::Forced(name) => name.to_string(),
        }
    }
}

/// Inserts `_` before every ASCII uppercase letter, lowercases the result and
/// drops leading underscores.
///
/// Only ASCII letters are considered, so runs of capitals split per letter
/// (`HTTPCode` becomes `h_t_t_p_code`). Applying it twice gives the same
/// result as applying it once.
pub fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);

    for ch in ident.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }

    out.trim_start_matches('_').to_string()
}
