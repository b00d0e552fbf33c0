use std::fmt::Display;

/// Attribute problems found while reading one `#[derive(Entity)]` input.
///
/// Parsing keeps going after a bad attribute so the user sees every problem
/// of a struct in one compile.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    /// Reports `message` at `tokens`.
    pub(crate) fn spanned(&mut self, tokens: impl quote::ToTokens, message: impl Display) {
        self.push(syn::Error::new_spanned(tokens, message));
    }

    /// Keeps the parsed value of an attribute, or records why it failed.
    pub(crate) fn parsed<T>(&mut self, res: syn::Result<T>) -> Option<T> {
        match res {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Stores `value` in `slot` unless an earlier attribute already filled it.
    /// A repeat is reported at `attr` as a duplicate `#[name]`.
    pub(crate) fn set_once<T>(
        &mut self,
        slot: &mut Option<T>,
        value: T,
        attr: &syn::Attribute,
        name: &str,
    ) {
        if slot.is_some() {
            self.spanned(attr, format!("duplicate #[{name}] attribute"));
        } else {
            *slot = Some(value);
        }
    }

    /// `Ok(value)` when nothing was reported, otherwise every error combined.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        }) {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
