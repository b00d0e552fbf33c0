/// SQL dialect. Only identifier quoting differs between dialects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Identifiers quoted with backticks.
    #[default]
    Mysql,

    /// Identifiers quoted with double quotes.
    Ansi,
}

impl Dialect {
    /// Picks the dialect for a connection URL scheme.
    pub fn from_scheme(scheme: &str) -> Dialect {
        if scheme.eq_ignore_ascii_case("mysql") {
            Dialect::Mysql
        } else {
            Dialect::Ansi
        }
    }

    pub fn quote_char(self) -> char {
        match self {
            Dialect::Mysql => '`',
            Dialect::Ansi => '"',
        }
    }
}
