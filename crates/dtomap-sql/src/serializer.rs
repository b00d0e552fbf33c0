#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Placeholders};

mod flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod statement;

use crate::{Dialect, Statement};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The dialect decides how identifiers are quoted.
    dialect: Dialect,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new(dialect: Dialect) -> Serializer {
        Serializer { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Renders `stmt` with `?` placeholders and no trailing semicolon.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
