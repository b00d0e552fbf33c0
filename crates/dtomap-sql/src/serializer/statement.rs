use super::{Comma, Formatter, Ident, Placeholders, ToSql};

use crate::stmt::{self, Projection, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let projection = match self.projection {
            Projection::All => "*",
            Projection::Count => "COUNT(*)",
        };

        fmt!(f, "SELECT " projection " FROM " Ident(&self.table));

        if let Some(key) = &self.key {
            fmt!(f, " WHERE " Ident(key) " = ?");
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(self.columns.iter().map(Ident));
        let width = self.columns.len();
        let rows = Comma((0..self.rows).map(|_| Tuple(width)));

        fmt!(f, "INSERT INTO " Ident(&self.table) " (" columns ") VALUES " rows);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let assignments = Comma(self.columns.iter().map(Assignment));

        fmt!(f, "UPDATE " Ident(&self.table) " SET " assignments " WHERE " Ident(&self.key) " = ?");
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "DELETE FROM " Ident(&self.table) " WHERE " Ident(&self.key) " = ?");
    }
}

/// `(?, ?, ..)` with one placeholder per column
struct Tuple(usize);

impl ToSql for Tuple {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "(" Placeholders(self.0) ")");
    }
}

/// `column = ?`
struct Assignment<'a>(&'a String);

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0) " = ?");
    }
}
