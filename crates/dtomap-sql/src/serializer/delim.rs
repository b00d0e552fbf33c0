use super::{Formatter, ToSql};

/// Comma delimited
pub(super) struct Comma<L>(pub(super) L);

/// `n` comma separated `?` placeholders
pub(super) struct Placeholders(pub(super) usize);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl ToSql for Placeholders {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholders = Comma(std::iter::repeat("?").take(self.0));
        fmt!(f, placeholders);
    }
}
