/// Builds a [`Row`](crate::Row) from `column => value` pairs.
///
/// ```
/// # use dtomap_core::{row, Value};
/// let row = row! { "id" => 1_i64, "name" => "bob" };
/// assert_eq!(row.get("name"), Some(&Value::from("bob")));
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ( $( $column:expr => $value:expr ),+ $(,)? ) => {{
        let mut row = $crate::Row::new();
        $(
            row.insert($column, $crate::Value::from($value));
        )+
        row
    }};
}
