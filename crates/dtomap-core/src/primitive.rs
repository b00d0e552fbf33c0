use crate::{Row, Value};

/// Scalar result types a query can be loaded into instead of an entity.
///
/// Casting is lenient the way loosely typed database clients are: text is
/// read up to its longest numeric prefix and anything unparseable becomes
/// zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Bool,
    Float,
    Integer,
    String,
}

impl Primitive {
    pub fn cast(self, value: Value) -> Value {
        match self {
            Primitive::Bool => Value::Bool(truthy(&value)),
            Primitive::Float => Value::F64(to_f64(&value)),
            Primitive::Integer => Value::I64(to_i64(&value)),
            Primitive::String => Value::String(value.to_text().unwrap_or_default()),
        }
    }

    /// Casts the first column of `row`. An empty row casts as null.
    pub fn cast_row(self, row: &Row) -> Value {
        self.cast(row.first().cloned().unwrap_or_default())
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(v) => *v,
        Value::I64(v) => *v != 0,
        Value::F64(v) => *v != 0.0,
        Value::String(v) => !(v.is_empty() || v == "0"),
        Value::Timestamp(_) => true,
        Value::Json(v) => !v.is_null(),
    }
}

fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(v) => i64::from(*v),
        Value::I64(v) => *v,
        Value::F64(v) => *v as i64,
        Value::String(v) => integer_prefix(v),
        Value::Timestamp(v) => v.and_utc().timestamp(),
        Value::Json(_) => 1,
    }
}

fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(v) => f64::from(u8::from(*v)),
        Value::I64(v) => *v as f64,
        Value::F64(v) => *v,
        Value::String(v) => float_prefix(v),
        Value::Timestamp(v) => v.and_utc().timestamp() as f64,
        Value::Json(_) => 1.0,
    }
}

/// Length of an optional sign followed by ASCII digits at the start of `s`.
fn digits_len(s: &str, start: usize) -> usize {
    s.as_bytes()[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count()
}

fn integer_prefix(s: &str) -> i64 {
    let s = s.trim_start();
    let sign = usize::from(s.starts_with(['+', '-']));
    let end = sign + digits_len(s, sign);

    // "1e3" and ".5" are numeric text too
    if end == sign || matches!(s.as_bytes().get(end), Some(b'.' | b'e' | b'E')) {
        return float_prefix(s) as i64;
    }

    s[..end].parse::<i64>().unwrap_or_else(|_| float_prefix(s) as i64)
}

fn float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(s.starts_with(['+', '-']));
    let int_digits = digits_len(s, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_len(s, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_len(s, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}
