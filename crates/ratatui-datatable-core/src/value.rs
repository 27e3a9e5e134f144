//! Scalar cell values.

use std::cmp::Ordering;
use std::fmt;

/// A single field value inside a [`crate::record::Record`].
///
/// Records are caller-shaped, so values stay dynamically typed. Filtering works on the natural
/// string form (see the [`fmt::Display`] impl) and sorting uses [`Value::natural_cmp`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
        }
    }

    /// Lowercased natural string form, as used by the search filter.
    pub fn search_text(&self) -> String {
        match self {
            Value::Text(s) => s.to_lowercase(),
            other => other.to_string().to_lowercase(),
        }
    }

    /// Natural ordering: numeric for numbers, `false < true`, and UTF-16 code unit order for text.
    ///
    /// This is a total order, so it is safe to hand to `sort_by`. Values of different kinds rank
    /// `Bool < Number < Text`, and `NaN` sorts after every other number.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.encode_utf16().cmp(b.encode_utf16()),
            (Value::Number(a), Value::Number(b)) => cmp_numbers(*a, *b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Bool(_) => 0,
            Value::Number(_) => 1,
            Value::Text(_) => 2,
        }
    }
}

fn cmp_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Neither is NaN, so `-0.0` and `0.0` stay equal.
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // `f64`'s Display is already the shortest round-trip form without a trailing `.0`.
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(1299.99).to_string(), "1299.99");
        assert_eq!(Value::from(-0.5).to_string(), "-0.5");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
    }

    #[test]
    fn search_text_is_lowercase() {
        assert_eq!(Value::from("Jane Smith").search_text(), "jane smith");
        assert_eq!(Value::from(true).search_text(), "true");
    }

    #[test]
    fn natural_cmp_orders_within_a_kind() {
        assert_eq!(
            Value::from(9).natural_cmp(&Value::from(10)),
            Ordering::Less
        );
        assert_eq!(
            Value::from("b").natural_cmp(&Value::from("a")),
            Ordering::Greater
        );
        assert_eq!(
            Value::from(false).natural_cmp(&Value::from(true)),
            Ordering::Less
        );
    }

    #[test]
    fn natural_cmp_ranks_kinds_and_puts_nan_last() {
        assert_eq!(
            Value::from(true).natural_cmp(&Value::from(0)),
            Ordering::Less
        );
        assert_eq!(
            Value::from(1).natural_cmp(&Value::from("1")),
            Ordering::Less
        );
        assert_eq!(
            Value::from("a").natural_cmp(&Value::from(false)),
            Ordering::Greater
        );
        assert_eq!(
            Value::from(f64::NAN).natural_cmp(&Value::from(f64::INFINITY)),
            Ordering::Greater
        );
        assert_eq!(
            Value::from(f64::NAN).natural_cmp(&Value::from(f64::NAN)),
            Ordering::Equal
        );
        assert_eq!(
            Value::from(-0.0).natural_cmp(&Value::from(0.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn text_orders_by_utf16_code_units() {
        // U+1F600 encodes as a surrogate pair (0xD83D ...), which sorts before U+FF21.
        assert_eq!(
            Value::from("\u{1F600}").natural_cmp(&Value::from("\u{FF21}")),
            Ordering::Less
        );
        assert_eq!(
            Value::from("apple").natural_cmp(&Value::from("banana")),
            Ordering::Less
        );
    }
}
