//! Caller-shaped records.
//!
//! The table never assumes a fixed schema. Anything that can look up a [`Value`] by field name and
//! enumerate its values can be displayed: implement [`Record`] for your own type, or use the
//! provided impls for [`Row`], `BTreeMap<String, Value>` and `HashMap<String, Value>`.

use crate::value::Value;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A mapping from field name to [`Value`].
pub trait Record {
    /// Returns the raw value of `key`, if the record has that field.
    fn get(&self, key: &str) -> Option<&Value>;

    /// Every field value of the record, in the record's own order.
    ///
    /// The search filter looks at all of them, not only at displayed columns.
    fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_>;
}

/// An insertion-ordered record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Row::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, replacing an existing field in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Record for Row {
    fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(self.fields.iter().map(|(_, v)| v))
    }
}

impl Record for BTreeMap<String, Value> {
    fn get(&self, key: &str) -> Option<&Value> {
        BTreeMap::get(self, key)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(BTreeMap::values(self))
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn get(&self, key: &str) -> Option<&Value> {
        HashMap::get(self, key)
    }

    fn values(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(HashMap::values(self))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Row;
    use crate::value::Value;
    use serde::de::MapAccess;
    use serde::de::Visitor;
    use serde::ser::SerializeMap;
    use std::fmt;

    impl serde::Serialize for Row {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.fields.len()))?;
            for (k, v) in &self.fields {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    impl<'de> serde::Deserialize<'de> for Row {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct RowVisitor;

            impl<'de> Visitor<'de> for RowVisitor {
                type Value = Row;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a map of field names to text, number or bool values")
                }

                fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Row, A::Error> {
                    let mut row = Row::new();
                    while let Some((k, v)) = access.next_entry::<String, Value>()? {
                        row.insert(k, v);
                    }
                    Ok(row)
                }
            }

            deserializer.deserialize_map(RowVisitor)
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use super::Row;
    use crate::error::RecordError;
    use crate::value::Value;

    fn json_kind(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }

    impl Row {
        /// Builds a row from a flat JSON object.
        ///
        /// Field order follows `serde_json`'s map order. Nested arrays, nested objects and `null`
        /// are rejected.
        pub fn from_json(value: serde_json::Value) -> Result<Row, RecordError> {
            let map = match value {
                serde_json::Value::Object(map) => map,
                other => {
                    return Err(RecordError::NotAnObject {
                        kind: json_kind(&other),
                    });
                }
            };
            let mut row = Row::new();
            for (field, v) in map {
                let kind = json_kind(&v);
                let value = match v {
                    serde_json::Value::String(s) => Value::Text(s),
                    serde_json::Value::Bool(b) => Value::Bool(b),
                    serde_json::Value::Number(n) => match n.as_f64() {
                        Some(n) => Value::Number(n),
                        None => return Err(RecordError::UnsupportedValue { field, kind }),
                    },
                    _ => return Err(RecordError::UnsupportedValue { field, kind }),
                };
                row.insert(field, value);
            }
            Ok(row)
        }
    }

    /// Builds rows from a JSON array of flat objects.
    pub fn rows_from_json(value: serde_json::Value) -> Result<Vec<Row>, RecordError> {
        let items = match value {
            serde_json::Value::Array(items) => items,
            other => {
                return Err(RecordError::NotAnArray {
                    kind: json_kind(&other),
                });
            }
        };
        items.into_iter().map(Row::from_json).collect()
    }

    /// Parses `input` as JSON and forwards to [`rows_from_json`].
    pub fn rows_from_json_str(input: &str) -> Result<Vec<Row>, RecordError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        rows_from_json(value)
    }
}

#[cfg(feature = "json")]
pub use json::rows_from_json;
#[cfg(feature = "json")]
pub use json::rows_from_json_str;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_in_place() {
        let mut row = Row::new().with("id", 1).with("name", "Bob");
        row.insert("id", 2);
        assert_eq!(row.len(), 2);
        assert_eq!(row.keys().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(row.get("id"), Some(&Value::from(2)));
    }

    #[test]
    fn map_records_expose_all_values() {
        let mut m = BTreeMap::new();
        m.insert("a".to_string(), Value::from("x"));
        m.insert("b".to_string(), Value::from(3));
        assert_eq!(Record::values(&m).count(), 2);
        assert_eq!(Record::get(&m, "b"), Some(&Value::from(3)));
        assert_eq!(Record::get(&m, "c"), None);
    }

    #[cfg(feature = "json")]
    #[test]
    fn rows_from_json_accepts_flat_objects() {
        let rows = rows_from_json_str(r#"[{"id": 1, "name": "Jane", "active": true}]"#).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some(&Value::from("Jane")));
        assert_eq!(rows[0].get("active"), Some(&Value::from(true)));
    }

    #[cfg(feature = "json")]
    #[test]
    fn rows_from_json_rejects_nested_values() {
        let err = rows_from_json_str(r#"[{"tags": ["a"]}]"#).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RecordError::UnsupportedValue { ref field, kind: "array" } if field == "tags"
        ));
        let err = rows_from_json_str(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(
            err,
            crate::error::RecordError::NotAnArray { kind: "object" }
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn row_serializes_as_a_map() {
        let row = Row::new().with("id", 1).with("name", "Bob");
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"id":1.0,"name":"Bob"}"#);
        let back: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
