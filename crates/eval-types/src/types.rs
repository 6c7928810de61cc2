use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A dynamically typed value exchanged with calculators.
///
/// Calculator inputs arrive as named `FactValue`s and every calculation
/// produces one. The variant set mirrors JSON plus a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FactValue {
    /// UTF-8 text.
    String(String),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Boolean(bool),
    /// Ordered list of values.
    Array(Vec<FactValue>),
    /// String-keyed map of values.
    Object(HashMap<String, FactValue>),
    /// UTC timestamp.
    Date(DateTime<Utc>),
    /// Absent value.
    Null,
}

impl FactValue {
    /// Returns the numeric value as an `f64` when the variant is `Integer`
    /// or `Float`, and `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FactValue::Integer(i) => Some(*i as f64),
            FactValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value when the variant is `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FactValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::String(s) => write!(f, "\"{}\"", s),
            FactValue::Integer(i) => write!(f, "{}", i),
            FactValue::Float(fl) => write!(f, "{}", fl),
            FactValue::Boolean(b) => write!(f, "{}", b),
            FactValue::Array(arr) => {
                let items: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            FactValue::Object(obj) => {
                let pairs: Vec<String> =
                    obj.iter().map(|(k, v)| format!("\"{}\": {}", k, v)).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            }
            FactValue::Date(dt) => write!(f, "\"{}\"", dt.to_rfc3339()),
            FactValue::Null => write!(f, "null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_covers_numeric_variants() {
        assert_eq!(FactValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(FactValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(FactValue::String("3".into()).as_f64(), None);
        assert_eq!(FactValue::Null.as_f64(), None);
    }

    #[test]
    fn serde_round_trip_preserves_values() {
        let value = FactValue::Object(
            [
                ("score".to_string(), FactValue::Float(9.5)),
                ("passed".to_string(), FactValue::Boolean(true)),
            ]
            .into_iter()
            .collect(),
        );
        let json = serde_json::to_string(&value).unwrap();
        let back: FactValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn display_formats_scalars_and_collections() {
        assert_eq!(FactValue::Integer(7).to_string(), "7");
        assert_eq!(FactValue::Boolean(true).to_string(), "true");
        let arr = FactValue::Array(vec![FactValue::Integer(1), FactValue::Null]);
        assert_eq!(arr.to_string(), "[1, null]");
    }
}
