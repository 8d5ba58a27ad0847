use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Largest magnitude at which every integral `f64` is exactly representable as `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A cell value after coercion from its CSV text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TypedValue {
    /// Coerces raw cell text into a typed value.
    ///
    /// Rules are applied in order: empty text stays an empty string, the exact
    /// literals `True` and `False` become booleans, anything that parses as a
    /// finite number becomes a number, and everything else is kept verbatim.
    ///
    /// Numeric-looking identifiers such as `007` become `7.0`; their formatting is lost.
    pub fn coerce(raw: &str) -> Self {
        if raw.is_empty() {
            return TypedValue::Text(String::new());
        }
        match raw {
            "True" => TypedValue::Bool(true),
            "False" => TypedValue::Bool(false),
            _ => match raw.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => TypedValue::Number(n),
                _ => TypedValue::Text(raw.to_string()),
            },
        }
    }

    /// Coerces an optional cell, treating a missing cell like an empty one.
    pub fn coerce_cell(raw: Option<&str>) -> Self {
        Self::coerce(raw.unwrap_or(""))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TypedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

// Coercion never yields NaN, so numeric equality is reflexive.
impl Eq for TypedValue {}

impl Hash for TypedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            TypedValue::Bool(b) => b.hash(state),
            // -0.0 == 0.0, so both must land in the same bucket
            TypedValue::Number(n) => {
                let n = if *n == 0.0 { 0.0 } else { *n };
                n.to_bits().hash(state)
            }
            TypedValue::Text(s) => s.hash(state),
        }
    }
}

impl Serialize for TypedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TypedValue::Bool(b) => serializer.serialize_bool(*b),
            TypedValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            TypedValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypedValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < MAX_EXACT_INTEGER {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            TypedValue::Bool(b) => write!(f, "{}", b),
            TypedValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl From<f64> for TypedValue {
    fn from(n: f64) -> Self {
        TypedValue::Number(n)
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::Text(s.to_string())
    }
}
