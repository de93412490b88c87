use std::ops::Index;

use indexmap::IndexMap;

/// Largest integer magnitude a double represents exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Object members in first-insertion order.
pub type Map = IndexMap<String, Value>;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The number as an integer, when it is integral and exactly representable.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) if is_exact_integer(*n) => Some(*n as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) if is_exact_integer(*n) && *n >= 0.0 => Some(*n as u64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    pub fn take(&mut self) -> Value {
        std::mem::replace(self, Value::Null)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

fn is_exact_integer(n: f64) -> bool {
    n.fract() == 0.0 && n.abs() <= MAX_EXACT_INT
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        match self {
            Value::Array(arr) => arr.get(index).unwrap_or_else(|| {
                panic!(
                    "index {index} out of bounds for array of length {}",
                    arr.len()
                )
            }),
            _ => panic!(
                "cannot index into non-array value of type {}",
                self.type_name()
            ),
        }
    }
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Object(obj) => obj.get(key).unwrap_or_else(|| {
                panic!("key '{key}' not found in object with {} entries", obj.len())
            }),
            _ => panic!(
                "cannot index into non-object value of type {}",
                self.type_name()
            ),
        }
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                let mut map = Map::with_capacity(obj.len());
                for (k, v) in obj {
                    map.insert(k, Value::from(v));
                }
                Value::Object(map)
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    /// Integral numbers within ±2^53 become JSON integers so typed
    /// deserialization into integer fields works. Non-finite numbers
    /// (`1e400`) become `null`.
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => {
                let negative_zero = n == 0.0 && n.is_sign_negative();
                if is_exact_integer(n) && !negative_zero {
                    if n >= 0.0 {
                        serde_json::Value::Number((n as u64).into())
                    } else {
                        serde_json::Value::Number((n as i64).into())
                    }
                } else {
                    serde_json::Number::from_f64(n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(arr) => serde_json::Value::Array(arr.into_iter().map(Into::into).collect()),
            Value::Object(obj) => {
                let mut map = serde_json::Map::new();
                for (k, v) in obj {
                    map.insert(k, v.into());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use rstest::rstest;
    use serde_json::json;

    use super::{Map, Value};

    #[rstest]
    fn test_accessors_and_take() {
        let mut obj = Map::new();
        obj.insert("a".to_string(), Value::Number(1.0));
        let value = Value::Object(obj);
        assert!(value.is_object());
        assert_eq!(value.type_name(), "object");
        assert_eq!(value.get("a").and_then(Value::as_i64), Some(1));
        assert!(value.get("b").is_none());

        let arr = Value::Array(vec![Value::Bool(true), Value::Null]);
        assert!(arr.is_array());
        assert_eq!(arr.get_index(1), Some(&Value::Null));
        assert!(arr.get_index(2).is_none());
        assert!(arr.get("a").is_none());

        let mut taken = Value::String("take".to_string());
        let prior = taken.take();
        assert!(taken.is_null());
        assert_eq!(prior.as_str(), Some("take"));
    }

    #[rstest]
    #[case(Value::Number(7.0), Some(7), Some(7))]
    #[case(Value::Number(-7.0), Some(-7), None)]
    #[case(Value::Number(7.25), None, None)]
    #[case(Value::Number(1e300), None, None)]
    #[case(Value::String("7".to_string()), None, None)]
    fn test_integer_views(
        #[case] value: Value,
        #[case] as_i64: Option<i64>,
        #[case] as_u64: Option<u64>,
    ) {
        assert_eq!(value.as_i64(), as_i64);
        assert_eq!(value.as_u64(), as_u64);
    }

    #[rstest]
    fn test_indexing() {
        let mut obj = Map::new();
        obj.insert("key".to_string(), Value::Array(vec![Value::from("x")]));
        let value = Value::Object(obj);
        assert_eq!(value["key"][0], "x");
    }

    #[rstest]
    fn test_indexing_panics() {
        let value = Value::Null;
        assert!(catch_unwind(AssertUnwindSafe(|| {
            let _ = &value["missing"];
        }))
        .is_err());

        let empty_array = Value::Array(Vec::new());
        assert!(catch_unwind(AssertUnwindSafe(|| {
            let _ = &empty_array[1];
        }))
        .is_err());

        let empty_object = Value::Object(Map::new());
        assert!(catch_unwind(AssertUnwindSafe(|| {
            let _ = &empty_object["absent"];
        }))
        .is_err());
    }

    #[rstest]
    fn test_serde_json_conversions() {
        let json_value = json!({"a": [1, 2.5, -3], "b": {"c": true, "d": null}, "e": "s"});
        let value = Value::from(json_value.clone());
        assert_eq!(value["a"][1], 2.5);
        let back: serde_json::Value = value.into();
        assert_eq!(back, json_value);
    }

    #[rstest]
    fn test_conversion_keeps_negative_zero_and_drops_infinity() {
        let neg_zero: serde_json::Value = Value::Number(-0.0).into();
        assert_eq!(neg_zero.as_f64().map(f64::is_sign_negative), Some(true));

        let inf: serde_json::Value = Value::Number(f64::INFINITY).into();
        assert_eq!(inf, json!(null));
    }

    #[rstest]
    fn test_conversion_keeps_member_order() {
        let mut obj = Map::new();
        obj.insert("z".to_string(), Value::Null);
        obj.insert("a".to_string(), Value::Null);
        let back: serde_json::Value = Value::Object(obj).into();
        let keys: Vec<&String> = back.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
