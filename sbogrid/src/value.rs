//! Scalar cell values and row data.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scalar carried by a grid row.
///
/// Deserialized untagged: JSON `null`, booleans and numbers map directly,
/// strings in `YYYY-MM-DD` form become dates, any other string is text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

/// A grid row: column id to value. Missing keys read as empty.
pub type RowData = HashMap<String, Value>;

impl Value {
    /// Null and the empty string both count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Loose truthiness used for yes/no rendering.
    pub fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Date(_) => true,
            Value::Text(text) => !text.is_empty(),
        }
    }

    /// Unformatted string form, used for `data-value` and input prefill.
    pub fn raw(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Date(d) => d.format("%Y-%m-%d").to_string(),
            Value::Text(text) => text.clone(),
        }
    }
}

/// Read a column's value from a row, treating absence as empty.
pub fn cell_value<'a>(row: &'a RowData, column_id: &str) -> &'a Value {
    static EMPTY: Value = Value::Null;
    row.get(column_id).unwrap_or(&EMPTY)
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

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Build a row from `(column id, value)` pairs.
pub fn row<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> RowData
where
    K: Into<String>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
