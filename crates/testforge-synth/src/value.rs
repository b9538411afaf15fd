use chrono::{NaiveDate, NaiveDateTime};

/// Literal value produced by the synthesizer for one attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntheticValue {
    /// Marker for "no meaningful literal could be produced".
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl SyntheticValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SyntheticValue::Null)
    }

    /// Source-literal rendering: text is quoted and escaped, the null
    /// marker renders as `null`.
    pub fn literal(&self) -> String {
        match self {
            SyntheticValue::Null => "null".to_string(),
            SyntheticValue::Bool(value) => value.to_string(),
            SyntheticValue::Int(value) => value.to_string(),
            SyntheticValue::Float(value) => value.to_string(),
            SyntheticValue::Text(value) => format!("\"{}\"", escape(value)),
            SyntheticValue::Date(value) => format!("\"{}\"", value.format("%Y-%m-%d")),
            SyntheticValue::Timestamp(value) => {
                format!("\"{}\"", value.format("%Y-%m-%dT%H:%M:%S"))
            }
        }
    }

    /// Unquoted rendering, used where the literal lands inside a larger
    /// text fragment.
    pub fn raw(&self) -> String {
        match self {
            SyntheticValue::Null => "null".to_string(),
            SyntheticValue::Bool(value) => value.to_string(),
            SyntheticValue::Int(value) => value.to_string(),
            SyntheticValue::Float(value) => value.to_string(),
            SyntheticValue::Text(value) => value.clone(),
            SyntheticValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            SyntheticValue::Timestamp(value) => value.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SyntheticValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SyntheticValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
