// src/models.rs
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Opaque identifier assigned by the evaluation service.
/// The client only displays it and sends it back on lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(s) => write!(f, "{}", s),
            Identifier::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One submitted expression as reported by the service.
///
/// The typed fields are checked on decode; the record as sent is kept alongside
/// and is what gets serialized back out.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionRecord {
    pub id: Identifier,
    pub expression: String,
    pub status: String,
    /// `null` until evaluation finishes.
    pub result: Value,
    raw: Value,
}

#[derive(Deserialize)]
struct RecordShape {
    id: Identifier,
    expression: String,
    status: String,
    #[serde(default)]
    result: Value,
}

impl<'de> Deserialize<'de> for ExpressionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        let shape = RecordShape::deserialize(&raw).map_err(D::Error::custom)?;
        Ok(Self {
            id: shape.id,
            expression: shape.expression,
            status: shape.status,
            result: shape.result,
            raw,
        })
    }
}

impl Serialize for ExpressionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[derive(Serialize)]
pub struct SubmitRequest<'a> {
    pub expression: &'a str,
}

#[derive(Deserialize, Debug)]
pub struct SubmitResponse {
    pub id: Identifier,
}

#[derive(Deserialize, Debug)]
pub struct ExpressionsResponse {
    pub expressions: Vec<ExpressionRecord>,
}

#[derive(Deserialize, Debug)]
pub struct ExpressionResponse {
    pub expression: ExpressionRecord,
}

impl ExpressionRecord {
    /// Renders the record as a single line of the expressions list.
    pub fn summary_line(&self) -> String {
        format!(
            "ID: {}, Expression: {}, Status: {}, Result: {}",
            self.id,
            self.expression,
            self.status,
            display_result(&self.result)
        )
    }

    /// Renders the record exactly as the service sent it, with 2-space indentation.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}

/// Formats a result value, substituting `N/A` for anything falsy.
pub fn display_result(result: &Value) -> String {
    if is_falsy(result) {
        return "N/A".to_string();
    }
    match result {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
