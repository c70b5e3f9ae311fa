//! Trading signal schema and body parsing.

use serde::Serialize;
use serde_json::{Map, Value};

/// A trading instruction pushed by the core engine.
///
/// Lives only for the duration of one request; nothing is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingSignal {
    /// Instrument symbol, e.g. `EURUSD`.
    pub pair: String,
    /// Trade side, e.g. `buy` or `sell`.
    pub direction: String,
    pub risk_percent: f64,
    /// Entry price.
    pub entry: f64,
    /// Stop-loss price.
    pub sl: f64,
    /// First take-profit price.
    pub tp1: f64,
    /// Second take-profit price. Absent and `null` both map to `None`.
    pub tp2: Option<f64>,
    pub prob_score: f64,
    pub iof_score: f64,
}

impl TradingSignal {
    /// Parses a raw request body against the signal schema.
    ///
    /// Float fields take JSON numbers or numeric strings (`"1.5"`) and are
    /// always echoed as floats. Unknown fields are ignored. Every missing or
    /// mistyped field is reported, in declaration order.
    pub fn from_json(body: &[u8]) -> Result<Self, Vec<SchemaError>> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            vec![SchemaError::body(SchemaErrorKind::JsonInvalid, e.to_string())]
        })?;

        let Value::Object(obj) = value else {
            return Err(vec![SchemaError::body(
                SchemaErrorKind::ModelAttributesType,
                SchemaErrorKind::ModelAttributesType.message().to_string(),
            )]);
        };

        let mut fields = FieldReader::new(&obj);
        let signal = Self {
            pair: fields.string("pair"),
            direction: fields.string("direction"),
            risk_percent: fields.float("risk_percent"),
            entry: fields.float("entry"),
            sl: fields.float("sl"),
            tp1: fields.float("tp1"),
            tp2: fields.optional_float("tp2"),
            prob_score: fields.float("prob_score"),
            iof_score: fields.float("iof_score"),
        };

        if fields.issues.is_empty() {
            Ok(signal)
        } else {
            Err(fields.issues)
        }
    }
}

/// Reads typed fields out of a JSON object, collecting one issue per bad field.
///
/// Values returned for bad fields are placeholders and must be discarded
/// when `issues` is non-empty.
struct FieldReader<'a> {
    obj: &'a Map<String, Value>,
    issues: Vec<SchemaError>,
}

impl<'a> FieldReader<'a> {
    fn new(obj: &'a Map<String, Value>) -> Self {
        Self { obj, issues: Vec::new() }
    }

    fn string(&mut self, name: &str) -> String {
        match self.obj.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(_) => self.reject(name, SchemaErrorKind::StringType, String::new()),
            None => self.reject(name, SchemaErrorKind::Missing, String::new()),
        }
    }

    fn float(&mut self, name: &str) -> f64 {
        match self.obj.get(name) {
            Some(value) => match coerce_float(value) {
                Ok(f) => f,
                Err(kind) => self.reject(name, kind, 0.0),
            },
            None => self.reject(name, SchemaErrorKind::Missing, 0.0),
        }
    }

    fn optional_float(&mut self, name: &str) -> Option<f64> {
        match self.obj.get(name) {
            None | Some(Value::Null) => None,
            Some(value) => match coerce_float(value) {
                Ok(f) => Some(f),
                Err(kind) => self.reject(name, kind, None),
            },
        }
    }

    fn reject<T>(&mut self, name: &str, kind: SchemaErrorKind, placeholder: T) -> T {
        self.issues.push(SchemaError {
            loc: vec!["body".into(), name.to_string()],
            msg: kind.message().to_string(),
            kind,
        });
        placeholder
    }
}

/// Lax float conversion: JSON numbers, or strings holding a finite number.
fn coerce_float(value: &Value) -> Result<f64, SchemaErrorKind> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(SchemaErrorKind::FloatType),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or(SchemaErrorKind::FloatParsing),
        _ => Err(SchemaErrorKind::FloatType),
    }
}

/// Category of a schema validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaErrorKind {
    /// A required field is absent.
    Missing,
    /// The body is not well-formed JSON.
    JsonInvalid,
    /// The body is valid JSON but not an object.
    ModelAttributesType,
    /// A string field holds a non-string value.
    StringType,
    /// A float field holds a non-numeric value.
    FloatType,
    /// A float field holds a string that is not a finite number.
    FloatParsing,
}

impl SchemaErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            SchemaErrorKind::Missing => "Field required",
            SchemaErrorKind::JsonInvalid => "JSON decode error",
            SchemaErrorKind::ModelAttributesType => {
                "Input should be a valid dictionary or object to extract fields from"
            }
            SchemaErrorKind::StringType => "Input should be a valid string",
            SchemaErrorKind::FloatType => "Input should be a valid number",
            SchemaErrorKind::FloatParsing => {
                "Input should be a valid number, unable to parse string as a number"
            }
        }
    }
}

/// A single field-level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}: {msg}", .loc.join("."))]
pub struct SchemaError {
    /// Location of the problem, rooted at `"body"`.
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: SchemaErrorKind,
}

impl SchemaError {
    fn body(kind: SchemaErrorKind, msg: String) -> Self {
        Self {
            loc: vec!["body".into()],
            msg,
            kind,
        }
    }
}
