use crate::error::{PedidosError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Field set by the server when a receipt accompanies a create.
pub const COMPROBANTE_URL_FIELD: &str = "comprobanteUrl";
pub const ID_FIELD: &str = "id";

/// One order record.
///
/// The schema belongs to the caller: a pedido is any JSON object, kept in its
/// original field order. Only `id` and `comprobanteUrl` mean anything to the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pedido(Map<String, Value>);

impl Pedido {
    /// Accepts any JSON object; everything else is a malformed request.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(PedidosError::MalformedRequest(format!(
                "pedido must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| PedidosError::MalformedRequest(format!("pedido is not valid JSON: {e}")))?;
        Self::from_value(value)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// The numeric id, if the record has one. String ids are not ids.
    pub fn id(&self) -> Option<f64> {
        self.0.get(ID_FIELD).and_then(Value::as_f64)
    }

    pub fn matches(&self, id: OrderId) -> bool {
        self.id().is_some_and(|own| id.matches(own))
    }

    pub fn comprobante_url(&self) -> Option<&str> {
        self.0.get(COMPROBANTE_URL_FIELD).and_then(Value::as_str)
    }

    pub fn set_comprobante_url(&mut self, url: impl Into<String>) {
        self.0
            .insert(COMPROBANTE_URL_FIELD.to_string(), Value::String(url.into()));
    }

    /// Shallow merge: incoming fields overwrite, nothing is removed. Existing keys
    /// keep their position; new keys are appended.
    pub fn merge(&mut self, incoming: Map<String, Value>) {
        for (key, value) in incoming {
            self.0.insert(key, value);
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Pedido {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The whole backing document: `{ "pedidos": [...] }`.
///
/// Top-level fields other than `pedidos` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub pedidos: Vec<Pedido>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Collection {
    pub fn new(pedidos: Vec<Pedido>) -> Self {
        Self {
            pedidos,
            extra: Map::new(),
        }
    }

    pub fn position(&self, id: OrderId) -> Option<usize> {
        self.pedidos.iter().position(|p| p.matches(id))
    }
}

/// An id taken from a request path.
///
/// Parsing never fails: text that is not a number becomes NaN, which is equal to
/// nothing, so an unparseable id behaves like an id that does not exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderId(f64);

impl OrderId {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn parse(text: &str) -> Self {
        Self(parse_number(text))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn matches(&self, stored: f64) -> bool {
        self.0 == stored
    }
}

impl FromStr for OrderId {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<f64> for OrderId {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            write!(f, "NaN")
        } else if v.is_infinite() {
            write!(f, "{}Infinity", if v < 0.0 { "-" } else { "" })
        } else if v.fract() == 0.0 && v.abs() < 1e15 {
            write!(f, "{}", v as i64)
        } else {
            write!(f, "{}", v)
        }
    }
}

/// Numeric coercion of path text, following JavaScript's `Number(text)`.
fn parse_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lower = s.get(..2).map(str::to_ascii_lowercase);
        if lower.as_deref() == Some(prefix) {
            let digits = &s[2..];
            if digits.starts_with('+') {
                return f64::NAN;
            }
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan"; JavaScript does not.
    if s
        .chars()
        .any(|c| c.is_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
