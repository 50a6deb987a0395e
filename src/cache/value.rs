//! Cache Value Module
//!
//! Typed values accepted by `Cache::store` and the decode strategies applied
//! by `Cache::get`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

// == Value ==
/// A value the cache can store.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
    Integer(i64),
    Float(f64),
}

impl Value {
    /// Canonical byte encoding written to the store.
    ///
    /// Floats use the shortest representation that parses back to the same
    /// `f64` and always carry a fraction or exponent (`1.0`, not `1`).
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Text(s) => s.as_bytes().to_vec(),
            Value::Bytes(b) => b.clone(),
            Value::Integer(i) => i.to_string().into_bytes(),
            Value::Float(f) => format!("{:?}", f).into_bytes(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "{}", s),
            Value::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

// == Decode ==
/// How raw bytes read from the store are turned back into a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decode {
    /// Raw bytes, unchanged
    Identity,
    /// UTF-8 text
    #[default]
    Utf8,
    /// UTF-8 text parsed as a signed 64-bit integer
    Integer,
    /// UTF-8 text parsed as a 64-bit float
    Float,
}

impl Decode {
    /// Applies the strategy to `raw`.
    pub fn apply(self, raw: Vec<u8>) -> Result<Decoded> {
        match self {
            Decode::Identity => Ok(Decoded::Bytes(raw)),
            Decode::Utf8 => decode_text(raw).map(Decoded::Text),
            Decode::Integer => decode_integer(raw).map(Decoded::Integer),
            Decode::Float => decode_float(raw).map(Decoded::Float),
        }
    }
}

// == Decode Functions ==
/// Decodes raw bytes as UTF-8 text.
pub fn decode_text(raw: Vec<u8>) -> Result<String> {
    String::from_utf8(raw).map_err(|e| CacheError::Decode(format!("invalid UTF-8: {}", e)))
}

/// Decodes raw bytes as a decimal integer.
pub fn decode_integer(raw: Vec<u8>) -> Result<i64> {
    let text = decode_text(raw)?;
    text.parse::<i64>()
        .map_err(|e| CacheError::Decode(format!("'{}' is not an integer: {}", text, e)))
}

/// Decodes raw bytes as a float.
pub fn decode_float(raw: Vec<u8>) -> Result<f64> {
    let text = decode_text(raw)?;
    text.parse::<f64>()
        .map_err(|e| CacheError::Decode(format!("'{}' is not a float: {}", text, e)))
}

// == Decoded ==
/// Result of applying a `Decode` strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Decoded {
    Bytes(Vec<u8>),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for Decoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoded::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Decoded::Text(s) => write!(f, "{}", s),
            Decoded::Integer(i) => write!(f, "{}", i),
            Decoded::Float(x) => write!(f, "{:?}", x),
        }
    }
}
