//! Request DTOs for the cache API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use crate::cache::{Decode, Value};

/// JSON form of a storable value.
///
/// Integers are tried before floats, so `5` stores an integer and `5.0` a float.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ValueInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<ValueInput> for Value {
    fn from(input: ValueInput) -> Self {
        match input {
            ValueInput::Integer(i) => Value::Integer(i),
            ValueInput::Float(x) => Value::Float(x),
            ValueInput::Text(s) => Value::Text(s),
        }
    }
}

/// Request body for the STORE operation (POST /store)
///
/// # Fields
/// - `value`: The value to store under a new key
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRequest {
    /// The value to store
    pub value: ValueInput,
}

/// Query string for the GET operation (GET /get/:key)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetQuery {
    /// Decode strategy, UTF-8 text when omitted
    #[serde(default)]
    pub decode: Decode,
}
