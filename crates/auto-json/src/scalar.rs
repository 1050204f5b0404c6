//! Scalar codecs: bool, i32, i64, f32, f64 and String.
//!
//! Decoding only overwrites the target when the node has the matching JSON
//! kind; anything else is reported as a mismatch and the target keeps its
//! previous value.

use serde_json::{Number, Value};

use crate::codec::{JsonCodec, Kind};
use crate::error::DecodeError;
use crate::options::Depth;

fn float_node(n: f64) -> Value {
    // NaN and infinities have no JSON representation.
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

impl JsonCodec for bool {
    const KIND: Kind = Kind::Scalar;

    fn encode(&self, _depth: Depth) -> Value {
        Value::Bool(*self)
    }

    fn decode(&mut self, node: &Value, _depth: Depth) -> Result<(), DecodeError> {
        let b = node
            .as_bool()
            .ok_or(DecodeError::Mismatch { expected: "boolean" })?;
        *self = b;
        Ok(())
    }
}

impl JsonCodec for i32 {
    const KIND: Kind = Kind::Scalar;

    fn encode(&self, _depth: Depth) -> Value {
        Value::from(*self)
    }

    fn decode(&mut self, node: &Value, _depth: Depth) -> Result<(), DecodeError> {
        let n = node
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(DecodeError::Mismatch {
                expected: "32-bit integer",
            })?;
        *self = n;
        Ok(())
    }
}

impl JsonCodec for i64 {
    const KIND: Kind = Kind::Scalar;

    fn encode(&self, _depth: Depth) -> Value {
        Value::from(*self)
    }

    fn decode(&mut self, node: &Value, _depth: Depth) -> Result<(), DecodeError> {
        let n = node.as_i64().ok_or(DecodeError::Mismatch {
            expected: "64-bit integer",
        })?;
        *self = n;
        Ok(())
    }
}

// Floating targets accept any JSON number, integers included.

impl JsonCodec for f32 {
    const KIND: Kind = Kind::Scalar;

    fn encode(&self, _depth: Depth) -> Value {
        float_node(f64::from(*self))
    }

    fn decode(&mut self, node: &Value, _depth: Depth) -> Result<(), DecodeError> {
        let n = node
            .as_f64()
            .ok_or(DecodeError::Mismatch { expected: "number" })?;
        *self = n as f32;
        Ok(())
    }
}

impl JsonCodec for f64 {
    const KIND: Kind = Kind::Scalar;

    fn encode(&self, _depth: Depth) -> Value {
        float_node(*self)
    }

    fn decode(&mut self, node: &Value, _depth: Depth) -> Result<(), DecodeError> {
        let n = node
            .as_f64()
            .ok_or(DecodeError::Mismatch { expected: "number" })?;
        *self = n;
        Ok(())
    }
}

impl JsonCodec for String {
    const KIND: Kind = Kind::Scalar;

    fn encode(&self, _depth: Depth) -> Value {
        Value::String(self.clone())
    }

    fn decode(&mut self, node: &Value, _depth: Depth) -> Result<(), DecodeError> {
        let s = node
            .as_str()
            .ok_or(DecodeError::Mismatch { expected: "string" })?;
        s.clone_into(self);
        Ok(())
    }
}
