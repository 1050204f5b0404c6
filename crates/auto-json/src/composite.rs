//! The mapping engine: runs a composite's binding list against a scratch
//! node (encode) or a source object (decode).
//!
//! All working state lives in [`Encoder`] and [`Decoder`], created for one
//! composite pass and dropped when it ends. Nothing is stored on the value
//! being encoded or decoded, so passes are reentrant.

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::codec::{JsonCodec, JsonMapping};
use crate::error::DecodeError;
use crate::options::Depth;

/// Collects the encoded bindings of one composite.
#[derive(Debug)]
pub struct Encoder {
    scratch: Option<Map<String, Value>>,
    depth: Depth,
}

impl Encoder {
    fn new(depth: Depth) -> Self {
        Self {
            scratch: None,
            depth,
        }
    }

    /// Write `value` under `key`. A later binding with the same key replaces
    /// the earlier one.
    pub fn field<T: JsonCodec>(&mut self, key: &str, value: &T) {
        let node = value.encode(self.depth);
        self.scratch
            .get_or_insert_with(Map::new)
            .insert(key.to_owned(), node);
    }

    /// The produced node; `null` when no binding wrote anything.
    fn finish(self) -> Value {
        self.scratch.map_or(Value::Null, Value::Object)
    }
}

/// Reads bindings of one composite out of a source object.
#[derive(Debug)]
pub struct Decoder<'a> {
    source: &'a Map<String, Value>,
    depth: Depth,
}

impl<'a> Decoder<'a> {
    fn new(source: &'a Map<String, Value>, depth: Depth) -> Self {
        Self { source, depth }
    }

    /// Decode the member at `key` into `value`.
    ///
    /// An absent key or a failed decode never stops the pass; sibling
    /// bindings are still read.
    pub fn field<T: JsonCodec>(&self, key: &str, value: &mut T) {
        let Some(node) = self.source.get(key) else {
            trace!(key, "binding absent from source");
            return;
        };
        if let Err(err) = value.decode(node, self.depth) {
            trace!(key, %err, "binding not decoded");
        }
    }
}

/// Encode a composite into a fresh node. Never fails.
pub fn encode_composite<T: JsonMapping + ?Sized>(value: &T, depth: Depth) -> Value {
    let Some(depth) = depth.descend() else {
        warn!(max = depth.max(), "composite exceeds depth limit, encoded as null");
        return Value::Null;
    };
    let mut enc = Encoder::new(depth);
    value.encode_fields(&mut enc);
    enc.finish()
}

/// Decode a composite from `node`.
///
/// Fails without touching `value` unless `node` is a non-empty object.
pub fn decode_composite<T: JsonMapping + ?Sized>(
    value: &mut T,
    node: &Value,
    depth: Depth,
) -> Result<(), DecodeError> {
    let source = match node {
        Value::Object(obj) if !obj.is_empty() => obj,
        _ => return Err(DecodeError::NotAnObject),
    };
    let depth = depth
        .descend()
        .ok_or(DecodeError::DepthLimit { max: depth.max() })?;
    value.decode_fields(&Decoder::new(source, depth));
    Ok(())
}

/// Declare the `(field, key)` bindings of a struct.
///
/// Implements [`JsonMapping`] and [`JsonCodec`] for the type. Bindings are
/// walked in the declared order on every encode and decode.
///
/// ```
/// use auto_json::auto_json;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
///     label: String,
/// }
///
/// auto_json! {
///     Point {
///         x => "x",
///         y => "y",
///         label => "name",
///     }
/// }
///
/// let p = Point { x: 1, y: 2, label: "origin".into() };
/// assert_eq!(auto_json::serialize(&p), r#"{"name":"origin","x":1,"y":2}"#);
/// ```
#[macro_export]
macro_rules! auto_json {
    ($ty:ty { $($field:ident => $key:expr),* $(,)? }) => {
        impl $crate::JsonMapping for $ty {
            #[allow(unused_variables)]
            fn encode_fields(&self, enc: &mut $crate::Encoder) {
                $( enc.field($key, &self.$field); )*
            }

            #[allow(unused_variables)]
            fn decode_fields(&mut self, dec: &$crate::Decoder<'_>) {
                $( dec.field($key, &mut self.$field); )*
            }
        }

        impl $crate::JsonCodec for $ty {
            const KIND: $crate::Kind = $crate::Kind::Composite;

            fn encode(&self, depth: $crate::Depth) -> $crate::Value {
                $crate::composite::encode_composite(self, depth)
            }

            fn decode(
                &mut self,
                node: &$crate::Value,
                depth: $crate::Depth,
            ) -> ::core::result::Result<(), $crate::DecodeError> {
                $crate::composite::decode_composite(self, node, depth)
            }
        }
    };
}
