//! The capability traits every position in a value graph dispatches through.

use serde_json::Value;

use crate::composite::{Decoder, Encoder};
use crate::error::DecodeError;
use crate::options::Depth;

/// Which codec family a type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Scalar,
    Sequence,
    Mapping,
    /// A type implementing [`JsonMapping`]; only these can be serialized at
    /// the top level.
    Composite,
}

/// Conversion between a Rust value and a value tree node.
///
/// Implemented for the supported scalars, `Vec`, `BTreeMap` and `HashMap`,
/// and for every composite declared with [`auto_json!`](crate::auto_json).
/// A type without an impl cannot appear in a binding at all.
pub trait JsonCodec {
    const KIND: Kind;

    /// Encode into a fresh node. Never fails.
    fn encode(&self, depth: Depth) -> Value;

    /// Decode `node` into `self`.
    ///
    /// On `Err` scalars and composites are left untouched; a sequence may
    /// have been emptied (see the collection codecs).
    fn decode(&mut self, node: &Value, depth: Depth) -> Result<(), DecodeError>;
}

/// The composite mapping capability: an ordered, static list of
/// `(field, key)` bindings, walked once per pass.
///
/// Both methods must visit the same bindings in the same order. The
/// [`auto_json!`](crate::auto_json) macro generates them from one table.
pub trait JsonMapping {
    fn encode_fields(&self, enc: &mut Encoder);

    fn decode_fields(&mut self, dec: &Decoder<'_>);
}
