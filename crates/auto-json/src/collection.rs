//! Sequence and mapping codecs.
//!
//! The two shapes fail differently on decode. A sequence is all or nothing:
//! the first element that does not decode empties the whole target. A
//! mapping keeps every entry that decodes and drops the rest.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::codec::{JsonCodec, Kind};
use crate::error::DecodeError;
use crate::options::Depth;

/// Key types a mapping can be keyed by.
///
/// Integer keys travel as their base-10 text since JSON member names are
/// always strings.
pub trait MapKey: Sized {
    fn to_member_name(&self) -> String;

    /// Parse a member name back into a key. `None` skips the entry.
    fn from_member_name(name: &str) -> Option<Self>;
}

impl MapKey for String {
    fn to_member_name(&self) -> String {
        self.clone()
    }

    fn from_member_name(name: &str) -> Option<Self> {
        Some(name.to_owned())
    }
}

impl MapKey for i32 {
    fn to_member_name(&self) -> String {
        self.to_string()
    }

    fn from_member_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl MapKey for i64 {
    fn to_member_name(&self) -> String {
        self.to_string()
    }

    fn from_member_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

/// Decode one collection element into a fresh default value.
///
/// A `null` element stands for an empty nested collection, since that is how
/// one encodes; it yields the empty default instead of failing.
fn decode_element<T: JsonCodec + Default>(item: &Value, depth: Depth) -> Result<T, DecodeError> {
    let mut element = T::default();
    if item.is_null() && matches!(T::KIND, Kind::Sequence | Kind::Mapping) {
        return Ok(element);
    }
    element.decode(item, depth)?;
    Ok(element)
}

// ── Sequence ──────────────────────────────────────────────────────────────

impl<T: JsonCodec + Default> JsonCodec for Vec<T> {
    const KIND: Kind = Kind::Sequence;

    /// An empty sequence encodes to `null`, the same as an absent one.
    fn encode(&self, depth: Depth) -> Value {
        if self.is_empty() {
            return Value::Null;
        }
        let Some(depth) = depth.descend() else {
            warn!(max = depth.max(), "sequence exceeds depth limit, encoded as null");
            return Value::Null;
        };
        Value::Array(self.iter().map(|item| item.encode(depth)).collect())
    }

    fn decode(&mut self, node: &Value, depth: Depth) -> Result<(), DecodeError> {
        let items = node
            .as_array()
            .ok_or(DecodeError::Mismatch { expected: "array" })?;
        let depth = depth
            .descend()
            .ok_or(DecodeError::DepthLimit { max: depth.max() })?;

        self.clear();
        self.reserve(items.len());
        for (index, item) in items.iter().enumerate() {
            match decode_element(item, depth) {
                Ok(element) => self.push(element),
                Err(err) => {
                    trace!(index, %err, "sequence element rejected, discarding sequence");
                    *self = Vec::new();
                    return Err(DecodeError::InvalidElement { index });
                }
            }
        }
        Ok(())
    }
}

// ── Mapping ───────────────────────────────────────────────────────────────

fn encode_entries<'a, K, V, I>(entries: I, depth: Depth) -> Value
where
    K: MapKey + 'a,
    V: JsonCodec + 'a,
    I: ExactSizeIterator<Item = (&'a K, &'a V)>,
{
    if entries.len() == 0 {
        return Value::Null;
    }
    let Some(depth) = depth.descend() else {
        warn!(max = depth.max(), "mapping exceeds depth limit, encoded as null");
        return Value::Null;
    };
    let mut obj = Map::with_capacity(entries.len());
    for (key, value) in entries {
        obj.insert(key.to_member_name(), value.encode(depth));
    }
    Value::Object(obj)
}

/// Decode every usable member of `node`, in document order.
///
/// Members whose name is not a valid key or whose value does not decode are
/// skipped. Fails only when `node` is not an object or is too deep.
fn decode_entries<K, V>(node: &Value, depth: Depth) -> Result<Vec<(K, V)>, DecodeError>
where
    K: MapKey,
    V: JsonCodec + Default,
{
    let members = node
        .as_object()
        .ok_or(DecodeError::Mismatch { expected: "object" })?;
    let depth = depth
        .descend()
        .ok_or(DecodeError::DepthLimit { max: depth.max() })?;

    let mut entries = Vec::with_capacity(members.len());
    for (name, item) in members {
        let Some(key) = K::from_member_name(name) else {
            trace!(member = %name, "member name is not a valid key, entry skipped");
            continue;
        };
        match decode_element::<V>(item, depth) {
            Ok(element) => entries.push((key, element)),
            Err(err) => trace!(member = %name, %err, "mapping entry rejected, entry skipped"),
        }
    }
    Ok(entries)
}

impl<K, V> JsonCodec for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: JsonCodec + Default,
{
    const KIND: Kind = Kind::Mapping;

    fn encode(&self, depth: Depth) -> Value {
        encode_entries(self.iter(), depth)
    }

    fn decode(&mut self, node: &Value, depth: Depth) -> Result<(), DecodeError> {
        let entries = decode_entries(node, depth)?;
        self.clear();
        for (key, value) in entries {
            // Several member names can parse to one integer key; first wins.
            self.entry(key).or_insert(value);
        }
        Ok(())
    }
}

impl<K, V, S> JsonCodec for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: JsonCodec + Default,
    S: BuildHasher,
{
    const KIND: Kind = Kind::Mapping;

    fn encode(&self, depth: Depth) -> Value {
        encode_entries(self.iter(), depth)
    }

    fn decode(&mut self, node: &Value, depth: Depth) -> Result<(), DecodeError> {
        let entries = decode_entries(node, depth)?;
        self.clear();
        for (key, value) in entries {
            self.entry(key).or_insert(value);
        }
        Ok(())
    }
}
