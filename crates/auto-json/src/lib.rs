//! auto-json — declarative field-to-key JSON codec.
//!
//! A struct declares which of its fields map to which JSON keys with
//! [`auto_json!`]; [`serialize`] and [`deserialize`] then walk that binding
//! list recursively through nested structs, `Vec`s and maps.
//!
//! Output is canonical: compact, object keys in ascending byte order, no
//! trailing newline. Decoding never returns an error. Each kind of failure
//! has a fixed structural outcome instead:
//!
//! - unparsable text, an empty object or a non-object root leaves the target
//!   untouched;
//! - a field whose JSON kind does not match keeps its old value;
//! - a `Vec` with any invalid element becomes empty;
//! - a map drops just the invalid entries.
//!
//! # Example
//!
//! ```
//! use auto_json::{auto_json, deserialize, serialize};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Msg {
//!     id: i32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! auto_json! {
//!     Msg {
//!         id => "id",
//!         name => "name",
//!         tags => "tags",
//!     }
//! }
//!
//! assert_eq!(serialize(&Msg::default()), r#"{"id":0,"name":"","tags":null}"#);
//!
//! let mut msg = Msg { id: 5, name: "x".into(), tags: vec!["a".into()] };
//! deserialize("", &mut msg);
//! assert_eq!(msg, Msg { id: 5, name: "x".into(), tags: vec!["a".into()] });
//!
//! deserialize(r#"{"id":7,"tags":["b","c"]}"#, &mut msg);
//! assert_eq!(msg, Msg { id: 7, name: "x".into(), tags: vec!["b".into(), "c".into()] });
//! ```

pub mod canonical;
pub mod cli;
pub mod codec;
pub mod collection;
pub mod composite;
pub mod error;
pub mod options;
mod scalar;

pub use codec::{JsonCodec, JsonMapping, Kind};
pub use collection::MapKey;
pub use composite::{Decoder, Encoder};
pub use error::DecodeError;
pub use options::{Depth, Options, DEFAULT_MAX_DEPTH};
pub use serde_json::Value;

use tracing::debug;

/// Serialize a composite to canonical JSON text.
///
/// Returns an empty string when `T` is not a composite, or when the
/// composite's bindings produced nothing.
pub fn serialize<T: JsonCodec>(value: &T) -> String {
    serialize_with(value, &Options::default())
}

/// [`serialize`] with explicit options.
pub fn serialize_with<T: JsonCodec>(value: &T, options: &Options) -> String {
    if T::KIND != Kind::Composite {
        debug!(kind = ?T::KIND, "serialize called on a non-composite type");
        return String::new();
    }
    let node = value.encode(Depth::root(options));
    match &node {
        Value::Null => String::new(),
        Value::Object(obj) if obj.is_empty() => String::new(),
        _ => canonical::stringify(&node),
    }
}

/// Deserialize JSON text into an existing composite, in place.
///
/// Only fields whose keys are present with a usable value are overwritten.
/// When `text` does not parse, or its root is not a non-empty object,
/// `value` is left exactly as it was.
pub fn deserialize<T: JsonCodec>(text: &str, value: &mut T) {
    deserialize_with(text, value, &Options::default())
}

/// [`deserialize`] with explicit options.
pub fn deserialize_with<T: JsonCodec>(text: &str, value: &mut T, options: &Options) {
    if T::KIND != Kind::Composite {
        debug!(kind = ?T::KIND, "deserialize called on a non-composite type");
        return;
    }
    let root: Value = match serde_json::from_str(text) {
        Ok(root) => root,
        Err(err) => {
            debug!(%err, "document does not parse, target left unchanged");
            return;
        }
    };
    if let Err(err) = value.decode(&root, Depth::root(options)) {
        debug!(%err, "document root rejected, target left unchanged");
    }
}
