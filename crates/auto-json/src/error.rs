use thiserror::Error;

/// Why a node could not be decoded into its target.
///
/// This is the failure signal the collection codecs act on. The public entry
/// points never surface it: a rejected decode shows up only as fields left
/// unchanged, an emptied sequence, or an omitted map entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected {expected}")]
    Mismatch { expected: &'static str },
    #[error("expected a non-empty object")]
    NotAnObject,
    #[error("invalid element at index {index}")]
    InvalidElement { index: usize },
    #[error("nesting deeper than {max} levels")]
    DepthLimit { max: usize },
}
