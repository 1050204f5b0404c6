//! Codec configuration and the per-call nesting guard.

/// Default nesting limit; matches the recursion limit of the JSON parser.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for [`serialize_with`](crate::serialize_with) and
/// [`deserialize_with`](crate::deserialize_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of nested composites and collections, the top-level
    /// composite included.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Nesting level of the node currently being encoded or decoded.
///
/// Passed by value down the recursion; every composite or collection calls
/// [`Depth::descend`] before touching its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depth {
    level: usize,
    max: usize,
}

impl Depth {
    pub fn root(options: &Options) -> Self {
        Self {
            level: 0,
            max: options.max_depth,
        }
    }

    /// One level deeper, or `None` once the limit would be exceeded.
    pub fn descend(self) -> Option<Self> {
        if self.level >= self.max {
            return None;
        }
        Some(Self {
            level: self.level + 1,
            max: self.max,
        })
    }

    pub fn max(&self) -> usize {
        self.max
    }
}
