//! Parser configuration.

use serde::{Deserialize, Serialize};

/// Default container nesting limit. Deep enough for any realistic document,
/// shallow enough that recursion stays well inside a default thread stack.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Hard ceiling on nesting. Any configured `max_depth` above this is clamped,
/// so no configuration can let recursion overflow the stack.
pub const MAX_SUPPORTED_DEPTH: usize = 1024;

/// Knobs for [`parse_with`](crate::parse_with).
///
/// Deserializable with every field optional, so a config file only needs to
/// name what it changes:
///
/// ```rust
/// use json_core::ParseOptions;
///
/// let opts: ParseOptions = serde_json::from_str(r#"{"max_depth": 16}"#).unwrap();
/// assert_eq!(opts.max_depth, 16);
/// assert!(!opts.allow_control_characters);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Maximum number of nested objects/arrays. Entering one more fails with
    /// [`ErrorKind::NestingTooDeep`](crate::ErrorKind::NestingTooDeep).
    /// Values above [`MAX_SUPPORTED_DEPTH`] behave as that ceiling.
    pub max_depth: usize,

    /// Accept raw U+0000..=U+001F characters inside strings. RFC 8259
    /// requires them to be escaped, so this is off by default.
    pub allow_control_characters: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            allow_control_characters: false,
        }
    }
}

impl ParseOptions {
    /// Set the nesting limit, clamped to [`MAX_SUPPORTED_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_SUPPORTED_DEPTH);
        self
    }

    /// The limit the parser enforces. The field is public, so it may hold a
    /// value above the ceiling; this never does.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_SUPPORTED_DEPTH)
    }

    pub fn with_control_characters(mut self, allow: bool) -> Self {
        self.allow_control_characters = allow;
        self
    }
}
