pub use crate::syntax::DEFAULT_MAX_DEPTH;

/// Upper bound on the output of `repeat`, in bytes.
pub const DEFAULT_MAX_REPEAT_LEN: usize = 1 << 20;

/// Limits applied while parsing and evaluating a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_repeat_len: usize,
    /// Deepest expression tree accepted, counting groups, calls and `+` folds.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_repeat_len: DEFAULT_MAX_REPEAT_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
