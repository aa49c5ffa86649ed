//! A tiny expression language whose values are strings.
//!
//! A line such as `reverse::('abc') + substr::("hello", -3)` is lexed,
//! parsed into an [`syntax::Expression`] tree and evaluated to a single
//! string by an [`Interpreter`].

pub mod error;
pub mod runtime;
pub mod syntax;

pub use error::{ErrorKind, PResult};
pub use runtime::{Config, Interpreter, DEFAULT_MAX_DEPTH, DEFAULT_MAX_REPEAT_LEN};

/// Evaluates one line with the default limits.
pub fn eval_line(src: &str) -> PResult<String> {
    Interpreter::new().eval(src)
}
