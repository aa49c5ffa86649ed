pub mod builtin;
mod config;
mod eval;

pub use config::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_REPEAT_LEN};
pub use eval::Interpreter;
