use super::Config;
use crate::error::{Arity, EvalError};

pub type NativeFn = fn(&[String], &Config) -> Result<String, EvalError>;

/// A named string transformation callable as `name::(args...)`.
pub struct Builtin {
    pub name: &'static str,
    pub arity: Arity,
    func: NativeFn,
}

impl Builtin {
    pub fn call(&self, args: &[String], config: &Config) -> Result<String, EvalError> {
        if !self.arity.accepts(args.len()) {
            return Err(EvalError::ArgumentCount {
                name: self.name,
                expected: self.arity,
                got: args.len(),
            });
        }
        (self.func)(args, config)
    }
}

static BUILTINS: [Builtin; 3] = [
    Builtin {
        name: "reverse",
        arity: Arity::Exact(1),
        func: native::reverse,
    },
    Builtin {
        name: "substr",
        arity: Arity::Either(2, 3),
        func: native::substr,
    },
    Builtin {
        name: "repeat",
        arity: Arity::Exact(2),
        func: native::repeat,
    },
];

pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

pub fn all() -> &'static [Builtin] {
    &BUILTINS
}

/// Argument counts are checked by [`Builtin::call`] before these run.
pub(super) mod native {
    use crate::{error::EvalError, runtime::Config};

    pub fn reverse(args: &[String], _: &Config) -> Result<String, EvalError> {
        Ok(args[0].chars().rev().collect())
    }

    pub fn substr(args: &[String], _: &Config) -> Result<String, EvalError> {
        let chars: Vec<char> = args[0].chars().collect();
        let len = chars.len() as i64;
        let invalid_range = EvalError::InvalidRange { name: "substr" };

        let start = normalize(index(&args[1], "second")?, len);
        let range = match args.get(2) {
            None => {
                if start < 0 || start >= len {
                    return Err(invalid_range);
                }
                start as usize..chars.len()
            }
            Some(end) => {
                let end = normalize(index(end, "third")?, len);
                if start < 0 || end > len || start >= end {
                    return Err(invalid_range);
                }
                start as usize..end as usize
            }
        };

        Ok(chars[range].iter().collect())
    }

    pub fn repeat(args: &[String], config: &Config) -> Result<String, EvalError> {
        let count: usize = args[1].parse().map_err(|_| EvalError::InvalidCount {
            name: "repeat",
            ordinal: "second",
        })?;

        match args[0].len().checked_mul(count) {
            Some(total) if total <= config.max_repeat_len => Ok(args[0].repeat(count)),
            _ => {
                log::warn!(
                    "repeat: {count} copies of {} bytes exceed the limit of {} bytes",
                    args[0].len(),
                    config.max_repeat_len
                );
                Err(EvalError::CountTooLarge { name: "repeat" })
            }
        }
    }

    fn index(arg: &str, ordinal: &'static str) -> Result<i64, EvalError> {
        arg.parse().map_err(|_| EvalError::NotAnInteger {
            name: "substr",
            ordinal,
        })
    }

    /// Negative indices count from the end of the string.
    fn normalize(i: i64, len: i64) -> i64 {
        if i < 0 {
            i + len
        } else {
            i
        }
    }
}
