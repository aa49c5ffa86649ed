use super::{builtin, Config};
use crate::{
    error::{EvalError, PResult},
    syntax::{Expression, Parser, TokenKind},
};

/// Evaluates string expressions one line at a time.
///
/// Holds no per-line state, so one interpreter can be shared between threads.
#[derive(Debug, Default, Clone)]
pub struct Interpreter {
    config: Config,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Lexes, parses and evaluates a single line of source text.
    pub fn eval(&self, src: &str) -> PResult<String> {
        let mut parser = Parser::from_src(src)?.with_max_depth(self.config.max_depth);
        let expr = parser.parse()?;
        Ok(self.eval_expr(&expr)?)
    }

    pub fn eval_expr(&self, expr: &Expression) -> Result<String, EvalError> {
        match expr {
            Expression::String(token) => {
                let text = &token.text;
                Ok(text.get(1..text.len().saturating_sub(1)).unwrap_or_default().to_string())
            }
            Expression::Number(token) => Ok(token.text.to_string()),
            Expression::Grouping { inner, .. } => self.eval_expr(inner),
            Expression::Binary { lhs, op, rhs } => {
                let mut value = self.eval_expr(lhs)?;
                let rhs = self.eval_expr(rhs)?;
                match op.kind {
                    TokenKind::Plus => {
                        value.push_str(&rhs);
                        Ok(value)
                    }
                    other => unreachable!("{} is not a binary operator", other.name()),
                }
            }
            Expression::Call { name, args, .. } => {
                let args = args
                    .iter()
                    .map(|arg| self.eval_expr(arg))
                    .collect::<Result<Vec<_>, _>>()?;

                let Some(builtin) = builtin::lookup(&name.text) else {
                    return Err(EvalError::NoSuchFunction(name.text.to_string()));
                };

                log::debug!("calling {}::({:?})", builtin.name, args);
                builtin.call(&args, &self.config)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::Interpreter;
    use crate::{
        error::{ErrorKind, EvalError},
        runtime::Config,
        syntax::{Expression, Token, TokenKind},
    };

    fn eval(src: &str) -> String {
        Interpreter::new().eval(src).unwrap()
    }

    fn eval_err(src: &str) -> EvalError {
        match Interpreter::new().eval(src) {
            Err(ErrorKind::Runtime(err)) => err,
            other => panic!("expected an evaluation error, got {other:?}"),
        }
    }

    #[test]
    fn eval_literals() {
        assert_eq!(eval("'hello'"), "hello");
        assert_eq!(eval("\"it's\""), "it's");
        assert_eq!(eval("''"), "");
        assert_eq!(eval("'no \\n escapes'"), "no \\n escapes");
    }

    #[test]
    fn eval_concatenation() {
        assert_eq!(eval("'a' + \"b\" + 'c'"), "abc");
        assert_eq!(eval("'a' + ('b' + 'c')"), eval("('a' + 'b') + 'c'"));
        assert_eq!(eval("('a' + 'b')"), eval("'a' + 'b'"));
    }

    #[test]
    fn eval_calls() {
        assert_eq!(eval("reverse::('abc')"), "cba");
        assert_eq!(eval("reverse::(reverse::('abc'))"), "abc");
        assert_eq!(eval("substr::('hello', 1, 4)"), "ell");
        assert_eq!(eval("substr::('hello', -3)"), "llo");
        assert_eq!(eval("substr::('hello', '1')"), "ello");
        assert_eq!(eval("repeat::('ab' + 'c', 2) + '!'"), "abcabc!");
    }

    #[test]
    fn number_evaluates_to_its_text() {
        let number = Expression::Number(Token::new(TokenKind::Number, "-12", 0));
        assert_eq!(Interpreter::new().eval_expr(&number).unwrap(), "-12");
    }

    #[test]
    fn unknown_function() {
        assert_eq!(eval_err("foo::('x')"), EvalError::NoSuchFunction("foo".into()));
        assert_eq!(
            eval_err("'a' + foo::('x')").to_string(),
            "\"foo\": no such function"
        );
    }

    #[test]
    fn arguments_fail_before_lookup() {
        assert_eq!(
            eval_err("foo::(substr::('hello', 9))"),
            EvalError::InvalidRange { name: "substr" }
        );
    }

    #[test]
    fn errors_propagate_through_groups() {
        assert_eq!(
            eval_err("('x' + (repeat::('ab', -1)))").to_string(),
            "repeat: second argument is not a valid integer"
        );
    }

    #[test]
    fn config_limits_repeat() {
        let interpreter = Interpreter::with_config(Config {
            max_repeat_len: 3,
            ..Config::default()
        });
        assert_eq!(interpreter.eval("repeat::('a', 3)").unwrap(), "aaa");
        assert_eq!(
            interpreter.eval("repeat::('a', 4)"),
            Err(ErrorKind::Runtime(EvalError::CountTooLarge { name: "repeat" }))
        );
    }

    #[test]
    fn config_limits_depth() {
        let interpreter = Interpreter::with_config(Config {
            max_depth: 2,
            ..Config::default()
        });
        assert_eq!(interpreter.eval("reverse::(('ab'))").unwrap(), "ba");
        assert!(matches!(
            interpreter.eval("reverse::((('ab')))"),
            Err(ErrorKind::Parse(err)) if err.message == "expression nested too deeply"
        ));
    }

    #[test]
    fn phases_are_distinguished() {
        let interpreter = Interpreter::new();
        assert!(matches!(interpreter.eval("'a"), Err(ErrorKind::Lex(_))));
        assert!(matches!(interpreter.eval("'a' )"), Err(ErrorKind::Parse(_))));
        assert!(matches!(interpreter.eval("bar::('a')"), Err(ErrorKind::Runtime(_))));
    }
}
