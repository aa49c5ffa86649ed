use strlang::{
    error::{EvalError, LexError, ParseError},
    eval_line, Config, ErrorKind, Interpreter,
};

fn ok(src: &str) -> String {
    eval_line(src).unwrap_or_else(|e| panic!("{src}: {e}"))
}

#[test]
fn concatenation_is_associative() {
    assert_eq!(ok("\"a\"+(\"b\"+\"c\")"), ok("(\"a\"+\"b\")+\"c\""));
    assert_eq!(ok("('a'+'b')"), ok("'a'+'b'"));
}

#[test]
fn reverse() {
    assert_eq!(ok("reverse::(\"abc\")"), "cba");
    assert_eq!(ok("reverse::(reverse::(\"abc\"))"), "abc");
}

#[test]
fn substr() {
    assert_eq!(ok("substr::(\"hello\",1,4)"), "ell");
    assert_eq!(ok("substr::(\"hello\",-3)"), "llo");
    assert_eq!(
        eval_line("substr::(\"hello\",5)"),
        Err(ErrorKind::Runtime(EvalError::InvalidRange { name: "substr" }))
    );
}

#[test]
fn repeat() {
    assert_eq!(ok("repeat::(\"ab\",3)"), "ababab");
    assert_eq!(ok("repeat::(\"ab\",0)"), "");
    assert!(matches!(
        eval_line("repeat::(\"ab\",-1)"),
        Err(ErrorKind::Runtime(EvalError::InvalidCount { .. }))
    ));
}

#[test]
fn repeat_limit_is_configurable() {
    let interpreter = Interpreter::with_config(Config {
        max_repeat_len: 10,
        ..Config::default()
    });
    assert_eq!(
        interpreter.eval("repeat::('abc', 4)").unwrap_err().to_string(),
        "evaluation error: repeat: count too large"
    );
    assert!(eval_line("repeat::('abc', 99999999999)").is_err());
}

#[test]
fn unterminated_quote_is_a_lex_failure() {
    assert_eq!(
        eval_line("\"unterminated + 'x"),
        Err(ErrorKind::Lex(LexError {
            position: 0,
            message: "missing closing quotes".into()
        }))
    );
    assert_eq!(
        eval_line("'a' + \"b").unwrap_err().to_string(),
        "lexer error: position 6: missing closing quotes"
    );
}

#[test]
fn unknown_function_fails_at_evaluation() {
    assert_eq!(
        eval_line("foo::(\"x\")").unwrap_err().to_string(),
        "evaluation error: \"foo\": no such function"
    );
}

#[test]
fn trailing_garbage_is_a_parse_failure() {
    assert_eq!(
        eval_line("\"a\" )"),
        Err(ErrorKind::Parse(ParseError {
            position: 4,
            token: Some(")".into()),
            message: "erroneous token".into()
        }))
    );
}

#[test]
fn exactly_one_outcome_per_line() {
    assert_eq!(eval_line("'a'"), Ok("a".to_string()));
    assert_eq!(ok("'ok' + repeat::(substr::('xyz', -2), 2)"), "okyzyz");

    assert!(matches!(eval_line("'a' +"), Err(ErrorKind::Parse(_))));
    assert!(matches!(eval_line("("), Err(ErrorKind::Parse(_))));
    assert!(matches!(
        eval_line("::"),
        Err(ErrorKind::Parse(ParseError { token: Some(t), .. })) if t == "::"
    ));
    assert!(matches!(
        eval_line("reverse::('a', 'b')"),
        Err(ErrorKind::Runtime(EvalError::ArgumentCount { name: "reverse", got: 2, .. }))
    ));
    assert!(matches!(
        eval_line("substr::('abc', 'x')"),
        Err(ErrorKind::Runtime(EvalError::NotAnInteger { name: "substr", .. }))
    ));
    assert!(matches!(eval_line("@"), Err(ErrorKind::Lex(LexError { position: 0, .. }))));
}

#[test]
fn deep_nesting_fails_to_parse() {
    let depth = 100_000;
    let groups = format!("{}'a'{}", "(".repeat(depth), ")".repeat(depth));
    assert!(matches!(eval_line(&groups), Err(ErrorKind::Parse(_))));

    let calls = format!("{}'a'{}", "reverse::(".repeat(depth), ")".repeat(depth));
    assert!(matches!(eval_line(&calls), Err(ErrorKind::Parse(_))));

    let chain = format!("'a'{}", " + 'a'".repeat(depth));
    assert!(matches!(eval_line(&chain), Err(ErrorKind::Parse(_))));

    let within = format!("{}'a'{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(ok(&within), "a");
}

#[test]
fn interpreter_is_shareable_across_threads() {
    let interpreter = Interpreter::new();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let interpreter = &interpreter;
                s.spawn(move || interpreter.eval(&format!("repeat::('x', {i})")))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap().unwrap(), "x".repeat(i));
        }
    });
}
