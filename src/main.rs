mod cli;

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser as _;
use cli::{Cli, Command};
use strlang::{
    syntax::{tokenize, Expression, Parser},
    ErrorKind, Interpreter,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let interpreter = Interpreter::with_config(cli.config());
    log::debug!("{:?}", interpreter.config());

    let ok = match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => match repl(&interpreter) {
            Ok(()) => true,
            Err(why) => {
                eprintln!("{why}");
                false
            }
        },
        Command::Eval { expr } => run(&interpreter, &expr),
        Command::Tokens { expr } => print_tokens(&expr),
        Command::Ast { expr } => print_ast(&expr, interpreter.config().max_depth),
    };

    if !ok {
        process::exit(1);
    }
}

fn run(interpreter: &Interpreter, line: &str) -> bool {
    match interpreter.eval(line) {
        Ok(value) => {
            println!("\"{value}\"");
            true
        }
        Err(why) => {
            eprintln!("{why}");
            false
        }
    }
}

fn repl(interpreter: &Interpreter) -> io::Result<()> {
    let mut lines = io::stdin().lock().lines();
    let mut stdout = io::stdout();

    loop {
        print!(">>> ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;

        if !line.is_empty() {
            run(interpreter, &line);
        }
    }
}

fn print_tokens(line: &str) -> bool {
    match tokenize(line) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
            true
        }
        Err(why) => {
            eprintln!("{}", ErrorKind::from(why));
            false
        }
    }
}

fn print_ast(line: &str, max_depth: usize) -> bool {
    let parsed = Parser::from_src(line)
        .map_err(ErrorKind::from)
        .and_then(|parser| {
            let mut parser = parser.with_max_depth(max_depth);
            parser.parse().map_err(ErrorKind::from)
        });

    match parsed {
        Ok(expr) => {
            dump(&expr, 0);
            true
        }
        Err(why) => {
            eprintln!("{why}");
            false
        }
    }
}

fn dump(expr: &Expression, depth: usize) {
    let (start, end) = expr.span();
    println!("{:indent$}{} {start}..{end}: {expr}", "", expr.kind_name(), indent = depth * 2);

    match expr {
        Expression::Binary { lhs, rhs, .. } => {
            dump(lhs, depth + 1);
            dump(rhs, depth + 1);
        }
        Expression::Call { args, .. } => args.iter().for_each(|arg| dump(arg, depth + 1)),
        Expression::Grouping { inner, .. } => dump(inner, depth + 1),
        Expression::String(_) | Expression::Number(_) => (),
    }
}
