use strlang::{Config, DEFAULT_MAX_DEPTH, DEFAULT_MAX_REPEAT_LEN};

#[derive(clap::Parser, Debug)]
#[clap(about, version, long_about = None)]
pub(crate) struct Cli {
    /// Largest string `repeat` may produce, in bytes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_REPEAT_LEN)]
    pub max_repeat_len: usize,

    /// Deepest expression tree accepted on a line
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            max_repeat_len: self.max_repeat_len,
            max_depth: self.max_depth,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Read and evaluate lines from stdin (the default)
    Repl,

    /// Evaluate a single expression
    Eval { expr: String },

    /// Print the tokens of an expression
    Tokens { expr: String },

    /// Print the parsed expression tree
    Ast { expr: String },
}
