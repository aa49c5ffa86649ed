use std::fmt;

use super::token::Token;

/// Expression tree for one source line.
///
/// Nodes keep the tokens they were built from so the span and printed form
/// can be recovered; only `op`, `name` and the literal tokens matter for
/// evaluation.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Expression<'src> {
    Binary {
        lhs: Box<Expression<'src>>,
        op: Token<'src>,
        rhs: Box<Expression<'src>>,
    },
    Call {
        name: Token<'src>,
        block: Token<'src>,
        lparen: Token<'src>,
        args: Vec<Expression<'src>>,
        rparen: Token<'src>,
    },
    Grouping {
        lparen: Token<'src>,
        inner: Box<Expression<'src>>,
        rparen: Token<'src>,
    },
    String(Token<'src>),
    Number(Token<'src>),
}

impl Expression<'_> {
    /// Source positions of the first and last token covered by this node.
    pub fn span(&self) -> (usize, usize) {
        match self {
            Self::Binary { lhs, rhs, .. } => (lhs.span().0, rhs.span().1),
            Self::Call { name, rparen, .. } => (name.position, rparen.position),
            Self::Grouping { lparen, rparen, .. } => (lparen.position, rparen.position),
            Self::String(token) | Self::Number(token) => (token.position, token.position),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Binary { .. } => "BINARY",
            Self::Call { .. } => "CALL",
            Self::Grouping { .. } => "GROUP",
            Self::String(_) => "STRING",
            Self::Number(_) => "NUMBER",
        }
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary { lhs, op, rhs } => write!(f, "{lhs} {} {rhs}", op.text),
            Self::Call { name, args, .. } => {
                write!(f, "{}::(", name.text)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Self::Grouping { inner, .. } => write!(f, "({inner})"),
            Self::String(token) | Self::Number(token) => f.write_str(&token.text),
        }
    }
}
