mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;

pub use expr::Expression;
pub use lexer::{tokenize, Lexer};
pub use parser::{ParseResult, Parser, DEFAULT_MAX_DEPTH};
pub use token::{Token, TokenKind};

/// Recursive-descent entry points of the expression grammar.
///
/// ```text
/// expression := primary ( PLUS primary )*
/// primary    := STRING
///             | OPAREN expression CPAREN
///             | IDENTIFIER BLOCK OPAREN arglist CPAREN
/// arglist    := argument ( COMMA argument )*
/// argument   := expression | NUMBER
/// ```
pub trait ExprParser<'src> {
    fn parse_expr(&mut self) -> ParseResult<Box<Expression<'src>>>;
    fn parse_primary(&mut self) -> ParseResult<Box<Expression<'src>>>;
    fn parse_grouping_expr(&mut self, lparen: Token<'src>) -> ParseResult<Box<Expression<'src>>>;
    fn parse_call_expr(&mut self, name: Token<'src>) -> ParseResult<Box<Expression<'src>>>;
    fn parse_argument(&mut self) -> ParseResult<Expression<'src>>;
}
