use crate::{
    error::{LexError, ParseError},
    syntax::{
        lexer::tokenize,
        token::{Token, TokenKind},
        ExprParser, Expression,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser will build.
pub const DEFAULT_MAX_DEPTH: usize = 256;

pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    /// Builds a parser over an already lexed line. A trailing EOF token is
    /// appended if the buffer does not end with one.
    pub fn new(mut tokens: Vec<Token<'src>>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            let end = tokens.last().map_or(0, |t| t.position + t.text.len());
            tokens.push(Token::eof(end));
        }
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bounds the depth of the tree, counting groups, calls and each `+` fold.
    /// Evaluating and dropping the tree recurse along the same path.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn from_src(src: &'src str) -> Result<Self, LexError> {
        Ok(Self::new(tokenize(src)?))
    }

    /// Parses one full expression and requires the rest of the line to be empty.
    pub fn parse(&mut self) -> ParseResult<Box<Expression<'src>>> {
        let expr = self.parse_expr()?;
        if !self.curr().is(TokenKind::Eof) {
            return Err(self.error("erroneous token"));
        }
        log::debug!("parsed {} {:?}: {expr}", expr.kind_name(), expr.span());
        Ok(expr)
    }

    pub(super) fn curr(&self) -> &Token<'src> {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    /// Returns the current token and moves past it. The cursor never moves past EOF.
    pub(super) fn bump(&mut self) -> Token<'src> {
        let token = self.curr().clone();
        if !token.is(TokenKind::Eof) {
            self.pos += 1;
        }
        token
    }

    pub(super) fn expect(&mut self, kind: TokenKind, message: &str) -> ParseResult<Token<'src>> {
        if self.curr().is(kind) {
            return Ok(self.bump());
        }
        Err(self.error(message))
    }

    /// Moves one level down the tree. The caller restores `depth` when done.
    pub(super) fn descend(&mut self) -> ParseResult<()> {
        if self.depth >= self.max_depth {
            return Err(self.error("expression nested too deeply"));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn nested<T, F>(&mut self, parse: F) -> ParseResult<T>
    where
        F: FnOnce(&mut Self) -> ParseResult<T>,
    {
        let depth = self.depth;
        self.descend()?;
        let result = parse(self);
        self.depth = depth;
        result
    }

    pub(super) fn depth(&self) -> usize {
        self.depth
    }

    pub(super) fn reset_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    pub(super) fn error(&self, message: &str) -> ParseError {
        let token = self.curr();
        ParseError {
            position: token.position,
            token: (!token.is(TokenKind::Eof)).then(|| token.text.to_string()),
            message: message.into(),
        }
    }
}
