use std::{borrow::Cow, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Illegal,
    Plus,
    Comma,
    /// `::`
    Block,
    String,
    Number,
    Identifier,
    LParen,
    RParen,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Eof => "EOF",
            Self::Illegal => "ILLEGAL",
            Self::Plus => "PLUS",
            Self::Comma => "COMMA",
            Self::Block => "BLOCK",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::Identifier => "IDENTIFIER",
            Self::LParen => "OPAREN",
            Self::RParen => "CPAREN",
        }
    }
}

/// A lexeme and the byte offset it starts at.
///
/// `text` borrows from the source line, except for ILLEGAL tokens where it
/// holds the diagnostic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: Cow<'src, str>,
    pub position: usize,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, position: usize) -> Self {
        Self {
            kind,
            text: Cow::Borrowed(text),
            position,
        }
    }

    pub fn illegal(message: String, position: usize) -> Self {
        Self {
            kind: TokenKind::Illegal,
            text: Cow::Owned(message),
            position,
        }
    }

    pub fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, "EOF", position)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.name(), self.text)
    }
}
