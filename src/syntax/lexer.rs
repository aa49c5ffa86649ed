use std::{
    iter::{FusedIterator, Peekable},
    str::CharIndices,
};

use super::token::{Token, TokenKind};
use crate::error::LexError;

pub struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    done: bool,
}

/// Yields tokens up to and including the first EOF or ILLEGAL token.
impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.advance();
        self.done = matches!(token.kind, TokenKind::Eof | TokenKind::Illegal);
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            done: false,
        }
    }

    /// Scans the next token. Once the input is exhausted every call returns EOF.
    pub fn advance(&mut self) -> Token<'src> {
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }

        let Some((off, c)) = self.chars.next() else {
            return Token::eof(self.src.len());
        };

        match c {
            '(' => self.single(TokenKind::LParen, off),
            ')' => self.single(TokenKind::RParen, off),
            ',' => self.single(TokenKind::Comma, off),
            '+' => self.single(TokenKind::Plus, off),
            ':' => match self.chars.peek() {
                Some(&(_, ':')) => {
                    self.bump();
                    Token::new(TokenKind::Block, &self.src[off..off + 2], off)
                }
                _ => Token::illegal("erroneous ':'".into(), off),
            },
            '"' | '\'' => self.read_string(off, c),
            '-' if self.peek_is(|c| c.is_ascii_digit()) => self.read_number(off),
            c if c.is_ascii_digit() => self.read_number(off),
            c if Self::is_id_start(c) => self.read_id(off),
            c => Token::illegal(format!("erroneous character '{c}'"), off),
        }
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn peek_is<P>(&mut self, predicate: P) -> bool
    where
        P: Fn(char) -> bool,
    {
        matches!(self.chars.peek(), Some(&(_, c)) if predicate(c))
    }

    fn single(&self, kind: TokenKind, off: usize) -> Token<'src> {
        Token::new(kind, &self.src[off..off + 1], off)
    }

    fn slice_until<P>(&mut self, from_off: usize, predicate: P) -> &'src str
    where
        P: Fn(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_string(&mut self, from_off: usize, quote: char) -> Token<'src> {
        for (off, c) in self.chars.by_ref() {
            if c == quote {
                return Token::new(TokenKind::String, &self.src[from_off..=off], from_off);
            }
        }
        Token::illegal("missing closing quotes".into(), from_off)
    }

    fn read_number(&mut self, from_off: usize) -> Token<'src> {
        let s = self.slice_until(from_off + 1, |c| !c.is_ascii_digit());
        let end = from_off + 1 + s.len();
        Token::new(TokenKind::Number, &self.src[from_off..end], from_off)
    }

    fn read_id(&mut self, from_off: usize) -> Token<'src> {
        let s = self.slice_until(from_off, |c| !Self::is_id_part(c));
        Token::new(TokenKind::Identifier, s, from_off)
    }

    fn is_id_start(c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_id_part(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

/// Lexes a whole line into the buffer the parser works on.
///
/// The returned vector always ends with an EOF token.
pub fn tokenize(src: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut tokens = Vec::new();
    for token in Lexer::new(src) {
        log::trace!("{token} @ {}", token.position);
        if token.is(TokenKind::Illegal) {
            return Err(LexError {
                position: token.position,
                message: token.text.into_owned(),
            });
        }
        tokens.push(token);
    }
    Ok(tokens)
}
