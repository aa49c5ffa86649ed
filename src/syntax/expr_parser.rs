use super::{
    token::{Token, TokenKind},
    ExprParser, Expression, ParseResult, Parser,
};

impl<'src> ExprParser<'src> for Parser<'src> {
    fn parse_expr(&mut self) -> ParseResult<Box<Expression<'src>>> {
        let depth = self.depth();
        let mut lhs = self.parse_primary()?;

        // Each fold pushes the chain so far one level further down the tree.
        while self.curr().is(TokenKind::Plus) {
            self.descend()?;
            let op = self.bump();
            let rhs = self.parse_primary()?;
            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        self.reset_depth(depth);
        Ok(lhs)
    }

    fn parse_primary(&mut self) -> ParseResult<Box<Expression<'src>>> {
        match self.curr().kind {
            TokenKind::Eof => Err(self.error("expected more input")),
            TokenKind::String => Ok(Box::new(Expression::String(self.bump()))),
            TokenKind::LParen => {
                let lparen = self.bump();
                self.parse_grouping_expr(lparen)
            }
            TokenKind::Identifier => {
                let name = self.bump();
                self.parse_call_expr(name)
            }
            _ => Err(self.error("unexpected token")),
        }
    }

    fn parse_grouping_expr(&mut self, lparen: Token<'src>) -> ParseResult<Box<Expression<'src>>> {
        let inner = self.nested(|p| p.parse_expr())?;
        let rparen = self.expect(TokenKind::RParen, "expected closing parentheses")?;
        Ok(Box::new(Expression::Grouping {
            lparen,
            inner,
            rparen,
        }))
    }

    fn parse_call_expr(&mut self, name: Token<'src>) -> ParseResult<Box<Expression<'src>>> {
        const EXPECTED_BLOCK: &str = "expected '::(' after function identifier";

        let block = self.expect(TokenKind::Block, EXPECTED_BLOCK)?;
        let lparen = self.expect(TokenKind::LParen, EXPECTED_BLOCK)?;

        let args = self.nested(|p| {
            let mut args = vec![p.parse_argument()?];
            loop {
                match p.curr().kind {
                    TokenKind::RParen => return Ok(args),
                    TokenKind::Comma => {
                        p.bump();
                        args.push(p.parse_argument()?);
                    }
                    _ => {
                        return Err(p.error(
                            "expected comma or closing parentheses after function argument(s)",
                        ))
                    }
                }
            }
        })?;
        let rparen = self.bump();

        Ok(Box::new(Expression::Call {
            name,
            block,
            lparen,
            args,
            rparen,
        }))
    }

    fn parse_argument(&mut self) -> ParseResult<Expression<'src>> {
        if self.curr().is(TokenKind::Number) {
            return Ok(Expression::Number(self.bump()));
        }
        Ok(*self.parse_expr()?)
    }
}
