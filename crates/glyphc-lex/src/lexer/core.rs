//! Lexer driver: tries each token kind in a fixed recognition order —
//! whitespace, number, special glyph, character literal, string literal,
//! symbol.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use glyphc_util::{LexError, Span};

pub struct Lexer<'a> {
    pub(crate) cursor: Cursor<'a>,
    source: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            source,
        }
    }

    pub(crate) fn source(&self) -> &'a str {
        self.source
    }

    fn single(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        let span = Span::new(start, self.cursor.position());
        Token::new(kind, span, len)
    }

    fn try_whitespace(&mut self) -> Option<Token> {
        match self.cursor.current() {
            ' ' => Some(self.single(TokenKind::Space, 1)),
            '\t' => Some(self.single(TokenKind::Space, 4)),
            '\n' => Some(self.single(TokenKind::Linebreak, 0)),
            _ => None,
        }
    }

    fn try_special(&mut self) -> Option<Token> {
        let kind = match self.cursor.current() {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LSquare,
            ']' => TokenKind::RSquare,
            '{' => TokenKind::LCurly,
            '}' => TokenKind::RCurly,
            '?' => TokenKind::QMark,
            _ => return self.try_direction(),
        };
        Some(self.single(kind, 1))
    }

    fn try_direction(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        let kind = if self.cursor.eat_str("->") {
            TokenKind::Right
        } else if self.cursor.eat_str("<-") {
            TokenKind::Left
        } else if self.cursor.eat_str("|^") || self.cursor.eat_str("^|") {
            TokenKind::Up
        } else if self.cursor.eat_str("|v") || self.cursor.eat_str("v|") {
            TokenKind::Down
        } else {
            return None;
        };
        let span = Span::new(start, self.cursor.position());
        Some(Token::new(kind, span, 1))
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.is_at_end() {
            return Ok(None);
        }
        if let Some(tok) = self.try_whitespace() {
            return Ok(Some(tok));
        }
        if let Some(tok) = self.try_number()? {
            return Ok(Some(tok));
        }
        if let Some(tok) = self.try_special() {
            return Ok(Some(tok));
        }
        if let Some(tok) = self.try_char()? {
            return Ok(Some(tok));
        }
        if let Some(tok) = self.try_string()? {
            return Ok(Some(tok));
        }
        Ok(Some(self.lex_symbol()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(src);
        let mut out = Vec::new();
        while let Some(tok) = lexer.next_token().unwrap() {
            out.push(tok.kind);
        }
        out
    }

    #[test]
    fn specials_and_space() {
        assert_eq!(
            kinds("( )? "),
            vec![
                TokenKind::LParen,
                TokenKind::Space,
                TokenKind::RParen,
                TokenKind::QMark,
                TokenKind::Space,
            ]
        );
    }

    #[test]
    fn direction_arrows() {
        assert_eq!(
            kinds("-><-|^v|"),
            vec![TokenKind::Right, TokenKind::Left, TokenKind::Up, TokenKind::Down]
        );
    }

    #[test]
    fn number_then_symbol() {
        assert_eq!(
            kinds("42dup"),
            vec![TokenKind::Int(42), TokenKind::Symbol("dup".to_string())]
        );
    }

    #[test]
    fn grid_row_with_linebreak() {
        assert_eq!(
            kinds("5\n6"),
            vec![TokenKind::Int(5), TokenKind::Linebreak, TokenKind::Int(6)]
        );
    }
}
