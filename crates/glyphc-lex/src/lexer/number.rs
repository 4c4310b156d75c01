//! Integer/float literal recognition.

use super::core::Lexer;
use crate::token::{Token, TokenKind};
use glyphc_util::{LexError, Span};

impl<'a> Lexer<'a> {
    /// Attempts to lex a number at the cursor. On failure the cursor is
    /// rewound exactly to where it started, so the caller can fall through
    /// to special-glyph or symbol recognition (a lone sign is not a number).
    pub(crate) fn try_number(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.cursor.position();

        if matches!(self.cursor.current(), '+' | '-') {
            self.cursor.advance();
        }
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }

        let int_part = &self.source()[start..self.cursor.position()];
        if int_part.is_empty() || int_part == "+" || int_part == "-" {
            self.cursor.set_position(start);
            return Ok(None);
        }

        // Open question resolved (see DESIGN.md): a fractional part is only
        // recognized once a non-empty integer part has already been seen;
        // a bare `.5` is lexed as a symbol, not a float.
        let is_float = self.cursor.current() == '.';
        if is_float {
            self.cursor.advance();
            while self.cursor.current().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let end = self.cursor.position();
        let text = &self.source()[start..end];
        let span = Span::new(start, end);

        if is_float {
            let value: f32 = text
                .parse()
                .map_err(|_| LexError::new(span, "floating point literal out of range"))?;
            Ok(Some(Token::new(TokenKind::Float(value), span, end - start)))
        } else {
            let value: i32 = text
                .parse()
                .map_err(|_| LexError::new(span, "integer literal out of range"))?;
            Ok(Some(Token::new(TokenKind::Int(value), span, end - start)))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;

    fn lex_one(src: &str) -> TokenKind {
        let mut lexer = Lexer::new(src);
        lexer.try_number().unwrap().unwrap().kind
    }

    #[test]
    fn plain_int() {
        assert_eq!(lex_one("42"), TokenKind::Int(42));
    }

    #[test]
    fn signed_int() {
        assert_eq!(lex_one("-7"), TokenKind::Int(-7));
    }

    #[test]
    fn float_with_fraction() {
        assert_eq!(lex_one("3.14"), TokenKind::Float(3.14));
    }

    #[test]
    fn trailing_dot_is_float() {
        assert_eq!(lex_one("12."), TokenKind::Float(12.0));
    }

    #[test]
    fn lone_sign_rewinds() {
        let mut lexer = Lexer::new("->");
        assert_eq!(lexer.try_number().unwrap(), None);
        assert_eq!(lexer.cursor.position(), 0);
    }

    #[test]
    fn leading_dot_is_not_a_number() {
        let mut lexer = Lexer::new(".5");
        assert_eq!(lexer.try_number().unwrap(), None);
        assert_eq!(lexer.cursor.position(), 0);
    }
}
