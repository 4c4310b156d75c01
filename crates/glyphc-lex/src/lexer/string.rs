//! String and character literal recognition.

use super::core::Lexer;
use crate::token::{Token, TokenKind};
use glyphc_util::{LexError, Span};

impl<'a> Lexer<'a> {
    /// Reads one escaped or literal character after an opening `'` or `"`.
    /// Recognizes `\n`, `\r`, `\t`; any other character following a
    /// backslash is taken literally. A bare newline or end of input is an
    /// unterminated literal.
    fn take_char(&mut self, span_start: usize, quote: char) -> Result<char, LexError> {
        match self.cursor.advance() {
            '\\' => match self.cursor.advance() {
                'n' => Ok('\n'),
                'r' => Ok('\r'),
                't' => Ok('\t'),
                '\0' => Err(self.unterminated(span_start, quote)),
                c => Ok(c),
            },
            '\0' | '\n' => Err(self.unterminated(span_start, quote)),
            c => Ok(c),
        }
    }

    fn unterminated(&self, span_start: usize, quote: char) -> LexError {
        LexError::new(
            Span::new(span_start, self.cursor.position()),
            format!("unterminated {quote}-quoted literal"),
        )
    }

    pub(crate) fn try_char(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.current() != '\'' {
            return Ok(None);
        }
        let start = self.cursor.position();
        self.cursor.advance();
        let value = self.take_char(start, '\'')?;
        if self.cursor.advance() != '\'' {
            return Err(self.unterminated(start, '\''));
        }
        let end = self.cursor.position();
        let span = Span::new(start, end);
        let len = self.source()[start..end].chars().count();
        Ok(Some(Token::new(TokenKind::Char(value as u32), span, len)))
    }

    pub(crate) fn try_string(&mut self) -> Result<Option<Token>, LexError> {
        if self.cursor.current() != '"' {
            return Ok(None);
        }
        let start = self.cursor.position();
        self.cursor.advance();
        let mut out = String::new();
        loop {
            if self.cursor.current() == '"' {
                self.cursor.advance();
                break;
            }
            out.push(self.take_char(start, '"')?);
        }
        let end = self.cursor.position();
        let span = Span::new(start, end);
        let len = self.source()[start..end].chars().count();
        Ok(Some(Token::new(TokenKind::Str(out), span, len)))
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::core::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn plain_char() {
        let mut lexer = Lexer::new("'a'");
        assert_eq!(lexer.try_char().unwrap().unwrap().kind, TokenKind::Char('a' as u32));
    }

    #[test]
    fn escaped_newline_char() {
        let mut lexer = Lexer::new("'\\n'");
        assert_eq!(lexer.try_char().unwrap().unwrap().kind, TokenKind::Char('\n' as u32));
    }

    #[test]
    fn plain_string() {
        let mut lexer = Lexer::new("\"hi\\tthere\"");
        let tok = lexer.try_string().unwrap().unwrap();
        assert_eq!(tok.kind, TokenKind::Str("hi\tthere".to_string()));
    }

    #[test]
    fn unterminated_string_errors() {
        let mut lexer = Lexer::new("\"oops");
        assert!(lexer.try_string().unwrap_err().to_string().contains("unterminated"));
    }

    #[test]
    fn unterminated_char_errors() {
        let mut lexer = Lexer::new("'a");
        assert!(lexer.try_char().unwrap_err().to_string().contains("unterminated"));
    }

    #[test]
    fn non_ascii_char_has_codepoint_length_one() {
        let mut lexer = Lexer::new("'⇈'");
        assert_eq!(lexer.try_char().unwrap().unwrap().grid_len, 1);
    }

    #[test]
    fn non_ascii_string_length_is_codepoint_count_not_byte_count() {
        let mut lexer = Lexer::new("\"⇈↕□\"");
        let tok = lexer.try_string().unwrap().unwrap();
        assert_eq!(tok.kind, TokenKind::Str("⇈↕□".to_string()));
        assert_eq!(tok.grid_len, 3);
    }
}
