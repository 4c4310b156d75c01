//! Token-stream cursor shared by the grammar modules.

use glyphc_lex::{Token, TokenKind};
use glyphc_util::{ParserError, Span};

pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> TokenCursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub fn advance(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    /// Skips `Space`/`Linebreak` tokens; used everywhere outside the body grid.
    pub fn skip_whitespace(&mut self) {
        while let Some(tok) = self.peek() {
            if tok.kind.is_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn last_span(&self) -> Span {
        self.tokens
            .last()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::new(0, 0))
    }

    pub fn error_here(&self, message: impl Into<String>) -> ParserError {
        let span = self.peek().map(|t| t.span).unwrap_or_else(|| self.last_span());
        ParserError::new(span, message)
    }

    /// Consumes the next token, skipping leading whitespace first, and
    /// errors if it doesn't match `kind` exactly (ignoring any payload).
    pub fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<(), ParserError> {
        self.skip_whitespace();
        match self.peek() {
            Some(tok) if std::mem::discriminant(&tok.kind) == std::mem::discriminant(kind) => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error_here(format!("expected {what}"))),
        }
    }

    /// Consumes the next token if it's a `Symbol`, returning its text.
    pub fn expect_symbol(&mut self, what: &str) -> Result<String, ParserError> {
        self.skip_whitespace();
        match self.peek().map(|t| &t.kind) {
            Some(TokenKind::Symbol(s)) => {
                let text = s.clone();
                self.advance();
                Ok(text)
            }
            _ => Err(self.error_here(format!("expected {what}"))),
        }
    }

    /// Non-consuming check for a `Symbol` token with exactly this text,
    /// after skipping whitespace. Used for the pseudo-keywords `...`/`:`
    /// which the lexer produces as ordinary symbols.
    pub fn peek_symbol_text(&mut self, text: &str) -> bool {
        self.skip_whitespace();
        matches!(self.peek().map(|t| &t.kind), Some(TokenKind::Symbol(s)) if s == text)
    }

    pub fn eat_symbol_text(&mut self, text: &str) -> bool {
        if self.peek_symbol_text(text) {
            self.advance();
            true
        } else {
            false
        }
    }
}
