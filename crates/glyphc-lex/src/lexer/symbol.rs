//! Symbol (bare identifier) recognition.
//!
//! A symbol runs until a special glyph, a direction glyph, or whitespace —
//! a lookahead, not a consuming check. In particular, scanning must *peek*
//! an arrow digraph rather than consume it on a match, or a symbol written
//! immediately before `->` would swallow the arrow into its own text.

use super::core::Lexer;
use crate::token::{Token, TokenKind};
use glyphc_util::Span;

const ARROW_DIGRAPHS: [&str; 6] = ["->", "<-", "|^", "^|", "|v", "v|"];

fn is_boundary(c: char) -> bool {
    matches!(
        c,
        '\0' | ' ' | '\t' | '\n' | '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}' | '?'
    )
}

impl<'a> Lexer<'a> {
    /// A symbol is any run of characters not otherwise claimed by a more
    /// specific token kind; it always succeeds and consumes at least one
    /// character, since callers only reach this after every earlier rule
    /// in the recognition order has declined.
    pub(crate) fn lex_symbol(&mut self) -> Token {
        let start = self.cursor.position();
        loop {
            let c = self.cursor.current();
            if is_boundary(c) {
                break;
            }
            if ARROW_DIGRAPHS.iter().any(|d| self.cursor.peek_str(d)) {
                break;
            }
            self.cursor.advance();
        }
        if self.cursor.position() == start {
            // Nothing claimed the character and it wasn't a boundary we
            // recognize elsewhere (e.g. a lone digraph char); take it so
            // the lexer always makes forward progress.
            self.cursor.advance();
        }
        let end = self.cursor.position();
        let text = self.source()[start..end].to_string();
        let span = Span::new(start, end);
        let len = text.chars().count();
        Token::new(TokenKind::Symbol(text), span, len)
    }
}
