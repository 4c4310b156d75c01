//! Source text to token stream.

pub mod cursor;
mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use glyphc_util::LexError;

/// Lexes an entire source buffer, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(tok) = lexer.next_token()? {
        tokens.push(tok);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_a_small_program_fragment() {
        let toks = tokenize("fn main ( ) -> ( ) {").unwrap();
        assert!(toks
            .iter()
            .any(|t| matches!(&t.kind, TokenKind::Symbol(s) if s == "fn")));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Right)));
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::LCurly)));
    }

    #[test]
    fn propagates_lex_errors() {
        let err = tokenize("\"unterminated").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }
}
