//! The compiler's one error taxonomy.
//!
//! Every stage is fatal-on-first-error: there is no recovery and no partial
//! output. Each error variant carries exactly the context its stage can
//! know about — byte spans for lex/parse, grid coordinates for the
//! traverser, and a function name for the checker.

use crate::span::Span;
use crate::GridPos;
use thiserror::Error;

/// Lexer failure: unclosed literal, unknown byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("at {span}: {message}")]
pub struct LexError {
    pub span: Span,
    pub message: String,
}

impl LexError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Parser failure: missing token, malformed declaration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("at {span}: {message}")]
pub struct ParserError {
    pub span: Span,
    pub message: String,
}

impl ParserError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Traverser failure: malformed branch geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("at {pos}: {message}")]
pub struct TraverserError {
    pub pos: GridPos,
    pub message: String,
}

impl TraverserError {
    pub fn new(pos: GridPos, message: impl Into<String>) -> Self {
        Self {
            pos,
            message: message.into(),
        }
    }
}

/// Checker failure: type mismatch, unknown name, bad control flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("in function `{function}`: {message}")]
pub struct CheckError {
    pub function: String,
    pub message: String,
}

impl CheckError {
    pub fn new(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            function: function.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_error_displays_span_and_message() {
        let e = LexError::new(Span::new(0, 1), "unknown byte");
        assert_eq!(e.to_string(), "at 0..1: unknown byte");
    }

    #[test]
    fn traverser_error_includes_pos() {
        let e = TraverserError::new(GridPos::new(3, 1), "branch geometry");
        assert_eq!(e.to_string(), "at (3, 1): branch geometry");
    }

    #[test]
    fn check_error_includes_function() {
        let e = CheckError::new("main", "undeclared call target");
        assert_eq!(e.to_string(), "in function `main`: undeclared call target");
    }
}
