//! `typesig := [ "[" ] symbol [ "]" ]`.

use crate::ast::TypeSig;
use crate::cursor::TokenCursor;
use glyphc_lex::TokenKind;
use glyphc_util::{ParserError, Symbol};

pub fn parse_typesig(cursor: &mut TokenCursor) -> Result<TypeSig, ParserError> {
    cursor.skip_whitespace();
    let is_stack = matches!(cursor.peek().map(|t| &t.kind), Some(TokenKind::LSquare));
    if is_stack {
        cursor.advance();
        cursor.skip_whitespace();
    }
    let name = cursor.expect_symbol("a type name")?;
    if is_stack {
        cursor.expect(&TokenKind::RSquare, "`]` closing a stack type")?;
    }
    Ok(TypeSig::new(Symbol::intern(&name), is_stack))
}
