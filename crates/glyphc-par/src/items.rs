//! `fn-decl`, `arg-list`, and `ret-list` grammar.

use crate::ast::{ArgList, Argument, ReturnSig};
use crate::cursor::TokenCursor;
use crate::types::parse_typesig;
use glyphc_lex::TokenKind;
use glyphc_util::{ParserError, Symbol};

/// `arg-list := [ "..." ] { name ":" typesig }`, terminated by the caller's `)`.
pub fn parse_arg_list(cursor: &mut TokenCursor) -> Result<ArgList, ParserError> {
    let ellipses = cursor.eat_symbol_text("...");
    let mut args = Vec::new();
    loop {
        cursor.skip_whitespace();
        if matches!(cursor.peek().map(|t| &t.kind), Some(TokenKind::RParen)) {
            break;
        }
        let name = cursor.expect_symbol("an argument name")?;
        if !cursor.eat_symbol_text(":") {
            return Err(cursor.error_here("expected `:` after argument name"));
        }
        let ty = parse_typesig(cursor)?;
        args.push(Argument {
            name: Symbol::intern(&name),
            ty,
        });
    }
    Ok(if ellipses {
        ArgList::Ellipses(args)
    } else {
        ArgList::Limited(args)
    })
}

/// `ret-list := { typesig } [ "..." typesig ]`, terminated by the caller's `)`.
pub fn parse_ret_list(cursor: &mut TokenCursor) -> Result<ReturnSig, ParserError> {
    let mut sig = ReturnSig::default();
    loop {
        cursor.skip_whitespace();
        if matches!(cursor.peek().map(|t| &t.kind), Some(TokenKind::RParen)) {
            break;
        }
        if cursor.eat_symbol_text("...") {
            sig.rest = Some(parse_typesig(cursor)?);
            cursor.skip_whitespace();
            break;
        }
        sig.rets.push(parse_typesig(cursor)?);
    }
    Ok(sig)
}
