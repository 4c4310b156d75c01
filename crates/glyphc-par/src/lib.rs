//! Token stream to function declarations.

pub mod ast;
mod cursor;
mod grid;
mod items;
mod types;

pub use ast::*;

use cursor::TokenCursor;
use glyphc_lex::{Token, TokenKind};
use glyphc_util::{ParserError, Symbol};

/// `program := { fn-decl }`.
pub fn parse_program(tokens: &[Token]) -> Result<Program, ParserError> {
    let mut cursor = TokenCursor::new(tokens);
    let mut decls = Vec::new();
    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            break;
        }
        decls.push(parse_fn_decl(&mut cursor)?);
    }
    Ok(decls)
}

/// `fn-decl := "fn" name "(" arg-list ")" "->" "(" ret-list ")" "{" grid "}"`.
fn parse_fn_decl(cursor: &mut TokenCursor) -> Result<FnDecl, ParserError> {
    if !cursor.eat_symbol_text("fn") {
        return Err(cursor.error_here("unknown top-level form, expected `fn`"));
    }
    let name = cursor.expect_symbol("a function name")?;

    cursor.expect(&TokenKind::LParen, "`(` opening the argument list")?;
    let args = items::parse_arg_list(cursor)?;
    cursor.expect(&TokenKind::RParen, "`)` closing the argument list")?;

    cursor.expect(&TokenKind::Right, "`->` before the return list")?;

    cursor.expect(&TokenKind::LParen, "`(` opening the return list")?;
    let rets = items::parse_ret_list(cursor)?;
    cursor.expect(&TokenKind::RParen, "`)` closing the return list")?;

    cursor.expect(&TokenKind::LCurly, "`{` opening the function body")?;
    let grid = grid::parse_grid(cursor)?;

    Ok(FnDecl {
        name: Symbol::intern(&name),
        args,
        rets,
        grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphc_lex::tokenize;

    fn parse(src: &str) -> Program {
        parse_program(&tokenize(src).unwrap()).unwrap()
    }

    #[test]
    fn empty_main() {
        let prog = parse("fn main () -> () {}");
        assert_eq!(prog.len(), 1);
        assert_eq!(prog[0].name.as_str(), "main");
        assert!(prog[0].args.args().is_empty());
        assert!(!prog[0].args.is_ellipses());
        assert!(prog[0].rets.rets.is_empty());
        assert!(prog[0].grid.is_empty());
    }

    #[test]
    fn args_and_rets_with_types() {
        let prog = parse("fn add (a : int b : int) -> (int) {\na -> print\n}");
        let f = &prog[0];
        assert_eq!(f.args.args().len(), 2);
        assert_eq!(f.args.args()[0].name.as_str(), "a");
        assert_eq!(f.args.args()[0].ty.name.as_str(), "int");
        assert_eq!(f.rets.rets[0].name.as_str(), "int");
    }

    #[test]
    fn ellipses_args_and_rest_return() {
        let prog = parse("fn box (... ) -> ( ... [int]) {}");
        assert!(prog[0].args.is_ellipses());
        let rest = prog[0].rets.rest.as_ref().unwrap();
        assert!(rest.is_stack);
        assert_eq!(rest.name.as_str(), "int");
    }

    #[test]
    fn missing_arrow_is_an_error() {
        let err = parse_program(&tokenize("fn bad () () {}").unwrap()).unwrap_err();
        assert!(err.message.contains("->"));
    }

    #[test]
    fn two_declarations() {
        let prog = parse("fn a () -> () {}\nfn b () -> () {}");
        assert_eq!(prog.len(), 2);
        assert_eq!(prog[1].name.as_str(), "b");
    }
}
