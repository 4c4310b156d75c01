//! Body grid parsing.

use crate::ast::{Grid, GridNode, GridNodeKind};
use crate::cursor::TokenCursor;
use glyphc_lex::TokenKind;
use glyphc_util::{ParserError, Symbol};

fn node_for(cursor: &TokenCursor, kind: &TokenKind) -> Result<Option<GridNodeKind>, ParserError> {
    Ok(Some(match kind {
        TokenKind::Int(v) => GridNodeKind::IntLit(*v),
        TokenKind::Float(v) => GridNodeKind::float_lit(*v),
        TokenKind::Char(v) => GridNodeKind::CharLit(*v),
        TokenKind::Str(s) => GridNodeKind::StrLit(Symbol::intern(s)),
        TokenKind::Symbol(s) => GridNodeKind::Call(Symbol::intern(s)),
        TokenKind::QMark => GridNodeKind::Branch,
        TokenKind::Left => GridNodeKind::DirLeft,
        TokenKind::Right => GridNodeKind::DirRight,
        TokenKind::Up => GridNodeKind::DirUp,
        TokenKind::Down => GridNodeKind::DirDown,
        TokenKind::Space => GridNodeKind::Space,
        TokenKind::Linebreak => return Ok(None),
        _ => return Err(cursor.error_here("unexpected token in function body")),
    }))
}

/// Consumes tokens until the body's closing `}` (already expected not to
/// recurse through nested braces; the grammar has none). Returns the
/// parsed grid with the `}` consumed.
pub fn parse_grid(cursor: &mut TokenCursor) -> Result<Grid, ParserError> {
    let mut grid: Grid = Vec::new();
    let mut row = Vec::new();
    loop {
        let tok = cursor
            .peek()
            .ok_or_else(|| cursor.error_here("unclosed function body, expected `}`"))?;
        if matches!(tok.kind, TokenKind::RCurly) {
            cursor.advance();
            if !row.is_empty() {
                grid.push(row);
            }
            return Ok(grid);
        }
        if matches!(tok.kind, TokenKind::Linebreak) {
            cursor.advance();
            grid.push(std::mem::take(&mut row));
            continue;
        }
        let kind = node_for(cursor, &tok.kind)?.expect("Linebreak handled above");
        let len = tok.grid_len;
        cursor.advance();
        row.push(GridNode::new(kind, len));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphc_lex::tokenize;

    fn grid_of(src: &str) -> Grid {
        let toks = tokenize(src).unwrap();
        let mut cursor = TokenCursor::new(&toks);
        parse_grid(&mut cursor).unwrap()
    }

    #[test]
    fn single_row() {
        let grid = grid_of("42 -> print}");
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 5);
        assert_eq!(grid[0][0].kind, GridNodeKind::IntLit(42));
        assert_eq!(grid[0][2].kind, GridNodeKind::DirRight);
    }

    #[test]
    fn multiple_rows_split_on_linebreak() {
        let grid = grid_of("1\n2}");
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0][0].kind, GridNodeKind::IntLit(1));
        assert_eq!(grid[1][0].kind, GridNodeKind::IntLit(2));
    }

    #[test]
    fn empty_body() {
        let grid = grid_of("}");
        assert!(grid.is_empty());
    }
}
