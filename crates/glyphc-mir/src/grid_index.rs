//! Column-indexed view of a parsed body grid.

use glyphc_par::{Grid, GridNode};
use glyphc_util::GridPos;

pub struct GridIndex {
    rows: Vec<Vec<(i64, GridNode)>>,
}

impl GridIndex {
    pub fn build(grid: &Grid) -> Self {
        let rows = grid
            .iter()
            .map(|row| {
                let mut x = 0i64;
                row.iter()
                    .map(|node| {
                        let start = x;
                        x += node.len as i64;
                        (start, *node)
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn row_count(&self) -> i64 {
        self.rows.len() as i64
    }

    pub fn row_in_bounds(&self, y: i64) -> bool {
        y >= 0 && y < self.row_count()
    }

    /// The node whose horizontal extent covers `pos.x` on row `pos.y`,
    /// along with the column its extent actually starts at.
    pub fn node_at(&self, pos: GridPos) -> Option<(i64, GridNode)> {
        if pos.y < 0 {
            return None;
        }
        let row = self.rows.get(pos.y as usize)?;
        row.iter()
            .find(|(start, node)| pos.x >= *start && pos.x < *start + node.len as i64)
            .map(|(start, node)| (*start, *node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphc_par::GridNodeKind;

    fn node(kind: GridNodeKind, len: usize) -> GridNode {
        GridNode::new(kind, len)
    }

    #[test]
    fn finds_node_covering_a_wide_cell() {
        let grid: Grid = vec![vec![
            node(GridNodeKind::Call(glyphc_util::Symbol::intern("dup")), 3),
            node(GridNodeKind::DirRight, 1),
        ]];
        let idx = GridIndex::build(&grid);
        let (start, found) = idx.node_at(GridPos::new(2, 0)).unwrap();
        assert_eq!(start, 0);
        assert_eq!(found.len, 3);
        let (start2, found2) = idx.node_at(GridPos::new(3, 0)).unwrap();
        assert_eq!(start2, 3);
        assert_eq!(found2.kind, GridNodeKind::DirRight);
    }

    #[test]
    fn missing_cell_is_none() {
        let grid: Grid = vec![vec![node(GridNodeKind::DirRight, 1)]];
        let idx = GridIndex::build(&grid);
        assert!(idx.node_at(GridPos::new(5, 0)).is_none());
        assert!(idx.node_at(GridPos::new(0, 1)).is_none());
    }
}
