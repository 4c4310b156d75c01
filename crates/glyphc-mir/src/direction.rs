//! Walker direction state.

use glyphc_util::GridPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Unit displacement for one step in this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn step(self, pos: GridPos) -> GridPos {
        let (dx, dy) = self.delta();
        pos.offset(dx, dy)
    }

    /// Step scaled by `n`, used for horizontal travel across a multi-column node.
    pub fn step_by(self, pos: GridPos, n: i64) -> GridPos {
        let (dx, dy) = self.delta();
        pos.offset(dx * n, dy * n)
    }
}
