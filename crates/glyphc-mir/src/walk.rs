//! The depth-first grid walk.

use crate::direction::Direction;
use crate::grid_index::GridIndex;
use crate::ir::{branch_label, Instruction};
use glyphc_par::GridNodeKind;
use glyphc_util::{FxHashSet, GridPos, TraverserError};

pub struct Walker {
    index: GridIndex,
    visited: FxHashSet<GridPos>,
    out: Vec<Instruction>,
}

impl Walker {
    pub fn new(index: GridIndex) -> Self {
        Self {
            index,
            visited: FxHashSet::default(),
            out: Vec::new(),
        }
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.out
    }

    pub fn run(&mut self, dir: Direction, pos: GridPos) -> Result<(), TraverserError> {
        let Some((start_x, node)) = self.index.node_at(pos) else {
            if dir.is_vertical() && self.index.row_in_bounds(pos.y) {
                return self.run(dir, dir.step(pos));
            }
            self.out.push(Instruction::Exit);
            return Ok(());
        };
        let node_start = GridPos::new(start_x, pos.y);

        if self.visited.contains(&node_start) {
            self.out.push(Instruction::GotoPos(node_start));
            return Ok(());
        }

        self.out.push(Instruction::LabelPos {
            pos: node_start,
            length: node.len as i64,
        });
        for i in 0..node.len as i64 {
            self.visited.insert(node_start.offset(i, 0));
        }

        let next_pos = if dir.is_vertical() {
            dir.step(pos)
        } else {
            dir.step_by(pos, node.len as i64)
        };

        match node.kind {
            GridNodeKind::IntLit(v) => {
                self.out.push(Instruction::PushInt(v));
                self.run(dir, next_pos)
            }
            GridNodeKind::FloatLit(_) => {
                self.out.push(Instruction::PushFloat(node.kind.as_float().unwrap()));
                self.run(dir, next_pos)
            }
            GridNodeKind::CharLit(v) => {
                self.out.push(Instruction::PushChar(v));
                self.run(dir, next_pos)
            }
            GridNodeKind::StrLit(s) => {
                self.out.push(Instruction::PushStr(s));
                self.run(dir, next_pos)
            }
            GridNodeKind::Call(name) => {
                self.out.push(Instruction::Call(name));
                self.run(dir, next_pos)
            }
            GridNodeKind::Space => self.run(dir, next_pos),
            GridNodeKind::DirLeft => self.follow_arrow(Direction::Left, dir, pos),
            GridNodeKind::DirRight => self.follow_arrow(Direction::Right, dir, pos),
            GridNodeKind::DirUp => self.follow_arrow(Direction::Up, dir, pos),
            GridNodeKind::DirDown => self.follow_arrow(Direction::Down, dir, pos),
            GridNodeKind::Branch => self.branch(dir, pos),
        }
    }

    /// `DirLeft`/`DirRight`/`DirUp`/`DirDown`: reset direction and advance
    /// from `p`, scaling by the incoming node's length only when the
    /// incoming direction was horizontal (arrow nodes are always length 1,
    /// so this only matters when re-entering through a wider node's cell).
    fn follow_arrow(&mut self, new_dir: Direction, incoming_dir: Direction, p: GridPos) -> Result<(), TraverserError> {
        let next_pos = if incoming_dir.is_vertical() {
            new_dir.step(p)
        } else {
            new_dir.step_by(p, 1)
        };
        self.run(new_dir, next_pos)
    }

    fn branch(&mut self, dir: Direction, pos: GridPos) -> Result<(), TraverserError> {
        let candidates: [(Direction, GridPos, GridNodeKind); 2] = if dir.is_vertical() {
            [
                (Direction::Left, pos.offset(-1, 0), GridNodeKind::DirLeft),
                (Direction::Right, pos.offset(1, 0), GridNodeKind::DirRight),
            ]
        } else {
            [
                (Direction::Up, pos.offset(0, -1), GridNodeKind::DirUp),
                (Direction::Down, pos.offset(0, 1), GridNodeKind::DirDown),
            ]
        };

        let mut matches: Vec<(Direction, GridPos)> = Vec::new();
        for (perp_dir, perp_pos, expect_kind) in candidates {
            if let Some((_, node)) = self.index.node_at(perp_pos) {
                if node.kind == expect_kind {
                    matches.push((perp_dir, perp_pos));
                }
            }
        }

        if matches.len() != 1 {
            return Err(TraverserError::new(
                pos,
                format!(
                    "branch requires exactly one perpendicular direction arrow, found {}",
                    matches.len()
                ),
            ));
        }
        let (perp_dir, perp_pos) = matches[0];

        let label = branch_label(pos);
        self.out.push(Instruction::JumpTrue(label));

        let straight = if dir.is_vertical() {
            dir.step(pos)
        } else {
            dir.step_by(pos, 1)
        };
        self.run(dir, straight)?;

        self.out.push(Instruction::Label(label));
        self.run(perp_dir, perp_pos)
    }
}
