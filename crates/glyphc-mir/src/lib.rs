//! Grid to linear IR.

mod direction;
mod grid_index;
pub mod ir;
mod resolve;
mod walk;

pub use ir::Instruction;

use direction::Direction;
use glyphc_par::Grid;
use glyphc_util::{GridPos, TraverserError};
use grid_index::GridIndex;
use walk::Walker;

/// Walks one function's body grid depth-first from `(0,0)` heading right,
/// then rewrites the resulting positional pseudo-ops into named labels.
pub fn traverse(grid: &Grid) -> Result<Vec<Instruction>, TraverserError> {
    let mut walker = Walker::new(GridIndex::build(grid));
    walker.run(Direction::Right, GridPos::new(0, 0))?;
    Ok(resolve::resolve_labels(walker.into_instructions()))
}
