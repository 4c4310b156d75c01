//! Label resolution, the traverser's second pass.

use crate::ir::{pos_label, Instruction};
use glyphc_util::{FxHashSet, GridPos};

/// Rewrites `GotoPos`/`LabelPos` into ordinary string-labeled `Goto`/`Label`.
/// Running this twice on its own output is a no-op, since the positional
/// pseudo-ops it consumes no longer exist afterward.
pub fn resolve_labels(ir: Vec<Instruction>) -> Vec<Instruction> {
    let goto_targets: FxHashSet<GridPos> = ir
        .iter()
        .filter_map(|i| match i {
            Instruction::GotoPos(p) => Some(*p),
            _ => None,
        })
        .collect();

    let mut out = Vec::with_capacity(ir.len());
    for instr in ir {
        match instr {
            Instruction::GotoPos(p) => out.push(Instruction::Goto(pos_label(p))),
            Instruction::LabelPos { pos, length } => {
                let mut targets: Vec<GridPos> = goto_targets
                    .iter()
                    .filter(|g| g.y == pos.y && g.x >= pos.x && g.x < pos.x + length)
                    .copied()
                    .collect();
                targets.sort_by_key(|g| g.x);
                for t in targets {
                    out.push(Instruction::Label(pos_label(t)));
                }
            }
            other => out.push(other),
        }
    }
    out
}
