//! Linear IR produced by the traverser.

use glyphc_util::{GridPos, Symbol};

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    PushInt(i32),
    PushFloat(f32),
    PushChar(u32),
    PushStr(Symbol),
    Call(Symbol),
    JumpTrue(Symbol),
    Goto(Symbol),
    Label(Symbol),
    Exit,
    /// Transient: rewritten to `Goto` during label resolution, never seen
    /// by the checker or emitter.
    GotoPos(GridPos),
    /// Transient: rewritten to zero or more `Label`s during label
    /// resolution. `length` is the full display width of the node that
    /// produced it, used to match re-entries landing on any of its cells.
    LabelPos { pos: GridPos, length: i64 },
}

impl Instruction {
    /// True for the two pseudo-ops that must not survive past traversal.
    pub fn is_positional(&self) -> bool {
        matches!(self, Instruction::GotoPos(_) | Instruction::LabelPos { .. })
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::PushInt(v) => write!(f, "PushInt {v}"),
            Instruction::PushFloat(v) => write!(f, "PushFloat {v}"),
            Instruction::PushChar(v) => write!(f, "PushChar {v}"),
            Instruction::PushStr(s) => write!(f, "PushStr {s:?}"),
            Instruction::Call(n) => write!(f, "Call {n}"),
            Instruction::JumpTrue(l) => write!(f, "JumpTrue {l}"),
            Instruction::Goto(l) => write!(f, "Goto {l}"),
            Instruction::Label(l) => write!(f, "Label {l}"),
            Instruction::Exit => write!(f, "Exit"),
            Instruction::GotoPos(p) => write!(f, "Goto {p}"),
            Instruction::LabelPos { pos, length } => write!(f, "Label ({}, {}, {length})", pos.x, pos.y),
        }
    }
}

pub fn pos_label(pos: GridPos) -> Symbol {
    Symbol::intern(&format!("P_{}_{}", pos.x, pos.y))
}

pub fn branch_label(pos: GridPos) -> Symbol {
    Symbol::intern(&format!("B_{}_{}", pos.x, pos.y))
}
