//! Parsed program shape.

use glyphc_util::Symbol;

/// A surface type name, possibly wrapped in `[ ]` to mark a stack type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSig {
    pub name: Symbol,
    pub is_stack: bool,
}

impl TypeSig {
    pub fn new(name: Symbol, is_stack: bool) -> Self {
        Self { name, is_stack }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Symbol,
    pub ty: TypeSig,
}

/// `arg-list := [ "..." ] { name ":" typesig }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgList {
    Limited(Vec<Argument>),
    Ellipses(Vec<Argument>),
}

impl ArgList {
    pub fn args(&self) -> &[Argument] {
        match self {
            ArgList::Limited(args) | ArgList::Ellipses(args) => args,
        }
    }

    pub fn is_ellipses(&self) -> bool {
        matches!(self, ArgList::Ellipses(_))
    }
}

/// `ret-list := { typesig } [ "..." typesig ]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReturnSig {
    pub rets: Vec<TypeSig>,
    pub rest: Option<TypeSig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridNodeKind {
    IntLit(i32),
    /// Bit pattern of an `f32`; stored this way so `GridNodeKind` stays `Copy`.
    FloatLit(u32),
    CharLit(u32),
    /// Interned rather than a `String` for the same reason.
    StrLit(Symbol),
    Call(Symbol),
    Branch,
    DirLeft,
    DirRight,
    DirUp,
    DirDown,
    Space,
}

impl GridNodeKind {
    pub fn float_lit(value: f32) -> Self {
        GridNodeKind::FloatLit(value.to_bits())
    }

    pub fn as_float(self) -> Option<f32> {
        match self {
            GridNodeKind::FloatLit(bits) => Some(f32::from_bits(bits)),
            _ => None,
        }
    }
}

/// A single cell-occupying element of a function's body grid.
///
/// `len` is the node's display length in grid columns: the
/// glyph count for `Call`, the token length for literals, 1 for direction
/// and branch nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridNode {
    pub kind: GridNodeKind,
    pub len: usize,
}

impl GridNode {
    pub fn new(kind: GridNodeKind, len: usize) -> Self {
        Self { kind, len }
    }
}

pub type Grid = Vec<Vec<GridNode>>;

#[derive(Debug, Clone)]
pub struct FnDecl {
    pub name: Symbol,
    pub args: ArgList,
    pub rets: ReturnSig,
    pub grid: Grid,
}

pub type Program = Vec<FnDecl>;
