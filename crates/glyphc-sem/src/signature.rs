//! Function signatures, surface-to-checker type mapping, and built-ins.

use crate::types::{CheckerType, StackKind};
use glyphc_par::{ArgList, FnDecl, TypeSig};
use glyphc_util::{CheckError, FxHashMap, Symbol};

#[derive(Debug, Clone)]
pub struct Function {
    pub args: Vec<CheckerType>,
    pub rets: Vec<CheckerType>,
    pub ellipses: bool,
}

/// Maps a surface `TypeSig` to a checker type. A name starting with `#`
/// is a generic tag; a stack-wrapped name becomes a homogeneous `Many`.
pub fn decl_type(sig: &TypeSig) -> Result<CheckerType, CheckError> {
    let name = sig.name.as_str();
    let base = if let Some(tag) = name.strip_prefix('#') {
        CheckerType::Generic(Symbol::intern(tag))
    } else {
        match name {
            "int" => CheckerType::Int,
            "float" => CheckerType::Float,
            "bool" => CheckerType::Bool,
            "char" => CheckerType::Char,
            "string" => CheckerType::String,
            other => {
                return Err(CheckError::new(
                    "<signature>",
                    format!("unknown surface type `{other}`"),
                ))
            }
        }
    };
    Ok(if sig.is_stack {
        CheckerType::stack_many(base)
    } else {
        base
    })
}

pub fn collect_signature(decl: &FnDecl) -> Result<Function, CheckError> {
    let mut args = Vec::new();
    for a in decl.args.args() {
        args.push(decl_type(&a.ty).map_err(|e| CheckError::new(decl.name.as_str(), e.message))?);
    }
    let mut rets = Vec::new();
    for r in &decl.rets.rets {
        rets.push(decl_type(r).map_err(|e| CheckError::new(decl.name.as_str(), e.message))?);
    }
    if let Some(rest) = &decl.rets.rest {
        rets.push(decl_type(rest).map_err(|e| CheckError::new(decl.name.as_str(), e.message))?);
    }
    Ok(Function {
        args,
        rets,
        ellipses: matches!(decl.args, ArgList::Ellipses(_)),
    })
}

/// The fixed table of built-in signatures (GLOSSARY), pre-populated before
/// any user declarations are added.
pub fn builtin_table() -> FxHashMap<Symbol, Function> {
    let mut table = FxHashMap::default();
    let a = || CheckerType::Generic(Symbol::intern("a"));
    let b = || CheckerType::Generic(Symbol::intern("b"));
    let numeric = || CheckerType::Union(vec![CheckerType::Int, CheckerType::Float]);

    table.insert(
        Symbol::intern("dup"),
        Function {
            args: vec![a()],
            rets: vec![a(), a()],
            ellipses: false,
        },
    );
    table.insert(
        Symbol::intern("swp"),
        Function {
            args: vec![a(), b()],
            rets: vec![b(), a()],
            ellipses: false,
        },
    );
    table.insert(
        Symbol::intern("="),
        Function {
            args: vec![a(), b()],
            rets: vec![CheckerType::Bool],
            ellipses: false,
        },
    );
    for name in ["+", "-"] {
        table.insert(
            Symbol::intern(name),
            Function {
                args: vec![numeric(), numeric()],
                rets: vec![numeric()],
                ellipses: false,
            },
        );
    }
    table.insert(
        Symbol::intern("print"),
        Function {
            args: vec![a()],
            rets: vec![],
            ellipses: false,
        },
    );
    table.insert(
        Symbol::intern("dbg"),
        Function {
            args: vec![],
            rets: vec![],
            ellipses: false,
        },
    );
    let box_sig = Function {
        args: vec![],
        rets: vec![CheckerType::Stack(Box::new(StackKind::Unknown))],
        ellipses: true,
    };
    table.insert(Symbol::intern("box"), box_sig.clone());

    // Symbolic aliases (GLOSSARY): dup/swp/box also answer to a glyph name.
    table.insert(Symbol::intern("⇈"), table[&Symbol::intern("dup")].clone());
    table.insert(Symbol::intern("↕"), table[&Symbol::intern("swp")].clone());
    table.insert(Symbol::intern("□"), box_sig);

    table
}
