//! IR + declared signatures to accept/reject.

mod checker;
mod signature;
mod types;

pub use checker::check_function;
pub use signature::{builtin_table, collect_signature, decl_type, Function};
pub use types::{is_matching, CheckerType, StackKind};

use glyphc_mir::Instruction;
use glyphc_par::FnDecl;
use glyphc_util::{CheckError, FxHashMap, Symbol};

/// Builds the combined signature table (built-ins plus every user
/// declaration) and checks each function's body against it.
///
/// `bodies` holds each function's traversed IR, keyed by name; the caller
/// is expected to have already run the traverser (and handled any
/// `TraverserError`) before reaching this stage.
pub fn check_program(
    decls: &[FnDecl],
    bodies: &FxHashMap<Symbol, Vec<Instruction>>,
) -> Result<(), CheckError> {
    let mut table = builtin_table();
    for decl in decls {
        let sig = collect_signature(decl)?;
        table.insert(decl.name, sig);
    }

    for decl in decls {
        let ir = bodies
            .get(&decl.name)
            .expect("every declaration must have a traversed body");
        let sig = &table[&decl.name];
        check_function(decl.name.as_str(), sig, ir, &table)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphc_lex::tokenize;
    use glyphc_mir::traverse;
    use glyphc_par::parse_program;

    fn run(src: &str) -> Result<(), CheckError> {
        let toks = tokenize(src).unwrap();
        let decls = parse_program(&toks).unwrap();
        let mut bodies = FxHashMap::default();
        for decl in &decls {
            bodies.insert(decl.name, traverse(&decl.grid).unwrap());
        }
        check_program(&decls, &bodies)
    }

    #[test]
    fn empty_main_end_to_end() {
        run("fn main () -> () {}").unwrap();
    }

    #[test]
    fn literal_push_end_to_end() {
        run("fn main () -> () {\n42 -> print\n}").unwrap();
    }

    #[test]
    fn calling_a_user_function() {
        run("fn helper (x : int) -> (int) {\nprint 1\n}\nfn main () -> () {\n5 helper print\n}")
            .unwrap();
    }
}
