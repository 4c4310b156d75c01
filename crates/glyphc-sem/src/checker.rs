//! Application rule and per-function body walk.

use crate::signature::Function;
use crate::types::{is_matching, CheckerType};
use glyphc_mir::Instruction;
use glyphc_util::{CheckError, FxHashMap, FxHashSet, Symbol};

type Stack = Vec<CheckerType>;

/// Applies a call's signature against the abstract stack, substituting
/// generics in place as they're resolved.
fn apply_call(function_name: &str, callee: &str, sig: &Function, stack: &mut Stack) -> Result<(), CheckError> {
    let mut args = sig.args.clone();
    let mut rets = sig.rets.clone();

    for i in (0..args.len()).rev() {
        let expect = args[i].clone();
        let got = stack.pop().ok_or_else(|| {
            CheckError::new(
                function_name,
                format!("`{callee}` expects `{expect}` but the stack is empty"),
            )
        })?;

        if let Some(g) = got.as_generic() {
            for t in stack.iter_mut() {
                t.substitute(g, &expect);
            }
        } else if let Some(g) = expect.as_generic() {
            for earlier in args[..i].iter_mut() {
                earlier.substitute(g, &got);
            }
            for r in rets.iter_mut() {
                r.substitute(g, &got);
            }
        } else if !is_matching(&got, &expect) {
            return Err(CheckError::new(
                function_name,
                format!("`{callee}` expected `{expect}`, got `{got}`"),
            ));
        }
    }

    stack.extend(rets);
    Ok(())
}

fn labels_in(ir: &[Instruction]) -> FxHashSet<Symbol> {
    ir.iter()
        .filter_map(|i| match i {
            Instruction::Label(l) => Some(*l),
            _ => None,
        })
        .collect()
}

/// Walks one function's IR against its own declared signature and the
/// global signature table.
pub fn check_function(
    name: &str,
    sig: &Function,
    ir: &[Instruction],
    table: &FxHashMap<Symbol, Function>,
) -> Result<(), CheckError> {
    let mut stack: Stack = Vec::new();
    if sig.ellipses {
        stack.push(CheckerType::stack_unknown());
    }
    stack.extend(sig.args.iter().cloned());

    let labels = labels_in(ir);

    for instr in ir {
        match instr {
            Instruction::PushInt(_) => stack.push(CheckerType::Int),
            Instruction::PushFloat(_) => stack.push(CheckerType::Float),
            Instruction::PushChar(_) => stack.push(CheckerType::Char),
            Instruction::PushStr(_) => stack.push(CheckerType::String),
            Instruction::Call(callee) => {
                let callee_sig = table
                    .get(callee)
                    .ok_or_else(|| CheckError::new(name, format!("call to undeclared `{callee}`")))?;
                apply_call(name, callee.as_str(), callee_sig, &mut stack)?;
            }
            Instruction::JumpTrue(_) => match stack.pop() {
                Some(CheckerType::Bool) => {}
                Some(other) => {
                    return Err(CheckError::new(
                        name,
                        format!("`JumpTrue` requires `bool` on top of the stack, found `{other}`"),
                    ))
                }
                None => {
                    return Err(CheckError::new(
                        name,
                        "`JumpTrue` requires `bool` on top of an empty stack",
                    ))
                }
            },
            Instruction::Goto(label) => {
                if !labels.contains(label) {
                    return Err(CheckError::new(name, format!("`Goto` to absent label `{label}`")));
                }
            }
            Instruction::Label(_) => {}
            Instruction::Exit => break,
            Instruction::GotoPos(_) | Instruction::LabelPos { .. } => {
                unreachable!("positional pseudo-ops never reach the checker")
            }
        }
    }

    let mut expected: Vec<CheckerType> = sig.rets.clone();
    expected.reverse();
    let mut actual: Vec<CheckerType> = stack;
    actual.reverse();

    if actual.len() != expected.len() {
        return Err(CheckError::new(
            name,
            format!(
                "expected {} return value(s), found {}",
                expected.len(),
                actual.len()
            ),
        ));
    }
    for (got, want) in actual.iter().zip(expected.iter()) {
        if !is_matching(got, want) {
            return Err(CheckError::new(
                name,
                format!("return mismatch: expected `{want}`, found `{got}`"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::builtin_table;

    fn sig(args: Vec<CheckerType>, rets: Vec<CheckerType>, ellipses: bool) -> Function {
        Function { args, rets, ellipses }
    }

    #[test]
    fn empty_main_accepts() {
        let table = builtin_table();
        let s = sig(vec![], vec![], false);
        let ir = vec![Instruction::Exit];
        check_function("main", &s, &ir, &table).unwrap();
    }

    #[test]
    fn literal_push_then_builtin_print() {
        let table = builtin_table();
        let s = sig(vec![], vec![], false);
        let ir = vec![
            Instruction::PushInt(42),
            Instruction::Call(Symbol::intern("print")),
            Instruction::Exit,
        ];
        check_function("main", &s, &ir, &table).unwrap();
    }

    #[test]
    fn type_mismatch_on_plus() {
        let table = builtin_table();
        let s = sig(vec![], vec![CheckerType::Int], false);
        let ir = vec![
            Instruction::PushInt(1),
            Instruction::PushStr(Symbol::intern("a")),
            Instruction::Call(Symbol::intern("+")),
            Instruction::Exit,
        ];
        let err = check_function("main", &s, &ir, &table).unwrap_err();
        assert!(err.message.contains('+'));
    }

    #[test]
    fn generic_propagation_through_dup_swp_eq() {
        let table = builtin_table();
        let s = sig(vec![], vec![CheckerType::Bool], false);
        let ir = vec![
            Instruction::PushInt(1),
            Instruction::Call(Symbol::intern("dup")),
            Instruction::Call(Symbol::intern("swp")),
            Instruction::Call(Symbol::intern("=")),
            Instruction::Exit,
        ];
        check_function("main", &s, &ir, &table).unwrap();
    }

    #[test]
    fn goto_to_absent_label_errors() {
        let table = builtin_table();
        let s = sig(vec![], vec![], false);
        let ir = vec![Instruction::Goto(Symbol::intern("nowhere")), Instruction::Exit];
        let err = check_function("main", &s, &ir, &table).unwrap_err();
        assert!(err.message.contains("absent label"));
    }

    #[test]
    fn undeclared_call_errors() {
        let table = builtin_table();
        let s = sig(vec![], vec![], false);
        let ir = vec![Instruction::Call(Symbol::intern("nope")), Instruction::Exit];
        let err = check_function("main", &s, &ir, &table).unwrap_err();
        assert!(err.message.contains("undeclared"));
    }
}
