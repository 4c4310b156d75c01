//! IR + signatures to target C source.

use crate::mangle::mangle;
use glyphc_mir::Instruction;
use std::fmt::Write as _;

/// Everything the emitter needs about one function: its mangled identity,
/// calling arity, and the already label-resolved IR for its body.
pub struct EmitFn<'a> {
    pub name: &'a str,
    pub arg_count: usize,
    pub ellipses: bool,
    pub ret_count: usize,
    pub has_rest: bool,
    pub body: &'a [Instruction],
}

fn label_ident(name: &str) -> String {
    mangle(name)
}

/// Emits one instruction as a single C statement, dispatching each opcode
/// to its runtime call.
fn emit_instr(out: &mut String, instr: &Instruction) {
    match instr {
        Instruction::PushInt(v) => {
            writeln!(out, "    ch_stk_push(&__istack, ch_valof_int({v}));").unwrap();
        }
        Instruction::PushFloat(v) => {
            writeln!(out, "    ch_stk_push(&__istack, ch_valof_float({v:?}f));").unwrap();
        }
        Instruction::PushChar(v) => {
            writeln!(out, "    ch_stk_push(&__istack, ch_valof_char({v}));").unwrap();
        }
        Instruction::PushStr(s) => {
            writeln!(
                out,
                "    ch_stk_push(&__istack, ch_valof_string({:?}));",
                s.as_str()
            )
            .unwrap();
        }
        Instruction::Call(name) => {
            writeln!(
                out,
                "    ch_stk_append(&__istack, {}(&__istack));",
                mangle(name.as_str())
            )
            .unwrap();
        }
        Instruction::JumpTrue(label) => {
            writeln!(
                out,
                "    if (ch_valas_bool(ch_stk_pop(&__istack))) goto {};",
                label_ident(label.as_str())
            )
            .unwrap();
        }
        Instruction::Goto(label) => {
            writeln!(out, "    goto {};", label_ident(label.as_str())).unwrap();
        }
        Instruction::Label(label) => {
            writeln!(out, "{}:", label_ident(label.as_str())).unwrap();
        }
        Instruction::Exit => {
            // Handled by the caller, which appends the return-taking epilogue
            // after the last instruction; an `Exit` mid-body still needs a
            // `goto` to that shared epilogue so earlier control flow can
            // reach it.
            writeln!(out, "    goto __exit;").unwrap();
        }
        Instruction::GotoPos(_) | Instruction::LabelPos { .. } => {
            unreachable!("positional pseudo-ops never reach the emitter")
        }
    }
}

/// `ch_stack_node *mangled_name(ch_stack_node **__ifull) { ... }`
pub fn emit_function(f: &EmitFn) -> String {
    let mangled = mangle(f.name);
    let mut out = String::new();

    writeln!(out, "ch_stack_node *{mangled}(ch_stack_node **__ifull) {{").unwrap();
    writeln!(
        out,
        "    ch_stack_node *__istack = ch_stk_args(__ifull, {}, {});",
        f.arg_count,
        if f.ellipses { "true" } else { "false" }
    )
    .unwrap();

    for instr in f.body {
        emit_instr(&mut out, instr);
    }

    writeln!(out, "__exit:").unwrap();
    writeln!(
        out,
        "    {{ ch_stack_node *__iret = ch_stk_take(&__istack, {});",
        f.ret_count
    )
    .unwrap();
    if f.has_rest {
        writeln!(out, "      ch_stk_append(&__iret, __istack);").unwrap();
        writeln!(out, "      __istack = NULL;").unwrap();
    } else {
        writeln!(out, "      ch_stk_delete(__istack);").unwrap();
    }
    writeln!(out, "      return __iret; }}").unwrap();
    writeln!(out, "}}").unwrap();
    out
}

/// Emits every function plus a `main()` that hands the process an empty
/// stack and calls the mangled entry point.
pub fn emit_program(functions: &[EmitFn]) -> String {
    let mut out = String::new();
    out.push_str("#include \"glyph_rt.h\"\n\n");
    for f in functions {
        out.push_str(&emit_function(f));
        out.push('\n');
    }
    out.push_str("int main(void) {\n");
    out.push_str("    ch_stack_node *__iargs = NULL;\n");
    out.push_str("    ch_stack_node *__iresult = __smain(&__iargs);\n");
    out.push_str("    ch_stk_delete(__iresult);\n");
    out.push_str("    return 0;\n");
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphc_util::Symbol;

    #[test]
    fn empty_main_emits_exit_epilogue() {
        let body = vec![Instruction::Exit];
        let f = EmitFn {
            name: "main",
            arg_count: 0,
            ellipses: false,
            ret_count: 0,
            has_rest: false,
            body: &body,
        };
        let text = emit_function(&f);
        assert!(text.contains("__smain"));
        assert!(text.contains("ch_stk_args(__ifull, 0, false)"));
        assert!(text.contains("ch_stk_take(&__istack, 0)"));
    }

    #[test]
    fn call_invokes_mangled_name() {
        let body = vec![Instruction::Call(Symbol::intern("print")), Instruction::Exit];
        let f = EmitFn {
            name: "helper",
            arg_count: 1,
            ellipses: false,
            ret_count: 0,
            has_rest: false,
            body: &body,
        };
        let text = emit_function(&f);
        assert!(text.contains("print(&__istack)"));
    }

    #[test]
    fn program_wraps_entry_point_in_main() {
        let body = vec![Instruction::Exit];
        let f = EmitFn {
            name: "main",
            arg_count: 0,
            ellipses: false,
            ret_count: 0,
            has_rest: false,
            body: &body,
        };
        let text = emit_program(&[f]);
        assert!(text.contains("int main(void)"));
        assert!(text.contains("__smain(&__iargs)"));
    }
}
