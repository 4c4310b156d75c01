//! Entry point: wires the lexer, parser, traverser, checker, emitter, and
//! driver into one pipeline.

mod config;
mod diagnostics;
mod driver;

use config::Config;
use glyphc_gen::{emit_program, EmitFn};
use glyphc_util::{FxHashMap, Symbol};
use log::info;
use std::fmt::Display;
use std::process::ExitCode;

fn fail(stage: &str, err: impl Display) -> ExitCode {
    eprintln!("glyphc: {stage} error: {err}");
    ExitCode::FAILURE
}

/// Like `fail`, but renders a source-span error (lex/parse) with a caret
/// under the offending span instead of the bare `Display` text.
fn fail_spanned(stage: &str, source: &str, span: glyphc_util::Span, message: &str) -> ExitCode {
    eprintln!("glyphc: {stage} error: {}", diagnostics::render(source, span, message));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .ok();

    let config = Config::parse_env();
    run(&config).unwrap_or_else(|code| code)
}

/// Returns `Err(ExitCode::FAILURE)` on any hard error so `main` can report
/// it uniformly; `Ok(())` only on a fully successful build.
fn run(config: &Config) -> Result<ExitCode, ExitCode> {
    let source = std::fs::read_to_string(&config.source)
        .map_err(|e| fail("io", format!("reading {}: {e}", config.source.display())))?;

    let tokens = glyphc_lex::tokenize(&source)
        .map_err(|e| fail_spanned("lex", &source, e.span, &e.message))?;
    info!("lexed {} tokens", tokens.len());

    let decls = glyphc_par::parse_program(&tokens)
        .map_err(|e| fail_spanned("parse", &source, e.span, &e.message))?;
    info!("parsed {} function declaration(s)", decls.len());

    let mut bodies: FxHashMap<Symbol, Vec<glyphc_mir::Instruction>> = FxHashMap::default();
    for decl in &decls {
        let ir = glyphc_mir::traverse(&decl.grid).map_err(|e| fail("traverser", e))?;
        bodies.insert(decl.name, ir);
    }

    if config.dump_ir {
        for decl in &decls {
            eprintln!("-- {} --", decl.name);
            for instr in &bodies[&decl.name] {
                eprintln!("{instr}");
            }
        }
    }

    glyphc_sem::check_program(&decls, &bodies).map_err(|e| fail("check", e))?;
    info!("type check passed for {} function(s)", decls.len());

    let emit_fns: Vec<EmitFn> = decls
        .iter()
        .map(|decl| EmitFn {
            name: decl.name.as_str(),
            arg_count: decl.args.args().len(),
            ellipses: decl.args.is_ellipses(),
            ret_count: decl.rets.rets.len(),
            has_rest: decl.rets.rest.is_some(),
            body: &bodies[&decl.name],
        })
        .collect();
    let generated = emit_program(&emit_fns);

    if config.dump_gen {
        eprintln!("{generated}");
    }

    let output = config
        .output
        .clone()
        .unwrap_or_else(|| config.source.with_extension(""));
    let work_dir = output.with_extension("glyphc_build");

    let plan = driver::stage(&work_dir, &output, &generated).map_err(|e| fail("driver", e))?;
    let mut cmd = driver::compiler_command(&plan);

    if config.dump_cmd {
        eprintln!("{}", driver::command_line(&cmd));
    }

    let ok = driver::run(&mut cmd).map_err(|e| fail("driver", e))?;
    if !ok {
        return Err(fail("driver", "C compiler reported failure"));
    }

    Ok(ExitCode::SUCCESS)
}
