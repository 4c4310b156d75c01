//! Spawns an external C compiler on the emitted source.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct BuildPlan {
    pub work_dir: PathBuf,
    pub main_c: PathBuf,
    pub runtime_c: PathBuf,
    pub runtime_h: PathBuf,
    pub output: PathBuf,
}

/// Writes the generated source and runtime alongside each other in a
/// scratch directory next to the requested output path.
pub fn stage(work_dir: &Path, output: &Path, generated: &str) -> Result<BuildPlan> {
    std::fs::create_dir_all(work_dir)
        .with_context(|| format!("creating build directory {}", work_dir.display()))?;

    let main_c = work_dir.join("main.c");
    let runtime_c = work_dir.join("glyph_rt.c");
    let runtime_h = work_dir.join("glyph_rt.h");

    std::fs::write(&main_c, generated).context("writing generated C source")?;
    std::fs::write(&runtime_c, glyphc_gen::RUNTIME_SOURCE).context("writing runtime source")?;
    std::fs::write(&runtime_h, glyphc_gen::RUNTIME_HEADER).context("writing runtime header")?;

    Ok(BuildPlan {
        work_dir: work_dir.to_path_buf(),
        main_c,
        runtime_c,
        runtime_h,
        output: output.to_path_buf(),
    })
}

pub fn compiler_command(plan: &BuildPlan) -> Command {
    let mut cmd = Command::new("cc");
    cmd.arg(&plan.main_c)
        .arg(&plan.runtime_c)
        .arg("-I")
        .arg(&plan.work_dir)
        .arg("-o")
        .arg(&plan.output);
    cmd
}

pub fn command_line(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Runs the C compiler; `Ok(false)` means it ran and reported failure.
/// There is no recovery path upstream of this — a failed build just stops.
pub fn run(cmd: &mut Command) -> Result<bool> {
    let status = cmd.status().context("spawning the C compiler")?;
    Ok(status.success())
}
