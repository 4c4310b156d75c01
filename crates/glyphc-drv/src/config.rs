//! CLI flags. `-ir`/`-gen`/`-cmd` are single-dash multi-letter flags, which
//! clap's derive always renders as `--ir`/`--gen`/`--cmd`; [`normalize_args`]
//! rewrites the single-dash spellings to double-dash ones before clap ever
//! sees them, so both the declared flags and the documented invocation
//! actually work.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "glyphc", about = "Compiler for the Glyph grid language")]
pub struct Config {
    /// Source file to compile.
    pub source: PathBuf,

    /// Dump the traversed IR for every function to stderr.
    #[arg(long = "ir")]
    pub dump_ir: bool,

    /// Dump the generated C source to stderr.
    #[arg(long = "gen")]
    pub dump_gen: bool,

    /// Dump the driver's C-compiler invocation to stderr.
    #[arg(long = "cmd")]
    pub dump_cmd: bool,

    /// Path for the compiled executable (defaults next to the source).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}

/// Rewrites the single-dash spellings `-ir`/`-gen`/`-cmd` to the
/// double-dash spellings clap actually parses, leaving every other argument
/// (including true single-char short flags like `-o`) untouched.
pub fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    const SINGLE_DASH: [&str; 3] = ["-ir", "-gen", "-cmd"];
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if SINGLE_DASH.contains(&s) => OsString::from(format!("-{s}")),
            _ => arg,
        })
        .collect()
}

impl Config {
    /// Parses `std::env::args_os()`, accepting the single-dash dump flags.
    pub fn parse_env() -> Self {
        Config::parse_from(normalize_args(std::env::args_os()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dash_dump_flags_are_rewritten() {
        let args = normalize_args(["glyphc", "prog.gl", "-ir", "-gen"].map(OsString::from));
        assert_eq!(
            args,
            vec!["glyphc", "prog.gl", "--ir", "--gen"].into_iter().map(OsString::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn short_output_flag_is_untouched() {
        let args = normalize_args(["glyphc", "prog.gl", "-o", "out"].map(OsString::from));
        assert_eq!(
            args,
            vec!["glyphc", "prog.gl", "-o", "out"].into_iter().map(OsString::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn parses_single_dash_flags_end_to_end() {
        let config = Config::parse_from(normalize_args(
            ["glyphc", "prog.gl", "-ir", "-cmd"].map(OsString::from),
        ));
        assert!(config.dump_ir);
        assert!(config.dump_cmd);
        assert!(!config.dump_gen);
    }
}
