//! IR + signatures to target C source.

pub mod emit;
pub mod mangle;

pub use emit::{emit_function, emit_program, EmitFn};
pub use mangle::mangle;

/// The runtime's header, embedded so the driver can write it alongside
/// the generated source without a separate install step.
pub const RUNTIME_HEADER: &str = include_str!("../../../runtime/glyph_rt.h");
/// The runtime's implementation, compiled and linked by the driver.
pub const RUNTIME_SOURCE: &str = include_str!("../../../runtime/glyph_rt.c");
