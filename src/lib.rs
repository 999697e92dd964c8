//! qfront - pluggable kernel compiler front-ends.
//!
//! qfront translates kernel source written in one of several languages into a
//! single backend-agnostic IR. Every language plugs in through the same
//! two-hook pipeline, and callers reach it by name through a registry.
//!
//! # Primary Usage
//!
//! ```
//! use qfront::core::{Compiler, FrontendRegistry, Ir, TargetInfo};
//!
//! let registry = FrontendRegistry::with_builtins();
//! let target = TargetInfo::new("simulator").with_qubits(2);
//!
//! let mut compiler = registry.resolve("gates")?;
//! let ir = compiler.compile("H 0\nCNOT 0 1", &target)?;
//! assert_eq!(ir.to_text(), "H 0\nCNOT 0 1");
//! # Ok::<(), qfront::core::CompileError>(())
//! ```
//!
//! # Architecture
//!
//! - [`core`] - Compile contract, pipeline, registry, error taxonomy
//! - [`frontends`] - Built-in front-ends, including the gate-list reference language

pub mod core;
pub mod frontends;

pub use crate::core::{
    // Contract and pipeline
    Compiler, Frontend, Pipeline, CompilationUnit,
    // Boundary types
    Accelerator, TargetInfo, Ir, TextIr,
    // Lookup and errors
    FrontendRegistry, CompileError, CompileResult,
};
