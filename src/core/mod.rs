// This module is the hub of the front-end framework. It groups the pieces every
// front-end and every caller shares: the error taxonomy (CompileError), the opaque
// target descriptor (Accelerator), the IR artifact trait (Ir), the caller-facing
// Compiler contract with the generic two-hook Pipeline, and the name-keyed
// FrontendRegistry. Nothing here knows about any concrete source language.

//! Core front-end infrastructure.
//!
//! # Key Components
//!
//! ## Compile contract (`compiler`)
//! - `Compiler`: object-safe entry point, `compile(source, target)`
//! - `Frontend`: the `normalize` / `translate` hooks a language implements
//! - `Pipeline`: binds inputs, runs both hooks, returns the artifact
//!
//! ## Lookup (`registry`)
//! - Fresh compiler per resolve, `NotFound` for unknown names
//!
//! ## Boundary types (`accelerator`, `ir`)
//! - Borrowed target descriptors and shared IR artifacts

pub mod accelerator;
pub mod compiler;
pub mod error;
pub mod ir;
pub mod registry;
pub mod test_utils;

pub use accelerator::{Accelerator, TargetInfo};
pub use compiler::{CompilationUnit, Compiler, Frontend, Pipeline};
pub use error::{CompileError, CompileResult};
pub use ir::{Ir, TextIr};
pub use registry::{CompilerFactory, FrontendRegistry};
