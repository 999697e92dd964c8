//! Built-in front-ends.
//!
//! - [`Uppercase`] ("toy"): translate-only, uppercases the body.
//! - [`Bracketed`] ("toy2"): wraps the body in `BEGIN`/`END` during normalization.
//! - [`Interim`] ("broken"): a placeholder with no translation yet.
//! - [`gates::GateListFrontend`] ("gates"): line-oriented gate kernels.

pub mod gates;

use crate::core::{
    CompilationUnit, CompileError, CompileResult, Compiler, Frontend, FrontendRegistry, Pipeline,
    TextIr,
};

pub use gates::{Gate, GateListFrontend, GateProgram, Instruction};

/// Translates a body into its uppercase form.
#[derive(Debug, Default)]
pub struct Uppercase;

impl Frontend for Uppercase {
    type Output = TextIr;

    fn name(&self) -> &str {
        "toy"
    }

    fn translate(&mut self, unit: &CompilationUnit<'_>) -> CompileResult<TextIr> {
        Ok(TextIr::new(unit.source().to_uppercase()))
    }
}

/// Completes a bare body into `BEGIN <body> END` and emits it verbatim.
#[derive(Debug, Default)]
pub struct Bracketed;

impl Frontend for Bracketed {
    type Output = TextIr;

    fn name(&self) -> &str {
        "toy2"
    }

    fn normalize(&mut self, unit: &mut CompilationUnit<'_>) {
        let wrapped = format!("BEGIN {} END", unit.source());
        unit.set_source(wrapped);
    }

    fn translate(&mut self, unit: &CompilationUnit<'_>) -> CompileResult<TextIr> {
        Ok(TextIr::new(unit.source()))
    }
}

/// Front-end that is registered but cannot translate yet.
///
/// Every compile call fails with a defect, so an unfinished front-end is
/// visible at integration time instead of producing an empty artifact.
#[derive(Debug, Clone)]
pub struct Interim {
    name: String,
}

impl Interim {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Frontend for Interim {
    type Output = TextIr;

    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&mut self, _unit: &CompilationUnit<'_>) -> CompileResult<TextIr> {
        Err(CompileError::missing_translate(self.name.as_str()))
    }
}

impl FrontendRegistry {
    /// Registry holding every built-in front-end.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_default::<Uppercase>("toy");
        registry.register_default::<Bracketed>("toy2");
        registry.register("broken", || {
            Box::new(Pipeline::new(Interim::new("broken"))) as Box<dyn Compiler>
        });
        registry.register_default::<GateListFrontend>(gates::NAME);
        registry
    }
}
