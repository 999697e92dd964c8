// This module defines the compile contract and the pipeline every front-end plugs into.
// Compiler is the object-safe, caller-facing interface: a caller that only knows a
// front-end by name gets a Box<dyn Compiler> from the registry and calls compile(source,
// target). Pipeline<F> is the generic skeleton implementing that contract for any type F
// implementing the Frontend hooks. Hook dispatch inside the pipeline is static (monomorphised
// over F), the caller-facing dispatch is dynamic. Each compile call binds the caller's
// source (as an owned staging copy) and the borrowed target into a CompilationUnit, runs
// the normalize hook over the staging copy, then runs translate and returns its result.
// Translate has no default: a front-end without translation logic does not build.

//! Compiler reference overview.
//!
//! `Pipeline` orchestrates the transformation from a kernel source string into an
//! IR artifact. The flow for every call is fixed:
//!
//! ```text
//! unit = bind(copy(source), target)
//! frontend.normalize(&mut unit)     // optional, default is a no-op
//! frontend.translate(&unit)         // mandatory, produces the IR
//! ```
//!
//! The unit is dropped when the call returns, so no source text or target
//! reference survives between calls. `compile` takes `&mut self`: one pipeline
//! runs one compilation at a time, and concurrent work uses one pipeline per
//! compilation.

use super::accelerator::Accelerator;
use super::error::CompileResult;
use super::ir::Ir;
use std::sync::Arc;

/// Uniform entry point for callers that do not know a front-end's concrete type.
pub trait Compiler: Send {
    /// Name of the front-end behind this compiler.
    fn name(&self) -> &str;

    /// Translate `source` into an IR artifact aimed at `target`.
    fn compile(&mut self, source: &str, target: &dyn Accelerator) -> CompileResult<Arc<dyn Ir>>;
}

/// Inputs of one compile call, bound before any hook runs.
#[derive(Debug)]
pub struct CompilationUnit<'t> {
    source: String,
    target: &'t dyn Accelerator,
}

impl<'t> CompilationUnit<'t> {
    fn bind(source: &str, target: &'t dyn Accelerator) -> Self {
        Self {
            source: source.to_owned(),
            target,
        }
    }

    /// The staged source, after normalization once `translate` runs.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Mutable access to the staging copy. The caller's string is never touched.
    pub fn source_mut(&mut self) -> &mut String {
        &mut self.source
    }

    /// Replace the staged source wholesale.
    pub fn set_source(&mut self, source: String) {
        self.source = source;
    }

    pub fn target(&self) -> &'t dyn Accelerator {
        self.target
    }
}

/// Hooks implemented by source-language front-ends.
///
/// A front-end overrides [`normalize`](Frontend::normalize) only when its grammar
/// needs the caller-supplied body completed or cleaned up before parsing. It must
/// always provide [`translate`](Frontend::translate). A front-end under development
/// that cannot translate yet returns
/// [`CompileError::missing_translate`](super::error::CompileError::missing_translate)
/// so callers see a defect instead of an artifact.
pub trait Frontend: Send {
    type Output: Ir + 'static;

    fn name(&self) -> &str;

    /// Rewrite the staged source into a unit `translate` can parse.
    ///
    /// Whatever this leaves behind is handed to `translate` without re-validation.
    fn normalize(&mut self, _unit: &mut CompilationUnit<'_>) {}

    /// Parse and lower the staged source.
    fn translate(&mut self, unit: &CompilationUnit<'_>) -> CompileResult<Self::Output>;
}

/// Two-phase compilation skeleton shared by all front-ends.
#[derive(Debug, Default)]
pub struct Pipeline<F: Frontend> {
    frontend: F,
}

impl<F: Frontend> Pipeline<F> {
    pub fn new(frontend: F) -> Self {
        Self { frontend }
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }

    pub fn into_inner(self) -> F {
        self.frontend
    }

    /// Compile with the front-end's concrete output type.
    pub fn run(&mut self, source: &str, target: &dyn Accelerator) -> CompileResult<F::Output> {
        let mut unit = CompilationUnit::bind(source, target);
        log::debug!(
            "{}: compiling {} bytes for target `{}`",
            self.frontend.name(),
            source.len(),
            target.name()
        );

        self.frontend.normalize(&mut unit);
        if unit.source() != source {
            log::trace!("{}: normalized source:\n{}", self.frontend.name(), unit.source());
        }

        let result = self.frontend.translate(&unit);
        match &result {
            Ok(_) => log::trace!("{}: translation complete", self.frontend.name()),
            Err(err) if err.is_defect() => log::error!("{}", err),
            Err(err) => log::debug!("{}", err),
        }
        result
    }
}

impl<F: Frontend> From<F> for Pipeline<F> {
    fn from(frontend: F) -> Self {
        Self::new(frontend)
    }
}

impl<F: Frontend> Compiler for Pipeline<F> {
    fn name(&self) -> &str {
        self.frontend.name()
    }

    fn compile(&mut self, source: &str, target: &dyn Accelerator) -> CompileResult<Arc<dyn Ir>> {
        let output = self.run(source, target)?;
        Ok(Arc::new(output))
    }
}
