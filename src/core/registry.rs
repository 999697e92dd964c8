// This module implements FrontendRegistry, the boundary between a front-end's name and
// a concrete Compiler instance. The registry stores one factory closure per name and
// builds a fresh Box<dyn Compiler> on every resolve, so each in-flight compilation owns
// its own pipeline and no staged state is ever shared. An unknown name fails with
// CompileError::NotFound and constructs nothing. The registry itself is Send + Sync and
// can be shared across threads behind an Arc.

//! Name-keyed lookup of front-ends.

use super::compiler::{Compiler, Frontend, Pipeline};
use super::error::{CompileError, CompileResult};
use std::collections::HashMap;
use std::fmt;

/// Builds a ready-to-use compiler instance.
pub type CompilerFactory = Box<dyn Fn() -> Box<dyn Compiler> + Send + Sync>;

/// Maps front-end names to compiler factories.
#[derive(Default)]
pub struct FrontendRegistry {
    factories: HashMap<String, CompilerFactory>,
}

impl FrontendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`, replacing any earlier registration.
    pub fn register<Fac>(&mut self, name: impl Into<String>, factory: Fac)
    where
        Fac: Fn() -> Box<dyn Compiler> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.factories.insert(name.clone(), Box::new(factory)).is_some() {
            log::warn!("front-end `{}` registered twice, keeping the latest", name);
        }
    }

    /// Register a front-end constructed through `Default`, wrapped in a [`Pipeline`].
    pub fn register_default<F>(&mut self, name: impl Into<String>)
    where
        F: Frontend + Default + 'static,
    {
        self.register(name, || Box::new(Pipeline::new(F::default())) as Box<dyn Compiler>);
    }

    /// Build a new compiler for `name`.
    pub fn resolve(&self, name: &str) -> CompileResult<Box<dyn Compiler>> {
        match self.factories.get(name) {
            Some(factory) => {
                log::trace!("resolved front-end `{}`", name);
                Ok(factory())
            }
            None => Err(CompileError::NotFound {
                name: name.to_string(),
                available: self.names(),
            }),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl fmt::Debug for FrontendRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrontendRegistry")
            .field("names", &self.names())
            .finish()
    }
}
