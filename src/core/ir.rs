// This module defines the Ir trait, the backend-agnostic artifact every successful
// compilation produces. The framework treats it opaquely: the pipeline returns whatever
// the front-end's translate hook built, wrapped in an Arc so several readers (the caller,
// a backend, a cache) can share it without copying. No framework code mutates an IR after
// it is produced. as_any allows consumers that know the concrete representation to
// downcast. TextIr is the simplest artifact: a single textual body.

//! Intermediate representation artifacts.

use std::any::Any;
use std::fmt;

/// Output of a successful compilation.
pub trait Ir: fmt::Debug + Send + Sync {
    /// Human-readable rendering of the whole artifact.
    fn to_text(&self) -> String;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Ir {
    /// Borrow the artifact as its concrete type, if it is one.
    pub fn downcast_ref<T: Ir + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

/// IR consisting of one opaque textual body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextIr {
    pub body: String,
}

impl TextIr {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl Ir for TextIr {
    fn to_text(&self) -> String {
        self.body.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn downcast_recovers_concrete_artifact() {
        let ir: Arc<dyn Ir> = Arc::new(TextIr::new("body"));
        assert_eq!(ir.downcast_ref::<TextIr>().map(|t| t.body.as_str()), Some("body"));
        assert_eq!(ir.to_text(), "body");
    }
}
