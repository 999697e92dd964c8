// This module defines the Accelerator trait, the opaque target descriptor that every
// compilation is aimed at. The pipeline never reads any of its fields: it borrows the
// descriptor for the duration of one compile call and hands it to the front-end hooks,
// which may consult it to reject source the backend cannot run. TargetInfo is the plain
// descriptor used by the command-line driver and by tests.

//! Target descriptor responsibilities.
//!
//! An accelerator describes the execution backend a kernel is compiled for.
//! The framework treats it as read-only and borrowed:
//! - It is bound together with the source at the start of a compile call.
//! - Front-ends may query it from `translate` to validate capabilities.
//! - Nothing in the pipeline keeps a reference once the call returns.

use std::fmt;

/// Description of one execution backend.
///
/// Only [`name`](Accelerator::name) is mandatory. Capability queries have
/// conservative defaults meaning "no limit declared".
pub trait Accelerator: fmt::Debug + Send + Sync {
    /// Short identifier of the backend (e.g. "simulator").
    fn name(&self) -> &str;

    /// Number of qubits the backend provides, if it declares a limit.
    fn qubit_count(&self) -> Option<usize> {
        None
    }
}

/// Plain accelerator description built by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    name: String,
    qubits: Option<usize>,
}

impl TargetInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: None,
        }
    }

    /// Declare the number of qubits available on this target.
    pub fn with_qubits(mut self, qubits: usize) -> Self {
        self.qubits = Some(qubits);
        self
    }
}

impl Accelerator for TargetInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn qubit_count(&self) -> Option<usize> {
        self.qubits
    }
}
