//! Tests for the gate-list reference front-end.

use qfront::core::{CompileError, Compiler, FrontendRegistry, Ir, Pipeline, TargetInfo};
use qfront::frontends::{Gate, GateListFrontend, GateProgram, Instruction};

const BELL: &str = "\
    // prepare a bell pair
    H 0
    CNOT 0, 1   # entangle

    MEASURE q[0]
    MEASURE q1
";

#[test]
fn compiles_bell_kernel() {
    let target = TargetInfo::new("simulator").with_qubits(2);
    let program = Pipeline::new(GateListFrontend).run(BELL, &target).unwrap();

    assert_eq!(program.qubits_used, 2);
    assert_eq!(
        program.instructions,
        vec![
            Instruction { gate: Gate::H, qubits: vec![0] },
            Instruction { gate: Gate::Cnot, qubits: vec![0, 1] },
            Instruction { gate: Gate::Measure, qubits: vec![0] },
            Instruction { gate: Gate::Measure, qubits: vec![1] },
        ]
    );
    assert_eq!(program.to_text(), "H 0\nCNOT 0 1\nMEASURE 0\nMEASURE 1");
}

#[test]
fn errors_point_at_caller_line() {
    let target = TargetInfo::new("simulator");
    let source = "H 0\n// comment\n  FOO 2  // bad\n";
    let err = Pipeline::new(GateListFrontend).run(source, &target).unwrap_err();

    match err {
        CompileError::Compilation { frontend, fragment, line, reason } => {
            assert_eq!(frontend, "gates");
            assert_eq!(fragment, "FOO 2");
            assert_eq!(line, Some(3));
            assert_eq!(reason, "unknown gate `FOO`");
        }
        other => panic!("expected Compilation, got {other:?}"),
    }
}

#[test]
fn comment_only_kernel_is_rejected() {
    let target = TargetInfo::new("simulator");
    let err = Pipeline::new(GateListFrontend)
        .run("# nothing here\n\n", &target)
        .unwrap_err();
    assert!(matches!(err, CompileError::Compilation { line: None, .. }));
}

#[test]
fn oversized_kernel_is_unsupported_on_small_target() {
    let target = TargetInfo::new("two-qubit-chip").with_qubits(2);
    let err = Pipeline::new(GateListFrontend)
        .run("H 0\nCNOT 1 2", &target)
        .unwrap_err();

    assert_eq!(
        err,
        CompileError::unsupported_target(
            "gates",
            "two-qubit-chip",
            "kernel uses 3 qubits but the target provides 2"
        )
    );
    assert!(err.is_recoverable());
}

#[test]
fn unbounded_target_accepts_any_width() {
    let target = TargetInfo::new("simulator");
    let program = Pipeline::new(GateListFrontend).run("x 40", &target).unwrap();
    assert_eq!(program.qubits_used, 41);
}

#[test]
fn registry_path_yields_gate_program() {
    let registry = FrontendRegistry::with_builtins();
    let target = TargetInfo::new("simulator").with_qubits(2);
    let ir = registry.resolve("gates").unwrap().compile(BELL, &target).unwrap();

    let program = ir.downcast_ref::<GateProgram>().unwrap();
    assert_eq!(program.instructions.len(), 4);
}

#[test]
fn oversized_qubit_index_is_a_compilation_error() {
    let target = TargetInfo::new("sim");
    let source = format!("H 0\nX {}", usize::MAX);
    let err = Pipeline::new(GateListFrontend).run(&source, &target).unwrap_err();

    match err {
        CompileError::Compilation { fragment, line, reason, .. } => {
            assert_eq!(fragment, format!("X {}", usize::MAX));
            assert_eq!(line, Some(2));
            assert!(reason.starts_with("invalid qubit operand"));
        }
        other => panic!("expected Compilation, got {other:?}"),
    }
}

#[test]
fn largest_accepted_index_is_checked_against_capacity() {
    let target = TargetInfo::new("chip").with_qubits(4);
    let source = format!("X {}", usize::MAX - 1);
    let err = Pipeline::new(GateListFrontend).run(&source, &target).unwrap_err();
    assert!(matches!(err, CompileError::UnsupportedTarget { .. }));
}

#[test]
fn signed_operands_are_rejected() {
    let registry = FrontendRegistry::with_builtins();
    let target = TargetInfo::new("sim");
    for source in ["H +3", "H q+3"] {
        let err = registry.resolve("gates").unwrap().compile(source, &target).unwrap_err();
        assert!(
            matches!(err, CompileError::Compilation { line: Some(1), .. }),
            "{source}: {err:?}"
        );
    }
}
