// This module implements the reference gate-list front-end. Callers submit only a kernel
// body: one gate per line, written as a mnemonic followed by qubit operands, with `//` or
// `#` comments and arbitrary indentation. The normalize hook blanks out comments and
// indentation while keeping every line in place, so translate can report errors against
// the caller's own line numbers. Translate parses each remaining line against a fixed
// gate table, rejects malformed instructions with a Compilation error naming the offending
// line, and rejects programs addressing more qubits than the target declares with
// UnsupportedTarget. The output IR is a GateProgram: the instruction list plus the
// number of qubits it touches.

//! Gate-list front-end.
//!
//! ```text
//! // bell pair
//! H 0
//! CNOT 0, 1
//! MEASURE q0
//! MEASURE q1
//! ```

use crate::core::{CompilationUnit, CompileError, CompileResult, Frontend, Ir};
use std::any::Any;
use std::fmt;

/// Name the gate-list front-end is registered under.
pub const NAME: &str = "gates";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    H,
    X,
    Y,
    Z,
    S,
    T,
    Cnot,
    Cz,
    Swap,
    Measure,
}

impl Gate {
    /// Look up a gate by mnemonic, ignoring case.
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        use Gate::*;
        let gate = match text.to_ascii_uppercase().as_str() {
            "H" => H,
            "X" => X,
            "Y" => Y,
            "Z" => Z,
            "S" => S,
            "T" => T,
            "CNOT" | "CX" => Cnot,
            "CZ" => Cz,
            "SWAP" => Swap,
            "MEASURE" => Measure,
            _ => return None,
        };
        Some(gate)
    }

    pub const fn mnemonic(self) -> &'static str {
        use Gate::*;
        match self {
            H => "H",
            X => "X",
            Y => "Y",
            Z => "Z",
            S => "S",
            T => "T",
            Cnot => "CNOT",
            Cz => "CZ",
            Swap => "SWAP",
            Measure => "MEASURE",
        }
    }

    /// Number of qubit operands.
    pub const fn arity(self) -> usize {
        match self {
            Gate::Cnot | Gate::Cz | Gate::Swap => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub gate: Gate,
    pub qubits: Vec<usize>,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate.mnemonic())?;
        for q in &self.qubits {
            write!(f, " {}", q)?;
        }
        Ok(())
    }
}

/// IR produced by the gate-list front-end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateProgram {
    pub instructions: Vec<Instruction>,
    /// One past the highest qubit index used.
    pub qubits_used: usize,
}

impl GateProgram {
    fn push(&mut self, inst: Instruction) {
        if let Some(max) = inst.qubits.iter().max() {
            self.qubits_used = self.qubits_used.max(max + 1);
        }
        self.instructions.push(inst);
    }
}

impl Ir for GateProgram {
    fn to_text(&self) -> String {
        self.instructions
            .iter()
            .map(|inst| inst.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Front-end for line-oriented gate kernels.
#[derive(Debug, Default)]
pub struct GateListFrontend;

impl Frontend for GateListFrontend {
    type Output = GateProgram;

    fn name(&self) -> &str {
        NAME
    }

    fn normalize(&mut self, unit: &mut CompilationUnit<'_>) {
        let cleaned = unit
            .source()
            .lines()
            .map(strip_comment)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n");
        unit.set_source(cleaned);
    }

    fn translate(&mut self, unit: &CompilationUnit<'_>) -> CompileResult<GateProgram> {
        let mut program = GateProgram::default();
        for (idx, line) in unit.source().lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let inst = parse_instruction(line).map_err(|e| e.at_line(idx + 1))?;
            program.push(inst);
        }

        if program.instructions.is_empty() {
            return Err(CompileError::compilation(NAME, "", "kernel has no instructions"));
        }

        let target = unit.target();
        if let Some(capacity) = target.qubit_count() {
            if program.qubits_used > capacity {
                return Err(CompileError::unsupported_target(
                    NAME,
                    target.name(),
                    format!(
                        "kernel uses {} qubits but the target provides {}",
                        program.qubits_used, capacity
                    ),
                ));
            }
        }

        log::debug!(
            "{}: {} instructions over {} qubits",
            NAME,
            program.instructions.len(),
            program.qubits_used
        );
        Ok(program)
    }
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find("//"), line.find('#')]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..end]
}

fn parse_instruction(line: &str) -> CompileResult<Instruction> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty());

    // Non-empty lines always have a first token.
    let mnemonic = parts.next().unwrap_or_default();
    let gate = Gate::from_mnemonic(mnemonic).ok_or_else(|| {
        CompileError::compilation(NAME, line, format!("unknown gate `{}`", mnemonic))
    })?;

    let mut qubits = Vec::with_capacity(gate.arity());
    for operand in parts {
        let qubit = parse_qubit(operand).ok_or_else(|| {
            CompileError::compilation(NAME, line, format!("invalid qubit operand `{}`", operand))
        })?;
        if qubits.contains(&qubit) {
            return Err(CompileError::compilation(
                NAME,
                line,
                format!("qubit {} used twice", qubit),
            ));
        }
        qubits.push(qubit);
    }

    if qubits.len() != gate.arity() {
        return Err(CompileError::compilation(
            NAME,
            line,
            format!(
                "{} takes {} operand(s), found {}",
                gate.mnemonic(),
                gate.arity(),
                qubits.len()
            ),
        ));
    }

    Ok(Instruction { gate, qubits })
}

/// Accepts `3`, `q3` and `q[3]`.
///
/// `usize::MAX` is rejected so the qubit span `index + 1` always fits.
fn parse_qubit(text: &str) -> Option<usize> {
    let digits = match text.strip_prefix(['q', 'Q']) {
        Some(rest) => rest
            .strip_prefix('[')
            .and_then(|r| r.strip_suffix(']'))
            .unwrap_or(rest),
        None => text,
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&q| q < usize::MAX)
}
