//! Command-line driver for the built-in front-ends.
//!
//! Reads a kernel body from a file or stdin, compiles it with the named
//! front-end and prints the resulting IR.

use clap::Parser;
use qfront::core::{CompileError, FrontendRegistry, TargetInfo};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "qfront", version, about = "Compile kernel source to IR")]
struct Cli {
    /// Kernel source file (reads stdin when omitted)
    input: Option<PathBuf>,
    /// Front-end to compile with
    #[arg(short, long, default_value = "gates")]
    lang: String,
    /// Target accelerator name
    #[arg(short, long, default_value = "simulator")]
    target: String,
    /// Number of qubits the target provides
    #[arg(long)]
    qubits: Option<usize>,
    /// List registered front-ends and exit
    #[arg(long)]
    list: bool,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let registry = FrontendRegistry::with_builtins();
    if cli.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let source = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut target = TargetInfo::new(cli.target.as_str());
    if let Some(qubits) = cli.qubits {
        target = target.with_qubits(qubits);
    }

    match compile(&registry, &cli.lang, &source, &target) {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(exit_code(&e));
        }
    }
}

fn compile(
    registry: &FrontendRegistry,
    lang: &str,
    source: &str,
    target: &TargetInfo,
) -> Result<String, CompileError> {
    let mut compiler = registry.resolve(lang)?;
    let ir = compiler.compile(source, target)?;
    Ok(ir.to_text())
}

/// Exit status for a failed compilation: 2 for a defective front-end, 1 otherwise.
fn exit_code(err: &CompileError) -> i32 {
    if err.is_defect() {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> TargetInfo {
        TargetInfo::new("simulator").with_qubits(2)
    }

    #[test]
    fn compile_prints_ir_text() {
        let registry = FrontendRegistry::with_builtins();
        let text = compile(&registry, "gates", "h 0 // prep\ncx 0 1", &sim()).unwrap();
        assert_eq!(text, "H 0\nCNOT 0 1");
    }

    #[test]
    fn recoverable_failures_exit_with_one() {
        let registry = FrontendRegistry::with_builtins();
        for (lang, source) in [("unknown-lang", "H 0"), ("gates", "FOO 1"), ("gates", "H 5")] {
            let err = compile(&registry, lang, source, &sim()).unwrap_err();
            assert_eq!(exit_code(&err), 1, "{lang}: {err}");
        }
    }

    #[test]
    fn defects_exit_with_two() {
        let registry = FrontendRegistry::with_builtins();
        let err = compile(&registry, "broken", "anything", &sim()).unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }
}
