//! Test utilities for pipeline unit tests.
//!
//! Front-ends here record what the hooks observed so tests can assert on
//! binding and normalization without a real grammar.

#[cfg(test)]
pub mod test {
    use crate::core::compiler::{CompilationUnit, Frontend};
    use crate::core::error::{CompileError, CompileResult};
    use crate::core::ir::TextIr;

    /// Front-end that remembers every (source, target name) pair `translate` saw.
    ///
    /// With a prefix/suffix configured, `normalize` wraps the staged source.
    #[derive(Debug, Default)]
    pub struct Recorder {
        pub wrap: Option<(String, String)>,
        pub seen: Vec<(String, String)>,
    }

    impl Recorder {
        pub fn wrapping(prefix: &str, suffix: &str) -> Self {
            Self {
                wrap: Some((prefix.to_string(), suffix.to_string())),
                seen: Vec::new(),
            }
        }
    }

    impl Frontend for Recorder {
        type Output = TextIr;

        fn name(&self) -> &str {
            "recorder"
        }

        fn normalize(&mut self, unit: &mut CompilationUnit<'_>) {
            if let Some((prefix, suffix)) = &self.wrap {
                let wrapped = format!("{}{}{}", prefix, unit.source(), suffix);
                unit.set_source(wrapped);
            }
        }

        fn translate(&mut self, unit: &CompilationUnit<'_>) -> CompileResult<TextIr> {
            self.seen
                .push((unit.source().to_string(), unit.target().name().to_string()));
            Ok(TextIr::new(unit.source()))
        }
    }

    /// Front-end that never got its translation step.
    #[derive(Debug, Default)]
    pub struct Forgetful;

    impl Frontend for Forgetful {
        type Output = TextIr;

        fn name(&self) -> &str {
            "forgetful"
        }

        fn translate(&mut self, _unit: &CompilationUnit<'_>) -> CompileResult<TextIr> {
            Err(CompileError::missing_translate(self.name()))
        }
    }
}
