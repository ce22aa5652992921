//! Script driver
//!
//! Stands in for the parsing and semantic-analysis phase: it reads a
//! command script and replays each command against a `Compilation`, the
//! same calls an analyzer makes while walking a program.

pub mod lexer;
pub mod script;

use crate::common::CompileResult;
use crate::context::Compilation;

pub use lexer::{Lexer, Token, TokenKind};
pub use script::{Command, Parser, Statement, ABSENT_OPERAND};

/// Configuration options for the driver
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    pub dump_tokens: bool,
    pub verbose: bool,
}

/// Replays command scripts
#[derive(Debug, Clone, Default)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Parse `source` and apply every command to `unit`
    ///
    /// Returns the lines produced by `lookup` and `print` commands. Stops at
    /// the first failing command; everything applied before it stays in
    /// `unit`.
    pub fn run(&self, source: &str, unit: &mut Compilation) -> CompileResult<Vec<String>> {
        if self.config.dump_tokens {
            eprintln!("=== Tokens ===");
            for token in Lexer::new(source).tokenize_all()? {
                eprintln!("  {:?} @ {}..{}", token.kind, token.span.start, token.span.end);
            }
            eprintln!("=== End Tokens ===\n");
        }

        let statements = Parser::new(source)?.parse()?;
        if self.config.verbose {
            eprintln!("Parsed {} commands", statements.len());
        }

        let mut output = Vec::new();
        for statement in statements {
            self.execute(statement.command, unit, &mut output)?;
        }
        Ok(output)
    }

    /// Apply a single command
    pub fn execute(
        &self,
        command: Command,
        unit: &mut Compilation,
        output: &mut Vec<String>,
    ) -> CompileResult<()> {
        match command {
            Command::Insert { name, ty, value } => {
                unit.symbols_mut().insert(&name, &ty, value)?;
            }
            Command::Lookup { name } => {
                let line = match unit.symbols().lookup(&name) {
                    Some(symbol) => format!("found {}: {} = {}", symbol.name, symbol.ty, symbol.value),
                    None => format!("not found: {name}"),
                };
                output.push(line);
            }
            Command::Emit(quad) => {
                unit.code_mut().push(quad)?;
            }
            Command::Reset => unit.reset(),
            Command::Print => {
                output.extend(unit.to_string().lines().map(str::to_string));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CompileError;
    use crate::context::CompilationConfig;
    use crate::ir::CapacityPolicy;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_run_script() {
        let source = "\
            insert x int 1\n\
            insert x int 2\n\
            lookup x\n\
            lookup y\n\
            emit + x 1 t1\n\
            emit = t1 _ x\n";
        let mut unit = Compilation::new();
        let output = Driver::default().run(source, &mut unit).unwrap();

        assert_eq!(output, vec!["found x: int = 2", "not found: y"]);
        assert_eq!(unit.symbols().len(), 2);
        assert_eq!(
            unit.code().to_string(),
            "Intermediate Code:\nt1 = x + 1\nx = t1\n"
        );
    }

    #[test]
    fn test_float_operand() {
        let mut unit = Compilation::new();
        Driver::default().run("emit * x 3.14 t1\n", &mut unit).unwrap();
        assert_eq!(unit.code().to_string(), "Intermediate Code:\nt1 = x * 3.14\n");
    }

    #[test]
    fn test_print_command_snapshots_state() {
        let source = "insert a int 1\nprint\nemit = a _ b\n";
        let mut unit = Compilation::new();
        let output = Driver::default().run(source, &mut unit).unwrap();

        assert_eq!(
            output,
            vec![
                "Symbol Table:",
                "Name    Type    Value",
                "-------------------------",
                "a\tint\t1",
                "",
                "Intermediate Code:",
            ]
        );
        assert_eq!(unit.code().len(), 1);
    }

    #[test]
    fn test_reset_command() {
        let mut unit = Compilation::new();
        let output = Driver::default()
            .run("insert a int 1\nreset\nlookup a\n", &mut unit)
            .unwrap();
        assert_eq!(output, vec!["not found: a"]);
        assert!(unit.symbols().is_empty());
    }

    #[test]
    fn test_capacity_error_keeps_earlier_code() {
        let mut unit = Compilation::with_config(CompilationConfig {
            capacity: CapacityPolicy::Bounded(1),
        });
        let err = Driver::default()
            .run("emit + a b t1\nemit + t1 c t2\n", &mut unit)
            .unwrap_err();

        assert!(matches!(err, CompileError::CapacityExceeded { capacity: 1 }));
        assert_eq!(unit.code().to_string(), "Intermediate Code:\nt1 = a + b\n");
    }

    #[test]
    fn test_parse_error_applies_nothing() {
        let mut unit = Compilation::new();
        let result = Driver::default().run("insert a int 1\nbogus\n", &mut unit);
        assert!(matches!(result, Err(CompileError::Script { .. })));
        assert!(unit.symbols().is_empty());
    }
}
