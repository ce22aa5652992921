//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;
use super::Span;

/// Errors raised by the symbol table, the code store and the driver
#[derive(Error, Debug)]
pub enum CompileError {
    /// Allocation for a new symbol failed; the compilation must stop
    #[error("out of memory while inserting symbol '{name}'")]
    OutOfMemory { name: String },

    #[error("instruction store full: capacity of {capacity} instructions exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("Script error at {span:?}: {message}")]
    Script { message: String, span: Span },

    #[error("Report error on line {line}: {message}")]
    Report { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn out_of_memory(name: impl Into<String>) -> Self {
        Self::OutOfMemory { name: name.into() }
    }

    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    pub fn script(message: impl Into<String>, span: Span) -> Self {
        Self::Script {
            message: message.into(),
            span,
        }
    }

    pub fn report(line: usize, message: impl Into<String>) -> Self {
        Self::Report {
            line,
            message: message.into(),
        }
    }

    /// Fatal errors leave the compilation unusable
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. } | Self::Io(_))
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        let diagnostic = Self::diagnostic(file_id, error);
        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }

    fn diagnostic(file_id: usize, error: &CompileError) -> Diagnostic<usize> {
        match error {
            CompileError::Script { message, span } => Diagnostic::error()
                .with_message("Script error")
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(message)
                ]),

            CompileError::OutOfMemory { name } => Diagnostic::error()
                .with_message(format!("out of memory while inserting symbol '{name}'"))
                .with_notes(vec!["the compilation was aborted".to_string()]),

            CompileError::CapacityExceeded { capacity } => Diagnostic::error()
                .with_message(format!("instruction store full ({capacity} instructions)"))
                .with_notes(vec!["rerun with a larger --capacity or with --unbounded".to_string()]),

            CompileError::Report { line, message } => {
                Diagnostic::error().with_message(format!("Report error on line {line}: {message}"))
            }

            CompileError::Io(err) => {
                Diagnostic::error().with_message(format!("IO error: {err}"))
            }
        }
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CompileError::capacity_exceeded(2);
        assert_eq!(
            err.to_string(),
            "instruction store full: capacity of 2 instructions exceeded"
        );
        let err = CompileError::out_of_memory("x");
        assert_eq!(err.to_string(), "out of memory while inserting symbol 'x'");
    }

    #[test]
    fn test_fatal() {
        assert!(CompileError::out_of_memory("x").is_fatal());
        assert!(!CompileError::capacity_exceeded(1).is_fatal());
        assert!(!CompileError::script("bad", Span::new(0, 1)).is_fatal());
    }

    #[test]
    fn test_script_diagnostic_has_label() {
        let err = CompileError::script("unknown command", Span::new(2, 5));
        let diagnostic = DiagnosticReporter::diagnostic(0, &err);
        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.labels[0].range, 2..5);
    }
}
