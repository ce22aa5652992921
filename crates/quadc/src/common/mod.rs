//! Common infrastructure shared by the symbol table, the IR and the driver

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter};
pub use span::Span;
