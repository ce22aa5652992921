//! Quadc - symbol table and three-address code back-end
//!
//! This library is the bridge between semantic analysis and code
//! generation in a small compiler: the analyzer records declarations in a
//! symbol table and emits quadruples into an instruction store, and both
//! are printed as plain-text reports at the end of a run.
//!
//! ## Architecture
//!
//! The crate is organized into:
//! - **Symbol table** (`symtab/`): declarations with chronological shadowing
//! - **IR** (`ir/`): quadruples, the bounded instruction store, temporaries
//! - **Context** (`context`): per-compilation ownership of both
//! - **Report** (`report`): reading printed reports back into rows
//! - **Driver** (`driver/`): replays command scripts against a compilation
//! - **Common** (`common/`): Shared infrastructure (errors, spans)

pub mod common;
pub mod symtab;
pub mod ir;
pub mod context;
pub mod report;
pub mod driver;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, Span};
pub use context::{Compilation, CompilationConfig};
pub use driver::{Driver, DriverConfig};
pub use ir::{CapacityPolicy, CodeStore, Quad, TempAllocator, DEFAULT_CAPACITY};
pub use report::{Report, SymbolRow};
pub use symtab::{Symbol, SymbolTable};
