//! Symbol table
//!
//! Records declared identifiers and resolves uses to the most recent
//! declaration with the same name. Earlier declarations are shadowed, not
//! removed, and stay visible in the printed table.

mod table;

pub use table::{Symbol, SymbolTable};
