//! Per-compilation state
//!
//! A `Compilation` owns the symbol table, the instruction store and the
//! temporary-name allocator for one run. Independent compilations each get
//! their own instance; nothing here is global.

use crate::common::CompileResult;
use crate::ir::{CapacityPolicy, CodeStore, TempAllocator};
use crate::symtab::SymbolTable;
use std::fmt;
use std::io;

/// Options for a new compilation
#[derive(Debug, Clone, Copy, Default)]
pub struct CompilationConfig {
    pub capacity: CapacityPolicy,
}

/// State shared by the analysis and code generation phases of one run
#[derive(Debug, Default)]
pub struct Compilation {
    symbols: SymbolTable,
    code: CodeStore,
    temps: TempAllocator,
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CompilationConfig) -> Self {
        Self {
            symbols: SymbolTable::new(),
            code: CodeStore::with_policy(config.capacity),
            temps: TempAllocator::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    pub fn code(&self) -> &CodeStore {
        &self.code
    }

    pub fn code_mut(&mut self) -> &mut CodeStore {
        &mut self.code
    }

    pub fn new_temp(&mut self) -> String {
        self.temps.new_temp()
    }

    pub fn new_label(&mut self) -> String {
        self.temps.new_label()
    }

    /// Return to the empty state, keeping the capacity policy
    pub fn reset(&mut self) {
        self.symbols.init();
        self.code.clear();
        self.temps.reset();
    }

    /// Symbol table report, a blank line, then the instruction report
    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    pub fn print(&self) -> CompileResult<()> {
        let stdout = io::stdout();
        self.write_report(&mut stdout.lock())?;
        Ok(())
    }
}

impl fmt::Display for Compilation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols)?;
        writeln!(f)?;
        write!(f, "{}", self.code)
    }
}
