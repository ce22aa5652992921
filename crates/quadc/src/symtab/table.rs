//! Symbol storage with chronological shadowing

use crate::common::{CompileError, CompileResult};
use std::collections::HashMap;
use std::collections::TryReserveError;
use std::fmt;
use std::io;

/// A declared identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// Opaque type label, e.g. `int`
    pub ty: String,
    pub value: i64,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.ty, self.value)
    }
}

/// Symbol table for one compilation
///
/// Every insertion is kept in `history`. `shadows` maps a name to the
/// indices of its entries in insertion order, so the last index is the
/// binding a lookup resolves to. Redeclaring a name is never an error.
#[derive(Debug, Default)]
pub struct SymbolTable {
    history: Vec<Symbol>,
    shadows: HashMap<String, Vec<usize>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset to the empty table, releasing every entry
    pub fn init(&mut self) {
        self.history.clear();
        self.shadows.clear();
    }

    /// Declare `name`, shadowing any earlier declaration of it
    ///
    /// All storage is reserved before the table is modified, so an
    /// `OutOfMemory` error leaves the table exactly as it was.
    pub fn insert(&mut self, name: &str, ty: &str, value: i64) -> CompileResult<&Symbol> {
        let oom = |_: TryReserveError| CompileError::out_of_memory(name);

        let index = self.history.len();
        self.history.try_reserve(1).map_err(oom)?;
        let symbol = Symbol {
            name: try_to_owned(name).map_err(oom)?,
            ty: try_to_owned(ty).map_err(oom)?,
            value,
        };

        if let Some(stack) = self.shadows.get_mut(name) {
            stack.try_reserve(1).map_err(oom)?;
            stack.push(index);
        } else {
            self.shadows.try_reserve(1).map_err(oom)?;
            let mut stack = Vec::new();
            stack.try_reserve_exact(1).map_err(oom)?;
            stack.push(index);
            self.shadows.insert(try_to_owned(name).map_err(oom)?, stack);
        }

        self.history.push(symbol);
        Ok(&self.history[index])
    }

    /// Resolve `name` to its most recent declaration
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        let index = *self.shadows.get(name)?.last()?;
        self.history.get(index)
    }

    /// Number of entries, shadowed ones included
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Every entry, most recently inserted first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Symbol> {
        self.history.iter().rev()
    }

    /// Only the entries a lookup can currently reach, most recent first
    pub fn live(&self) -> impl Iterator<Item = &Symbol> {
        self.history
            .iter()
            .enumerate()
            .rev()
            .filter(|(index, symbol)| {
                self.shadows
                    .get(&symbol.name)
                    .and_then(|stack| stack.last())
                    == Some(index)
            })
            .map(|(_, symbol)| symbol)
    }

    /// All declarations of `name`, newest first
    pub fn shadowed<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Symbol> + use<'a> {
        self.shadows
            .get(name)
            .into_iter()
            .flat_map(|stack| stack.iter().rev())
            .map(|&index| &self.history[index])
    }

    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Print the table report to stdout
    pub fn print(&self) -> CompileResult<()> {
        let stdout = io::stdout();
        self.write_report(&mut stdout.lock())?;
        Ok(())
    }
}

fn try_to_owned(s: &str) -> Result<String, TryReserveError> {
    let mut owned = String::new();
    owned.try_reserve_exact(s.len())?;
    owned.push_str(s);
    Ok(owned)
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol Table:")?;
        writeln!(f, "Name    Type    Value")?;
        writeln!(f, "-------------------------")?;
        for symbol in self.iter() {
            writeln!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn resolved(table: &SymbolTable, name: &str) -> Option<(String, i64)> {
        table.lookup(name).map(|s| (s.ty.clone(), s.value))
    }

    #[test]
    fn test_distinct_names() {
        let mut table = SymbolTable::new();
        table.insert("a", "int", 1).unwrap();
        table.insert("b", "float", 2).unwrap();
        table.insert("c", "char", 3).unwrap();

        assert_eq!(resolved(&table, "a"), Some(("int".to_string(), 1)));
        assert_eq!(resolved(&table, "b"), Some(("float".to_string(), 2)));
        assert_eq!(resolved(&table, "c"), Some(("char".to_string(), 3)));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_shadowing_keeps_history() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 1).unwrap();
        table.insert("x", "int", 2).unwrap();

        assert_eq!(resolved(&table, "x"), Some(("int".to_string(), 2)));
        assert_eq!(table.len(), 2);
        let report = table.to_string();
        assert!(report.contains("x\tint\t1\n"));
        assert!(report.contains("x\tint\t2\n"));
    }

    #[test]
    fn test_lookup_misses() {
        let mut table = SymbolTable::new();
        assert!(table.lookup("x").is_none());
        table.insert("x", "int", 1).unwrap();
        assert!(table.lookup("y").is_none());
        assert!(table.lookup("X").is_none());
    }

    #[test]
    fn test_report_most_recent_first() {
        let mut table = SymbolTable::new();
        table.insert("a", "int", 1).unwrap();
        table.insert("b", "int", 2).unwrap();
        table.insert("c", "int", 3).unwrap();

        assert_eq!(
            table.to_string(),
            "Symbol Table:\n\
             Name    Type    Value\n\
             -------------------------\n\
             c\tint\t3\n\
             b\tint\t2\n\
             a\tint\t1\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let table = SymbolTable::new();
        assert_eq!(
            table.to_string(),
            "Symbol Table:\nName    Type    Value\n-------------------------\n"
        );
    }

    #[test]
    fn test_report_is_idempotent() {
        let mut table = SymbolTable::new();
        table.insert("a", "int", -4).unwrap();
        table.insert("a", "bool", 0).unwrap();

        let mut first = Vec::new();
        let mut second = Vec::new();
        table.write_report(&mut first).unwrap();
        table.write_report(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_init_clears() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 1).unwrap();
        table.init();
        assert!(table.is_empty());
        assert!(table.lookup("x").is_none());
        table.init();
        assert!(table.is_empty());

        table.insert("x", "char", 7).unwrap();
        assert_eq!(resolved(&table, "x"), Some(("char".to_string(), 7)));
    }

    #[test]
    fn test_live_and_shadowed() {
        let mut table = SymbolTable::new();
        table.insert("x", "int", 1).unwrap();
        table.insert("y", "int", 2).unwrap();
        table.insert("x", "int", 3).unwrap();

        let live: Vec<_> = table.live().map(|s| (s.name.as_str(), s.value)).collect();
        assert_eq!(live, vec![("x", 3), ("y", 2)]);

        let xs: Vec<_> = table.shadowed("x").map(|s| s.value).collect();
        assert_eq!(xs, vec![3, 1]);
        assert_eq!(table.shadowed("z").count(), 0);
    }

    #[test]
    fn test_insert_returns_new_entry() {
        let mut table = SymbolTable::new();
        let symbol = table.insert("n", "int", 42).unwrap();
        assert_eq!(symbol.to_string(), "n\tint\t42");
    }
}
