//! Reading printed reports back into rows
//!
//! Tools that display a compilation (tables in a viewer, golden-file tests)
//! consume the text written by `Compilation::write_report`. `Report::parse`
//! recovers the symbol rows and instruction lines from that text.

use crate::common::{CompileError, CompileResult};

const SYMBOL_HEADER: &str = "Symbol Table:";
const CODE_HEADER: &str = "Intermediate Code:";

/// One row of the symbol table report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRow {
    pub name: String,
    pub ty: String,
    pub value: i64,
}

/// Parsed report sections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Most recently inserted first, as printed
    pub symbols: Vec<SymbolRow>,
    /// Rendered instructions in program order
    pub code: Vec<String>,
}

#[derive(Clone, Copy)]
enum Section {
    None,
    Symbols,
    Code,
}

impl Report {
    /// Parse a symbol table report, an instruction report, or both
    ///
    /// Text before the first section header is ignored.
    pub fn parse(text: &str) -> CompileResult<Self> {
        let mut report = Report::default();
        let mut section = Section::None;

        for (number, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line == SYMBOL_HEADER {
                section = Section::Symbols;
                continue;
            }
            if line == CODE_HEADER {
                section = Section::Code;
                continue;
            }
            if line.is_empty() {
                continue;
            }

            match section {
                Section::None => {}
                Section::Symbols => {
                    if is_table_header(line) {
                        continue;
                    }
                    if let Some(row) = parse_symbol_row(line, number + 1)? {
                        report.symbols.push(row);
                    }
                }
                Section::Code => report.code.push(line.to_string()),
            }
        }

        Ok(report)
    }
}

/// The column header line or the dashed rule under it
fn is_table_header(line: &str) -> bool {
    line.split_whitespace().eq(["Name", "Type", "Value"]) || line.chars().all(|c| c == '-')
}

/// Rows with fewer than three fields are skipped
///
/// Printed rows are tab-separated, so a type may contain spaces. Text
/// without tabs falls back to whitespace splitting.
fn parse_symbol_row(line: &str, number: usize) -> CompileResult<Option<SymbolRow>> {
    let fields: Vec<&str> = if line.contains('\t') {
        line.splitn(3, '\t').map(str::trim).collect()
    } else {
        line.split_whitespace().take(3).collect()
    };
    let [name, ty, value] = fields.as_slice() else {
        return Ok(None);
    };
    let value = value
        .parse()
        .map_err(|_| CompileError::report(number, format!("invalid symbol value '{value}'")))?;
    Ok(Some(SymbolRow {
        name: name.to_string(),
        ty: ty.to_string(),
        value,
    }))
}
