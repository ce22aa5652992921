//! Append-only instruction sequence

use super::quad::Quad;
use crate::common::{CompileError, CompileResult};
use std::fmt;
use std::io;

/// Instruction limit of a store created with the default policy
pub const DEFAULT_CAPACITY: usize = 1000;

/// How many instructions a `CodeStore` accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// At most this many instructions; further emits fail
    Bounded(usize),
    /// Grow as needed
    Unbounded,
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        CapacityPolicy::Bounded(DEFAULT_CAPACITY)
    }
}

/// Ordered instruction sequence for one compilation
///
/// The index of an instruction is its position in program order.
#[derive(Debug, Clone, Default)]
pub struct CodeStore {
    quads: Vec<Quad>,
    policy: CapacityPolicy,
}

impl CodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: CapacityPolicy) -> Self {
        Self {
            quads: Vec::new(),
            policy,
        }
    }

    /// Append `result = arg1 op arg2`, returning its index
    ///
    /// Pass an empty `arg2` for the unary and assignment forms. Nothing is
    /// validated beyond the capacity check.
    pub fn emit(
        &mut self,
        op: impl Into<String>,
        arg1: impl Into<String>,
        arg2: impl Into<String>,
        result: impl Into<String>,
    ) -> CompileResult<usize> {
        self.push(Quad::new(op, arg1, arg2, result))
    }

    /// Append a prebuilt instruction, returning its index
    pub fn push(&mut self, quad: Quad) -> CompileResult<usize> {
        if let CapacityPolicy::Bounded(capacity) = self.policy {
            if self.quads.len() >= capacity {
                return Err(CompileError::capacity_exceeded(capacity));
            }
        }
        let index = self.quads.len();
        self.quads.push(quad);
        Ok(index)
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Maximum number of instructions, `None` when unbounded
    pub fn capacity(&self) -> Option<usize> {
        match self.policy {
            CapacityPolicy::Bounded(capacity) => Some(capacity),
            CapacityPolicy::Unbounded => None,
        }
    }

    /// Instructions that can still be emitted, `None` when unbounded
    pub fn remaining(&self) -> Option<usize> {
        self.capacity()
            .map(|capacity| capacity.saturating_sub(self.quads.len()))
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Quad> {
        self.quads.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quad> {
        self.quads.iter()
    }

    /// Drop every instruction, keeping the policy
    pub fn clear(&mut self) {
        self.quads.clear();
    }

    pub fn write_report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Print the instruction report to stdout
    pub fn print(&self) -> CompileResult<()> {
        let stdout = io::stdout();
        self.write_report(&mut stdout.lock())?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CodeStore {
    type Item = &'a Quad;
    type IntoIter = std::slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for CodeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Intermediate Code:")?;
        for quad in &self.quads {
            writeln!(f, "{quad}")?;
        }
        Ok(())
    }
}
