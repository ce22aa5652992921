//! Quadruple instruction definitions

use std::fmt;

/// Operator of a plain assignment `result = arg1`
pub const ASSIGN: &str = "=";

/// A three-address instruction `result = arg1 op arg2`
///
/// Operands are names or literals as the caller spelled them. An empty
/// `arg2` means the operand is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quad {
    pub op: String,
    pub arg1: String,
    pub arg2: String,
    pub result: String,
}

impl Quad {
    pub fn new(
        op: impl Into<String>,
        arg1: impl Into<String>,
        arg2: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            op: op.into(),
            arg1: arg1.into(),
            arg2: arg2.into(),
            result: result.into(),
        }
    }

    /// result = src
    pub fn copy(src: impl Into<String>, result: impl Into<String>) -> Self {
        Self::new(ASSIGN, src, String::new(), result)
    }

    /// Plain assignment with no second operand
    pub fn is_copy(&self) -> bool {
        self.op == ASSIGN && self.arg2.is_empty()
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_copy() {
            write!(f, "{} = {}", self.result, self.arg1)
        } else {
            write!(f, "{} = {} {} {}", self.result, self.arg1, self.op, self.arg2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_form() {
        assert_eq!(Quad::new("+", "x", "y", "t1").to_string(), "t1 = x + y");
        assert_eq!(Quad::new("<=", "a", "10", "t2").to_string(), "t2 = a <= 10");
    }

    #[test]
    fn test_assignment_form() {
        let quad = Quad::new("=", "x", "", "t1");
        assert!(quad.is_copy());
        assert_eq!(quad.to_string(), "t1 = x");
        assert_eq!(Quad::copy("5", "a").to_string(), "a = 5");
    }

    #[test]
    fn test_assign_with_second_operand_is_not_copy() {
        let quad = Quad::new("=", "x", "y", "t1");
        assert!(!quad.is_copy());
        assert_eq!(quad.to_string(), "t1 = x = y");
    }
}
