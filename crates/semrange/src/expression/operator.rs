//! Operator types for primitives and range constraints

use std::fmt;

use crate::SemverError;

/// The three comparisons a primitive can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=)
    Equal,
    /// Greater than (>)
    GreaterThan,
    /// Less than (<)
    LessThan,
}

impl Operator {
    /// Parse a primitive operator. `""` and `"="` both mean equality.
    pub fn from_str(s: &str) -> Result<Self, SemverError> {
        match s {
            "" | "=" => Ok(Operator::Equal),
            ">" => Ok(Operator::GreaterThan),
            "<" => Ok(Operator::LessThan),
            _ => Err(SemverError::InvalidPrimitiveOperator(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
        }
    }

    /// The symbol a primitive renders with. Negation selects the inverted
    /// symbol, and plain equality renders as nothing at all.
    pub fn symbol(&self, negate: bool) -> &'static str {
        match (self, negate) {
            (Operator::Equal, false) => "",
            (Operator::Equal, true) => "!=",
            (Operator::GreaterThan, false) => ">",
            (Operator::GreaterThan, true) => "<=",
            (Operator::LessThan, false) => "<",
            (Operator::LessThan, true) => ">=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operators accepted in front of a simple range constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperator {
    /// Caret (^)
    Caret,
    /// Tilde (~)
    Tilde,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Equal (= or no operator)
    Equal,
    /// Not equal (!= or <>)
    NotEqual,
}

impl RangeOperator {
    /// Parse the operator part of a simple constraint
    pub fn from_symbol(s: &str) -> Result<Self, SemverError> {
        match s {
            "^" => Ok(RangeOperator::Caret),
            "~" => Ok(RangeOperator::Tilde),
            ">" => Ok(RangeOperator::GreaterThan),
            ">=" => Ok(RangeOperator::GreaterThanOrEqual),
            "<" => Ok(RangeOperator::LessThan),
            "<=" => Ok(RangeOperator::LessThanOrEqual),
            "" | "=" => Ok(RangeOperator::Equal),
            "!=" | "<>" => Ok(RangeOperator::NotEqual),
            _ => Err(SemverError::UnknownOperator(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOperator::Caret => "^",
            RangeOperator::Tilde => "~",
            RangeOperator::GreaterThan => ">",
            RangeOperator::GreaterThanOrEqual => ">=",
            RangeOperator::LessThan => "<",
            RangeOperator::LessThanOrEqual => "<=",
            RangeOperator::Equal => "=",
            RangeOperator::NotEqual => "!=",
        }
    }

    /// Get all supported operator symbols
    pub fn supported_operators() -> &'static [&'static str] {
        &["^", "~", ">", ">=", "<", "<=", "", "=", "!=", "<>"]
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
