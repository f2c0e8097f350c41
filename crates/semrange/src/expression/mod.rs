//! Range expressions and their building blocks

mod generator;
mod operator;
mod parser;
mod primitive;

pub use generator::{expand, generate, PartialVersion};
pub use operator::{Operator, RangeOperator};
pub use parser::RangeParser;
pub use primitive::Primitive;

use std::fmt;

use crate::Version;

/// Trait for everything a version can be matched against
pub trait Expression: fmt::Debug + fmt::Display + Send + Sync {
    /// Check if `version` satisfies this expression
    fn matches(&self, version: &Version) -> bool;

    /// Canonical rendering, which parses back into an equivalent expression
    fn normalized_string(&self) -> String;
}
