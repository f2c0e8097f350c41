//! Semantic version parsing, ordering and range matching
//!
//! This crate parses Semantic Versioning 2.0 strings (with an optional loose
//! fallback), orders them by precedence and evaluates range expressions with
//! caret, tilde, wildcard and hyphen forms.
//!
//! ```
//! use semrange::{Range, Version};
//!
//! let range = Range::parse("^1.2.3 || 2.x").unwrap();
//! assert!(range.matches(&Version::parse("1.9.0").unwrap()));
//! assert!(!range.matches(&Version::parse("3.0.0").unwrap()));
//! assert_eq!(range.normalized_string(), ">=1.2.3 <2.0.0 || >=2.0.0 <3.0.0");
//! ```

pub mod collections;
pub mod expression;
pub mod segment;
mod comparator;
mod error;
mod range;
mod semver;
mod version;
mod version_parser;

pub use collections::{VersionList, VersionMap};
pub use comparator::Comparator;
pub use error::SemverError;
pub use expression::{Expression, Operator, Primitive, RangeOperator};
pub use range::Range;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{Compliance, ParsedVersion, VersionParser};
