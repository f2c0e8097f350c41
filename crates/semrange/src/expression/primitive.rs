//! A single comparison against one version

use std::fmt;

use super::{Expression, Operator};
use crate::{SemverError, Version};

/// One atomic test: `version <operator> bound`, optionally negated.
///
/// Everything a range can express is built from these three operators and
/// the negation flag, e.g. `>=1.2.3` is "not less than 1.2.3".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Primitive {
    version: Version,
    operator: Operator,
    negate: bool,
}

impl Primitive {
    pub fn new(version: Version, operator: Operator, negate: bool) -> Self {
        Primitive {
            version,
            operator,
            negate,
        }
    }

    /// Build a primitive from a comparison symbol, including the negated
    /// forms `>=`, `<=`, `!=` and `<>`.
    pub fn from_symbol(version: Version, symbol: &str) -> Result<Self, SemverError> {
        let (operator, negate) = match symbol {
            ">=" => (Operator::LessThan, true),
            "<=" => (Operator::GreaterThan, true),
            "!=" | "<>" => (Operator::Equal, true),
            other => (Operator::from_str(other)?, false),
        };
        Ok(Self::new(version, operator, negate))
    }

    /// Matches every version: `>=0.0.0`
    pub fn wildcard() -> Self {
        Self::new(Version::new(0, 0, 0), Operator::LessThan, true)
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    /// Rendering of the comparison, e.g. `>=1.2.3-beta`. Build metadata of
    /// the bound is left out.
    pub fn normalized_string(&self) -> String {
        let mut out = String::from(self.operator.symbol(self.negate));
        out.push_str(&self.version.version_number());
        if self.version.is_prerelease() {
            out.push('-');
            out.push_str(&self.version.prerelease_string());
        }
        out
    }
}

impl Expression for Primitive {
    fn matches(&self, version: &Version) -> bool {
        let result = match self.operator {
            Operator::Equal => version.equals(&self.version),
            Operator::GreaterThan => version.greater_than(&self.version),
            Operator::LessThan => version.less_than(&self.version),
        };
        result != self.negate
    }

    fn normalized_string(&self) -> String {
        Primitive::normalized_string(self)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_matches() {
        let gt = Primitive::new(v("1.2.3"), Operator::GreaterThan, false);
        assert!(gt.matches(&v("1.2.4")));
        assert!(!gt.matches(&v("1.2.3")));

        let not_gt = Primitive::new(v("1.2.3"), Operator::GreaterThan, true);
        assert!(not_gt.matches(&v("1.2.3")));
        assert!(!not_gt.matches(&v("1.2.4")));

        let eq = Primitive::new(v("1.2.3"), Operator::Equal, false);
        assert!(eq.matches(&v("1.2.3+build")));
        assert!(!eq.matches(&v("1.2.3-rc")));

        let lt = Primitive::new(v("2.0.0"), Operator::LessThan, false);
        assert!(lt.matches(&v("2.0.0-alpha")));
        assert!(!lt.matches(&v("2.0.0")));
    }

    #[test]
    fn test_from_symbol() {
        let p = Primitive::from_symbol(v("1.0.0"), ">=").unwrap();
        assert_eq!(p.operator(), Operator::LessThan);
        assert!(p.is_negated());
        assert_eq!(p.to_string(), ">=1.0.0");

        let p = Primitive::from_symbol(v("1.0.0"), "<>").unwrap();
        assert_eq!(p.to_string(), "!=1.0.0");

        let p = Primitive::from_symbol(v("1.0.0"), "=").unwrap();
        assert_eq!(p.to_string(), "1.0.0");

        assert_eq!(
            Primitive::from_symbol(v("1.0.0"), "~").unwrap_err(),
            SemverError::InvalidPrimitiveOperator("~".to_string())
        );
    }

    #[test]
    fn test_rendering_drops_build() {
        let p = Primitive::new(v("1.2.3-rc.1+linux"), Operator::GreaterThan, true);
        assert_eq!(p.normalized_string(), "<=1.2.3-rc.1");
    }

    #[test]
    fn test_wildcard() {
        let p = Primitive::wildcard();
        assert_eq!(p.to_string(), ">=0.0.0");
        assert!(p.matches(&v("0.0.0")));
        assert!(p.matches(&v("99.0.0")));
        assert!(p.matches(&v("0.0.1-alpha")));
    }
}
