//! Expansion of one range operator applied to a possibly partial version
//! into the primitives that encode it.

use super::{Operator, Primitive, RangeOperator};
use crate::segment::{NumbersSegment, OrderedSegment};
use crate::version_parser::CORE_LENGTH;
use crate::{SemverError, Version};

/// A version as written in a range, where trailing groups may be missing
/// or wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialVersion {
    /// The text the partial version was read from
    pub text: String,
    /// Lowest version the partial form covers, zero-padded
    pub lower: Version,
    /// How many numeric groups were spelled out before a wildcard or the end
    pub groups: usize,
    /// Exclusive upper bound of the wildcard positions, when there are any
    pub ceiling: Option<Version>,
}

impl PartialVersion {
    /// Read the version part of a simple constraint, e.g. `1.2`, `1.x` or
    /// `1.2.3`, with an optional prerelease qualifier.
    ///
    /// Returns `None` when the version starts with a wildcard, which stands
    /// for any version at all.
    pub fn parse(text: &str, prerelease: Option<&str>) -> Result<Option<Self>, SemverError> {
        let normalized: String = text
            .chars()
            .map(|c| if matches!(c, 'x' | 'X') { '*' } else { c })
            .collect();

        let core = match normalized.find('*') {
            Some(0) => return Ok(None),
            Some(i) => normalized[..i].strip_suffix('.').unwrap_or(&normalized[..i]),
            None => normalized.as_str(),
        };
        if core.is_empty() {
            return Ok(None);
        }

        let numbers = NumbersSegment::parse(core)?;
        let groups = numbers.len();
        let wildcard = core.len() < normalized.len();

        let mut lower_text = core.to_string();
        if let Some(prerelease) = prerelease.filter(|p| !p.is_empty()) {
            lower_text.push('-');
            lower_text.push_str(prerelease);
        }
        let lower = Version::parse(&lower_text)?;

        let ceiling = if wildcard || groups < CORE_LENGTH {
            Some(lower.increment(groups - 1)?)
        } else {
            None
        };

        Ok(Some(PartialVersion {
            text: text.to_string(),
            lower,
            groups,
            ceiling,
        }))
    }
}

/// Expand `operator` applied to the version text of a simple constraint.
pub fn expand(operator: RangeOperator, text: &str, prerelease: Option<&str>) -> Result<Vec<Primitive>, SemverError> {
    match PartialVersion::parse(text, prerelease)? {
        Some(partial) => generate(operator, &partial),
        None => Ok(vec![Primitive::wildcard()]),
    }
}

/// The one or two primitives that encode `operator` for `partial`.
pub fn generate(operator: RangeOperator, partial: &PartialVersion) -> Result<Vec<Primitive>, SemverError> {
    let bound = &partial.lower;
    let ceiling = partial.ceiling.as_ref();

    let primitives = match operator {
        RangeOperator::GreaterThan => vec![Primitive::new(
            ceiling.unwrap_or(bound).clone(),
            Operator::GreaterThan,
            false,
        )],
        RangeOperator::GreaterThanOrEqual => vec![Primitive::new(bound.clone(), Operator::LessThan, true)],
        RangeOperator::LessThan => vec![Primitive::new(bound.clone(), Operator::LessThan, false)],
        RangeOperator::LessThanOrEqual => vec![Primitive::new(
            ceiling.unwrap_or(bound).clone(),
            Operator::GreaterThan,
            true,
        )],
        RangeOperator::Equal => match ceiling {
            Some(ceiling) => between(bound, ceiling),
            None => vec![Primitive::new(bound.clone(), Operator::Equal, false)],
        },
        RangeOperator::NotEqual => {
            if ceiling.is_some() {
                return Err(SemverError::InequalityRequiresExactVersion(partial.text.clone()));
            }
            vec![Primitive::new(bound.clone(), Operator::Equal, true)]
        }
        RangeOperator::Caret => {
            let next = bound.next_significant()?;
            between(bound, greatest(&next, ceiling))
        }
        RangeOperator::Tilde => {
            let index = if partial.groups == 1 { 0 } else { 1 };
            let next = bound.increment(index)?;
            between(bound, greatest(&next, ceiling))
        }
    };

    Ok(primitives)
}

/// `[lower, upper)` as "not less than lower" and "less than upper"
fn between(lower: &Version, upper: &Version) -> Vec<Primitive> {
    vec![
        Primitive::new(lower.clone(), Operator::LessThan, true),
        Primitive::new(upper.clone(), Operator::LessThan, false),
    ]
}

fn greatest<'a>(version: &'a Version, other: Option<&'a Version>) -> &'a Version {
    Version::greatest(std::iter::once(version).chain(other)).unwrap_or(version)
}
