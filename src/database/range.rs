use regex::Regex;
use thiserror::Error;

/// Errors related to row selector parsing.
#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("Rows must look like \"1-2\", \"5\" or \"1-2, 5\"; got \"{0}\"")]
    FormatError(String),
}

/// A closed interval of 0-based row indices, `first <= last`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RowRange {
    /// First row (0-based, inclusive)
    pub first: usize,
    /// Last row (0-based, inclusive)
    pub last: usize,
}

impl RowRange {
    /// Creates a range, swapping the bounds if they are reversed.
    pub fn new(first: usize, last: usize) -> Self {
        RowRange {
            first: first.min(last),
            last: first.max(last),
        }
    }

    pub fn contains(&self, row: usize) -> bool {
        self.first <= row && row <= self.last
    }
}

/// The set of rows selected as header rows. Ranges may overlap or be out of order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowSelector {
    ranges: Vec<RowRange>,
}

impl RowSelector {
    pub fn new(ranges: Vec<RowRange>) -> Self {
        RowSelector { ranges }
    }

    pub fn ranges(&self) -> &[RowRange] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns true if any range contains the row.
    pub fn contains(&self, row: usize) -> bool {
        self.ranges.iter().any(|range| range.contains(row))
    }

    /// Largest `last` bound across all ranges.
    pub fn max_last(&self) -> Option<usize> {
        self.ranges.iter().map(|range| range.last).max()
    }
}

impl TryFrom<&str> for RowSelector {
    type Error = RangeError;

    /// Parses a row selector such as "1-2, 5" (1-based rows) into 0-based ranges.
    /// Empty input selects nothing.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let separator = Regex::new(r"\s*,\s*").expect("Hardcode regex pattern");
        let pattern = Regex::new(r"^([1-9][0-9]*)(?:-([1-9][0-9]*))?$").expect("Hardcode regex pattern");
        let mut ranges = Vec::new();
        for token in separator.split(value.trim()) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let error = || RangeError::FormatError(token.to_owned());
            let captures = pattern.captures(token).ok_or_else(error)?;
            let first = captures
                .get(1)
                .and_then(|matcher| matcher.as_str().parse::<usize>().ok())
                .ok_or_else(error)?;
            let last = match captures.get(2) {
                Some(matcher) => matcher.as_str().parse::<usize>().map_err(|_| error())?,
                None => first,
            };
            ranges.push(RowRange::new(first - 1, last - 1));
        }
        Ok(RowSelector { ranges })
    }
}

/// Parses a user-supplied row selector. See [`RowSelector::try_from`].
pub fn parse_ranges(text: &str) -> Result<RowSelector, RangeError> {
    let selector = RowSelector::try_from(text)?;
    tracing::debug!(input = text, ranges = ?selector.ranges, "parsed row selector");
    Ok(selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ranges(pairs: &[(usize, usize)]) -> RowSelector {
        RowSelector::new(pairs.iter().map(|(first, last)| RowRange::new(*first, *last)).collect())
    }

    #[rstest]
    #[case("5", &[(4, 4)])]
    #[case("1", &[(0, 0)])]
    #[case("1-3", &[(0, 2)])]
    #[case("1-2, 5", &[(0, 1), (4, 4)])]
    #[case(" 1 , 3 ", &[(0, 0), (2, 2)])]
    #[case("1,,2", &[(0, 0), (1, 1)])]
    #[case("3-1", &[(0, 2)])]
    #[case("2-2", &[(1, 1)])]
    #[case("10-12,1", &[(9, 11), (0, 0)])]
    fn parse_valid(#[case] input: &str, #[case] expected: &[(usize, usize)]) {
        assert_eq!(parse_ranges(input), Ok(ranges(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case(" , ")]
    fn parse_empty(#[case] input: &str) {
        let selector = parse_ranges(input).unwrap();
        assert!(selector.is_empty());
        assert_eq!(selector.max_last(), None);
    }

    #[rstest]
    #[case("hi", "hi")]
    #[case("0-1", "0-1")]
    #[case("0", "0")]
    #[case("1-0", "1-0")]
    #[case("01", "01")]
    #[case("1 - 3", "1 - 3")]
    #[case("1-", "1-")]
    #[case("-3", "-3")]
    #[case("1-2-3", "1-2-3")]
    #[case("1, x", "x")]
    #[case("99999999999999999999999", "99999999999999999999999")]
    #[case("١", "١")]
    #[case("1١", "1١")]
    #[case("2-٣", "2-٣")]
    fn parse_invalid(#[case] input: &str, #[case] token: &str) {
        assert_eq!(parse_ranges(input), Err(RangeError::FormatError(token.to_owned())));
    }

    #[test]
    fn range_error_message() {
        assert_eq!(
            RangeError::FormatError("hi".to_owned()).to_string(),
            r#"Rows must look like "1-2", "5" or "1-2, 5"; got "hi""#
        );
    }

    #[test]
    fn selector_contains() {
        let selector = ranges(&[(2, 3), (0, 0)]);
        assert!(selector.contains(0));
        assert!(!selector.contains(1));
        assert!(selector.contains(2));
        assert!(selector.contains(3));
        assert!(!selector.contains(4));
        assert_eq!(selector.max_last(), Some(3));
    }
}
