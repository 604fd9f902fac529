//! PendingTarget

use std::fmt;
use std::num::IntErrorKind;
use std::num::NonZeroUsize;
use std::str::FromStr;

use crate::error::InvalidTarget;

/// A validated request for "this many rows".
///
/// Parsed from free text. Leading whitespace and an optional `+` are skipped,
/// then the leading run of digits is read and anything after it ignored, so
/// `"15.0"` and `"15 rows"` both mean 15. Counts too large for `usize`
/// saturate; they can only mean "everything". Input without leading digits,
/// or whose digits are zero, is rejected.
///
/// # Example
///
/// ```
/// use artic_lib::selection::PendingTarget;
///
/// assert_eq!(PendingTarget::parse(" 15 ").unwrap().get(), 15);
/// assert_eq!(PendingTarget::parse("15abc").unwrap().get(), 15);
/// assert!(PendingTarget::parse("0").is_err());
/// assert!(PendingTarget::parse("-3").is_err());
/// assert!(PendingTarget::parse("ten").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTarget(NonZeroUsize);

impl PendingTarget {
    /// Creates a target from a count, returning `None` for zero.
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    /// Parses user input.
    pub fn parse(input: &str) -> Result<Self, InvalidTarget> {
        let rest = input.trim_start();
        let rest = rest.strip_prefix('+').unwrap_or(rest);
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        let count = match rest[..end].parse::<usize>() {
            Ok(count) => count,
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => usize::MAX,
            Err(_) => return Err(InvalidTarget::new(input)),
        };

        Self::new(count).ok_or_else(|| InvalidTarget::new(input))
    }

    /// Returns the requested count.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for PendingTarget {
    type Err = InvalidTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PendingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects() {
        for input in ["", "   ", "0", "000", "-1", "-0", "+", "abc", "0.9", ".5", "e3"] {
            let err = PendingTarget::parse(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_accepts() {
        assert_eq!(PendingTarget::parse("1").unwrap().get(), 1);
        assert_eq!(PendingTarget::parse("\t100\n").unwrap().get(), 100);
        assert_eq!("42".parse::<PendingTarget>().unwrap().get(), 42);
        assert_eq!(PendingTarget::parse("+7").unwrap().get(), 7);
    }

    #[test]
    fn test_reads_leading_digits() {
        assert_eq!(PendingTarget::parse("15abc").unwrap().get(), 15);
        assert_eq!(PendingTarget::parse("15.0").unwrap().get(), 15);
        assert_eq!(PendingTarget::parse("1.5").unwrap().get(), 1);
        assert_eq!(PendingTarget::parse("1e3").unwrap().get(), 1);
        assert_eq!(PendingTarget::parse("  20 rows").unwrap().get(), 20);
    }

    #[test]
    fn test_huge_count_saturates() {
        let target = PendingTarget::parse("99999999999999999999999").unwrap();
        assert_eq!(target.get(), usize::MAX);
    }
}
