//! Integer-sequence extraction from delimited text

use advent_solver::ParseError;
use std::str::FromStr;

/// Separators used by [`parse_ints`].
pub const DEFAULT_SEPARATORS: &[char] = &[' ', ',', ':', '-'];

/// Parse every integer in `line`, splitting on runs of space, comma, colon
/// and hyphen.
///
/// The hyphen is a separator here, so a minus sign never reaches the number
/// parser and negative values cannot be expressed. Use [`parse_ints_with`]
/// with a separator set that excludes `-` when the input carries signs.
///
/// ```
/// use advent_solutions::utils::parsing::parse_ints;
///
/// assert_eq!(parse_ints::<u32>("41 48, 83-86").unwrap(), vec![41, 48, 83, 86]);
/// assert!(parse_ints::<u32>("Card 1").is_err());
/// assert_eq!(parse_ints::<u64>("3-5, 10:14").unwrap(), vec![3, 5, 10, 14]);
/// ```
pub fn parse_ints<T: FromStr>(line: &str) -> Result<Vec<T>, ParseError> {
    parse_ints_with(line, DEFAULT_SEPARATORS)
}

/// Parse every integer in `line`, splitting on runs of the given separators.
///
/// Fails with [`ParseError::InvalidNumber`] naming the first bad token.
pub fn parse_ints_with<T: FromStr>(line: &str, separators: &[char]) -> Result<Vec<T>, ParseError> {
    line.split(|c: char| separators.contains(&c))
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().map_err(|_| ParseError::number(token)))
        .collect()
}

/// Lines of `input` with trailing blank lines removed.
pub fn lines_nonempty(input: &str) -> impl Iterator<Item = &str> {
    input.trim_end().lines()
}
