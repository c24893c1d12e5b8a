//! Shared helpers used across day solvers

pub mod grid;
pub mod memo;
pub mod num;
pub mod parsing;
pub mod set;
pub mod union_find;

use advent_solver::ParseError;
use std::str::FromStr;
use tracing::debug;

/// Read an optional environment override, falling back to `default` when the
/// variable is unset.
///
/// A value that is present but does not parse is an error rather than being
/// ignored.
pub fn env_override<T>(name: &str, default: T) -> Result<T, ParseError>
where
    T: FromStr + std::fmt::Debug,
{
    match std::env::var(name) {
        Ok(raw) => {
            let value = raw.trim().parse().map_err(|_| {
                ParseError::invalid(format!("environment override {name}={raw:?} is not valid"))
            })?;
            debug!(name, ?value, "using environment override");
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_default_and_value() {
        assert_eq!(env_override("ADVENT_TEST_UNSET_OVERRIDE", 7u32), Ok(7));

        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("ADVENT_TEST_SET_OVERRIDE", " 12 ") };
        assert_eq!(env_override("ADVENT_TEST_SET_OVERRIDE", 7u32), Ok(12));
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("ADVENT_TEST_BAD_OVERRIDE", "lots") };
        let err = env_override("ADVENT_TEST_BAD_OVERRIDE", 7u32).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(ref msg) if msg.contains("lots")));
    }
}
