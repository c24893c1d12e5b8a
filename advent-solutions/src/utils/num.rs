//! Small integer helpers for cycle and period arithmetic

use num::{Integer, Signed};

/// Absolute value of a signed integer.
///
/// The signed minimum has no positive counterpart; `abs(i64::MIN)` overflows.
pub fn abs<T: Signed>(a: T) -> T {
    a.abs()
}

/// Greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, 0)` is 0. Signed minimum values are handled as long as the
/// result itself fits, so only `gcd(MIN, 0)` and `gcd(MIN, MIN)` overflow.
pub fn gcd<T: Integer + Copy>(a: T, b: T) -> T {
    a.gcd(&b)
}

/// Least common multiple of `|a|` and `|b|`, or 0 if either is 0.
///
/// Callers must keep the result within `T`; an overflowing product panics.
pub fn lcm<T: Integer + Copy>(a: T, b: T) -> T {
    a.lcm(&b)
}

/// Least common multiple of a whole sequence.
///
/// An empty slice yields 0 and a single element is returned unchanged.
///
/// ```
/// use advent_solutions::utils::num::lcm_seq;
///
/// assert_eq!(lcm_seq::<i64>(&[]), 0);
/// assert_eq!(lcm_seq(&[-7i64]), -7);
/// assert_eq!(lcm_seq(&[4i64, 6, 10]), 60);
/// ```
pub fn lcm_seq<T: Integer + Copy>(nums: &[T]) -> T {
    match nums {
        [] => T::zero(),
        [single] => *single,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, &n| lcm(acc, n)),
    }
}

pub fn sum<T: Integer + Copy>(nums: impl IntoIterator<Item = T>) -> T {
    nums.into_iter().fold(T::zero(), |acc, n| acc + n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(gcd(0i64, 0), 0);
        assert_eq!(gcd(-12i64, 18), 6);
        assert_eq!(gcd(17u64, 5), 1);
        assert_eq!(lcm(-4i64, 6), 12);
        assert_eq!(lcm(0i64, 6), 0);
        assert_eq!(abs(i32::MIN + 1), i32::MAX);
        assert_eq!(abs(-5i64), 5);
        assert_eq!(gcd(i64::MIN, 6), 2);
        assert_eq!(gcd(-1i64, i64::MIN), 1);
        assert_eq!(gcd(i32::MIN, 1 << 20), 1 << 20);
        assert_eq!(sum([1i64, -2, 3]), 2);
        assert_eq!(sum(Vec::<u8>::new()), 0);
    }

    proptest! {
        #[test]
        fn prop_gcd_symmetric(a in -1_000_000i64..1_000_000, b in -1_000_000i64..1_000_000) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        #[test]
        fn prop_gcd_with_zero_is_abs(a in -1_000_000i64..1_000_000) {
            prop_assert_eq!(gcd(a, 0), a.abs());
            prop_assert_eq!(gcd(0, a), a.abs());
        }

        #[test]
        fn prop_gcd_divides_both(a in 1i64..1_000_000, b in 1i64..1_000_000) {
            let g = gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn prop_lcm_seq_single_and_pair(a in -100_000i64..100_000, b in -100_000i64..100_000) {
            prop_assume!(a != 0 && b != 0);
            prop_assert_eq!(lcm_seq(&[a]), a);
            prop_assert_eq!(lcm_seq(&[a, b]), (a * b).abs() / gcd(a, b));
        }

        #[test]
        fn prop_lcm_seq_divisible_by_each(nums in prop::collection::vec(1i64..50, 2..6)) {
            let l = lcm_seq(&nums);
            prop_assert!(nums.iter().all(|n| l % n == 0));
        }
    }
}
