//! Hash set with add/has/delete vocabulary, used for visited-state tracking
//! and small membership tests.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Unordered set of `T`.
///
/// Iteration order is unspecified; callers must not depend on it.
///
/// ```
/// use advent_solutions::set;
///
/// let mut seen = set![1, 2, 3];
/// assert!(!seen.add(2));
/// assert!(seen.add(4));
/// assert!(seen.has(&4));
/// assert_eq!(seen.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Set<T> {
    inner: FxHashSet<T>,
}

impl<T: Hash + Eq> Set<T> {
    pub fn new() -> Self {
        Self {
            inner: FxHashSet::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Insert `elem`, returning whether the set grew.
    pub fn add(&mut self, elem: T) -> bool {
        self.inner.insert(elem)
    }

    /// Insert every element, returning whether any of them was new.
    pub fn add_all(&mut self, elems: impl IntoIterator<Item = T>) -> bool {
        elems
            .into_iter()
            .fold(false, |grew, elem| self.inner.insert(elem) | grew)
    }

    /// Remove `elem`, returning whether it was present.
    pub fn delete(&mut self, elem: &T) -> bool {
        self.inner.remove(elem)
    }

    pub fn delete_all<'a>(&mut self, elems: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for elem in elems {
            self.inner.remove(elem);
        }
    }

    pub fn has(&self, elem: &T) -> bool {
        self.inner.contains(elem)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }

    /// Number of elements present in both sets.
    pub fn count_common(&self, other: &Set<T>) -> usize {
        self.inner.intersection(&other.inner).count()
    }

    /// Elements as a vector, in unspecified order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }
}

impl<T: Hash + Eq> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::collections::hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Build a [`Set`] from a list of initial elements.
#[macro_export]
macro_rules! set {
    () => {
        $crate::utils::set::Set::new()
    };
    ($($elem:expr),+ $(,)?) => {{
        let mut set = $crate::utils::set::Set::new();
        $(set.add($elem);)+
        set
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_delete_and_to_vec() {
        let mut set = set!["a", "b", "c"];
        assert!(set.delete(&"b"));
        assert!(!set.delete(&"b"));

        let mut items = set.to_vec();
        items.sort();
        assert_eq!(items, vec!["a", "c"]);
    }

    #[test]
    fn test_add_all_reports_growth() {
        let mut set: Set<u8> = Set::new();
        assert!(set.add_all([1, 2, 2]));
        assert!(!set.add_all([1, 2]));
        set.delete_all(&[1, 9]);
        assert_eq!(set, [2].into_iter().collect());
    }

    #[test]
    fn test_count_common() {
        let a: Set<i32> = (1..=5).collect();
        let b: Set<i32> = (4..=8).collect();
        assert_eq!(a.count_common(&b), 2);
        assert_eq!(b.count_common(&Set::new()), 0);
    }

    proptest! {
        /// Membership follows add and delete for any element sequence.
        #[test]
        fn prop_add_has_delete(elems in prop::collection::vec(any::<i16>(), 0..64), probe in any::<i16>()) {
            let mut set: Set<i16> = elems.iter().copied().collect();

            prop_assert!(elems.iter().all(|e| set.has(e)));

            let before = set.len();
            let grew = set.add(probe);
            prop_assert!(set.has(&probe));
            prop_assert_eq!(set.len(), before + usize::from(grew));

            let len = set.len();
            prop_assert!(!set.add(probe));
            prop_assert_eq!(set.len(), len);

            prop_assert!(set.delete(&probe));
            prop_assert!(!set.has(&probe));
        }
    }
}
