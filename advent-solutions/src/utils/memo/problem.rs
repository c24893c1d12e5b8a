use std::marker::PhantomData;

/// Dependency structure and combination step of a memoized recursion.
pub trait MemoProblem<I, V> {
    /// Indices whose values `index` needs; empty for base cases.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Value of `index` given the values of [`deps`](Self::deps), in order.
    fn compute(&self, index: &I, deps: Vec<V>) -> V;
}

/// Adapts a pair of closures to [`MemoProblem`].
///
/// ```rust
/// use advent_solutions::utils::memo::{ClosureProblem, HashBackend, Memo};
///
/// let steps = ClosureProblem::new(
///     |n: &u64| if *n <= 1 { vec![] } else if n % 2 == 0 { vec![n / 2] } else { vec![3 * n + 1] },
///     |_n: &u64, deps: Vec<u32>| deps.first().map_or(0, |d| d + 1),
/// );
/// let memo = Memo::new(HashBackend::new(), steps);
/// assert_eq!(memo.get(&27), 111);
/// ```
pub struct ClosureProblem<I, V, D, C> {
    deps_fn: D,
    compute_fn: C,
    _phantom: PhantomData<fn(&I) -> V>,
}

impl<I, V, D, C> ClosureProblem<I, V, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<V>) -> V,
{
    pub fn new(deps_fn: D, compute_fn: C) -> Self {
        Self {
            deps_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, V, D, C> MemoProblem<I, V> for ClosureProblem<I, V, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<V>) -> V,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.deps_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<V>) -> V {
        (self.compute_fn)(index, deps)
    }
}
