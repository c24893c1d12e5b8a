use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::MemoProblem;

/// Lazily evaluated memoization over a [`MemoProblem`].
///
/// Values are computed on first request, after their dependencies, and
/// cloned out of the backend on every later request.
pub struct Memo<I, V, B, P>
where
    B: Backend<I, V>,
    P: MemoProblem<I, V>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<fn(&I) -> V>,
}

impl<I, V, B, P> Memo<I, V, B, P>
where
    I: Clone,
    V: Clone,
    B: Backend<I, V>,
    P: MemoProblem<I, V>,
{
    pub fn new(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computing it and its dependencies if needed.
    pub fn get(&self, index: &I) -> V {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        // No borrow is held while dependencies recurse.
        let dep_values: Vec<V> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        let value = self.problem.compute(index, dep_values);

        self.backend.borrow_mut().insert(index.clone(), value.clone());
        value
    }

    /// Number of indices computed so far.
    pub fn computed(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}
