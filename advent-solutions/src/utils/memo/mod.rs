//! Memoization cache for recursions over a directed acyclic graph.
//!
//! A [`MemoProblem`] names, for each index, the indices it depends on and how
//! to combine their values. [`Memo`] resolves dependencies on demand and
//! computes every index at most once.
//!
//! # Backends
//!
//! - [`VecBackend`]: dense `usize` indices, grows as needed
//! - [`HashBackend`]: any `Hash + Eq` index
//!
//! # Cycles
//!
//! There is no cycle detection. A dependency cycle recurses until the stack
//! overflows, so callers must only feed DAGs.
//!
//! # Example
//!
//! ```rust
//! use advent_solutions::utils::memo::{Memo, MemoProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl MemoProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let memo = Memo::new(VecBackend::new(), Fibonacci);
//! assert_eq!(memo.get(&50), 12_586_269_025);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashBackend, VecBackend};
pub use cache::Memo;
pub use problem::{ClosureProblem, MemoProblem};
