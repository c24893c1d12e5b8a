//! Disjoint sets that also track how many sets remain

use itertools::Itertools;
use petgraph::unionfind::UnionFind;

/// `petgraph`'s union-find over `0..n`, plus a running set count.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    sets: UnionFind<usize>,
    len: usize,
    components: usize,
}

impl DisjointSets {
    /// `n` singleton sets `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            sets: UnionFind::new(n),
            len: n,
            components: n,
        }
    }

    /// Merge the sets holding `a` and `b`, returning whether they were apart.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let merged = self.sets.union(a, b);
        if merged {
            self.components -= 1;
        }
        merged
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.sets.equiv(a, b)
    }

    /// Number of disjoint sets.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Sizes of every set, one entry per set, in no particular order.
    pub fn set_sizes(&self) -> Vec<usize> {
        (0..self.len)
            .map(|x| self.sets.find(x))
            .counts()
            .into_values()
            .collect()
    }
}
