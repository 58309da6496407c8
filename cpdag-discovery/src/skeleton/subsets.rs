//! Fixed-size subsets in lexicographic order.

use cpdag_core::VarId;

/// Every `k`-subset of `pool`, in lexicographic order of positions.
///
/// With `pool` sorted ascending this is lexicographic order over variable
/// indices. Yields exactly one empty subset for `k == 0` and nothing when
/// `k > pool.len()`.
pub struct Combinations<'a> {
    pool: &'a [VarId],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(pool: &'a [VarId], k: usize) -> Self {
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            done: k > pool.len(),
        }
    }

    fn current(&self) -> Vec<VarId> {
        self.indices.iter().map(|&i| self.pool[i]).collect()
    }
}

impl Iterator for Combinations<'_> {
    type Item = Vec<VarId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current());
        }

        let n = self.pool.len();
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                return None;
            }
            i -= 1;
            if self.indices[i] < n - k + i {
                break;
            }
        }
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        Some(self.current())
    }
}

/// `n choose k`, saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u64 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) stays integral at every step.
        acc = match acc.checked_mul(n - i) {
            Some(v) => v / (i + 1),
            None => return u64::MAX,
        };
    }
    acc
}
