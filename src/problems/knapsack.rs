//! 0/1 knapsack: subset selection under a weight budget.
//!
//! Given `n` items with non-negative weights and values and a capacity `W`,
//! pick a subset maximizing total value with total weight at most `W`; each
//! item is taken whole or not at all.
//!
//! Recurrence over `(i, w)` = (items considered, remaining capacity):
//!
//! ```text
//! best(0, w) = 0
//! best(i, 0) = 0
//! best(i, w) = best(i-1, w)                       if weight[i-1] > w
//!            = max(best(i-1, w),
//!                  value[i-1] + best(i-1, w - weight[i-1]))   otherwise
//! ```
//!
//! Only [`Knapsack::solve_tabulated`] recovers *which* items achieve the
//! optimum: it is the one strategy that keeps the full table the
//! backtracking walk needs. The space-optimized strategy discards the rows
//! as it goes and is deliberately a separate, value-only contract.

use crate::error::InstanceError;
use crate::memo::{HashMemo, Memo};

/// A 0/1 knapsack instance: parallel weight/value sequences and a capacity.
///
/// Construction validates that the sequences describe the same items;
/// strategies can then assume a well-formed instance.
#[derive(Debug, Clone)]
pub struct Knapsack {
    weights: Vec<usize>,
    values: Vec<u64>,
    capacity: usize,
}

/// Optimal value together with the items achieving it.
///
/// `items` holds the selected indices in increasing order, each in
/// `[0, n)` and at most once; their weights sum to at most the capacity and
/// their values sum to exactly `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Maximum achievable total value.
    pub value: u64,
    /// Indices of the items realizing that value.
    pub items: Vec<usize>,
}

impl Knapsack {
    /// Create an instance from parallel weight and value sequences.
    ///
    /// Fails with [`InstanceError::LengthMismatch`] when the sequences
    /// differ in length.
    pub fn new(
        weights: Vec<usize>,
        values: Vec<u64>,
        capacity: usize,
    ) -> Result<Self, InstanceError> {
        if weights.len() != values.len() {
            return Err(InstanceError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            weights,
            values,
            capacity,
        })
    }

    /// Number of items in the instance.
    pub fn num_items(&self) -> usize {
        self.weights.len()
    }

    /// Weight budget.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Direct recursion on the recurrence, no caching. `O(2^n)` time.
    ///
    /// Exists as the executable reference; the caller bounds `n` (there is
    /// no internal guard).
    pub fn value_naive(&self) -> u64 {
        self.naive(self.num_items(), self.capacity)
    }

    fn naive(&self, items: usize, remaining: usize) -> u64 {
        if items == 0 || remaining == 0 {
            return 0;
        }
        let weight = self.weights[items - 1];
        let exclude = self.naive(items - 1, remaining);
        if weight > remaining {
            return exclude;
        }
        let include = self.values[items - 1] + self.naive(items - 1, remaining - weight);
        exclude.max(include)
    }

    /// Top-down recursion with a fresh memo keyed `(items, remaining)`.
    /// `O(n * W)` time and space.
    pub fn value_memoized(&self) -> u64 {
        self.value_memoized_with(&mut HashMemo::new())
    }

    /// Top-down recursion with a caller-supplied memo.
    ///
    /// The memo is keyed by subproblem index, not by instance: share it only
    /// between calls solving this same instance.
    pub fn value_memoized_with(&self, memo: &mut impl Memo<(usize, usize), u64>) -> u64 {
        self.memoized(self.num_items(), self.capacity, memo)
    }

    fn memoized(
        &self,
        items: usize,
        remaining: usize,
        memo: &mut impl Memo<(usize, usize), u64>,
    ) -> u64 {
        if items == 0 || remaining == 0 {
            return 0;
        }
        if let Some(value) = memo.get(&(items, remaining)) {
            return value;
        }
        let weight = self.weights[items - 1];
        let exclude = self.memoized(items - 1, remaining, memo);
        let best = if weight > remaining {
            exclude
        } else {
            let include =
                self.values[items - 1] + self.memoized(items - 1, remaining - weight, memo);
            exclude.max(include)
        };
        memo.insert((items, remaining), best);
        best
    }

    /// Bottom-up fill of the full `(n+1) x (W+1)` table, then backtracking.
    /// `O(n * W)` time and space.
    ///
    /// The only strategy that reconstructs the selection: the walk starts at
    /// `table[n][W]` and moves up one row per item; a value differing from
    /// the row above means that item was taken, and the tracked capacity
    /// drops by its weight.
    pub fn solve_tabulated(&self) -> Selection {
        let n = self.num_items();
        let w_max = self.capacity;

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("knapsack_tabulate", items = n, capacity = w_max);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = vec![vec![0u64; w_max + 1]; n + 1];
        for i in 1..=n {
            let weight = self.weights[i - 1];
            let value = self.values[i - 1];
            for w in 1..=w_max {
                table[i][w] = if weight <= w {
                    table[i - 1][w].max(value + table[i - 1][w - weight])
                } else {
                    table[i - 1][w]
                };
            }
        }

        let mut items = Vec::new();
        let mut w = w_max;
        for i in (1..=n).rev() {
            if table[i][w] != table[i - 1][w] {
                items.push(i - 1);
                w -= self.weights[i - 1];
            }
        }
        items.reverse();

        Selection {
            value: table[n][w_max],
            items,
        }
    }

    /// Single-row fill, capacity scanned from `W` down to the item weight.
    /// `O(n * W)` time, `O(W)` space. Value only.
    ///
    /// The descending scan is load-bearing: within one item's pass, every
    /// cell must read `row[w - weight]` from the *previous* item's pass, or
    /// the item would be counted twice.
    pub fn value_compressed(&self) -> u64 {
        let mut row = vec![0u64; self.capacity + 1];
        for (weight, value) in self.weights.iter().copied().zip(self.values.iter().copied()) {
            if weight > self.capacity {
                continue;
            }
            // row[0] is the base case best(i, 0) = 0 and is never updated,
            // which keeps a weightless item from leaking value into it.
            for w in (weight.max(1)..=self.capacity).rev() {
                row[w] = row[w].max(value + row[w - weight]);
            }
        }
        row[self.capacity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Knapsack {
        Knapsack::new(vec![10, 20, 30], vec![60, 100, 120], 50).unwrap()
    }

    #[test]
    fn rejects_mismatched_sequences() {
        let err = Knapsack::new(vec![1, 2, 3], vec![10, 20], 5).unwrap_err();
        assert_eq!(
            err,
            InstanceError::LengthMismatch {
                weights: 3,
                values: 2
            }
        );
    }

    #[test]
    fn classic_example_value_and_items() {
        let selection = classic().solve_tabulated();
        assert_eq!(selection.value, 220);
        assert_eq!(selection.items, vec![1, 2]);
    }

    #[test]
    fn classic_example_all_strategies() {
        let problem = classic();
        assert_eq!(problem.value_naive(), 220);
        assert_eq!(problem.value_memoized(), 220);
        assert_eq!(problem.value_compressed(), 220);
    }

    #[test]
    fn jewelry_example() {
        let problem = Knapsack::new(vec![1, 3, 4, 5], vec![1, 4, 5, 7], 7).unwrap();
        assert_eq!(problem.value_naive(), 9);
        assert_eq!(problem.solve_tabulated().value, 9);
    }

    #[test]
    fn treasure_hunt_example() {
        let problem = Knapsack::new(vec![2, 3, 4, 5, 6], vec![3, 4, 5, 6, 7], 8).unwrap();
        let selection = problem.solve_tabulated();
        assert_eq!(selection.value, problem.value_naive());
        let weight: usize = selection.items.iter().map(|&i| 2 + i).sum();
        assert!(weight <= 8);
    }

    #[test]
    fn zero_capacity_selects_nothing() {
        let problem = Knapsack::new(vec![1, 2], vec![10, 20], 0).unwrap();
        assert_eq!(problem.value_naive(), 0);
        assert_eq!(problem.value_memoized(), 0);
        assert_eq!(problem.value_compressed(), 0);
        let selection = problem.solve_tabulated();
        assert_eq!(selection.value, 0);
        assert!(selection.items.is_empty());
    }

    #[test]
    fn no_items_is_worth_nothing() {
        let problem = Knapsack::new(vec![], vec![], 100).unwrap();
        assert_eq!(problem.value_naive(), 0);
        assert_eq!(problem.solve_tabulated(), Selection { value: 0, items: vec![] });
        assert_eq!(problem.value_compressed(), 0);
    }

    #[test]
    fn overweight_item_is_never_selected() {
        let problem = Knapsack::new(vec![100, 2], vec![1_000, 5], 10).unwrap();
        let selection = problem.solve_tabulated();
        assert_eq!(selection.value, 5);
        assert_eq!(selection.items, vec![1]);
    }

    #[test]
    fn memo_reuse_on_same_instance() {
        let problem = classic();
        let mut memo = HashMemo::new();
        let first = problem.value_memoized_with(&mut memo);
        let second = problem.value_memoized_with(&mut memo);
        assert_eq!(first, 220);
        assert_eq!(second, 220);
    }
}
