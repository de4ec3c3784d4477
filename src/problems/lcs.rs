//! Longest common subsequence of two byte sequences.
//!
//! A subsequence keeps relative order but need not be contiguous. The
//! recurrence over prefix lengths `(i, j)`:
//!
//! ```text
//! lcs(0, j) = lcs(i, 0) = 0
//! lcs(i, j) = lcs(i-1, j-1) + 1                 if a[i-1] == b[j-1]
//!           = max(lcs(i-1, j), lcs(i, j-1))     otherwise
//! ```
//!
//! [`Lcs::solve_tabulated`] keeps the full table and walks it back to
//! recover one optimal subsequence; [`Lcs::all_subsequences`] walks the
//! same table branching on ties to recover every distinct optimum, under an
//! explicit result bound. The space-optimized strategy keeps two rows and
//! is value-only.
//!
//! Symbols are bytes; callers working with text pass `str::as_bytes`.

use std::collections::BTreeSet;

use crate::memo::{HashMemo, Memo};

/// An LCS instance: borrowed views of the two sequences.
#[derive(Debug, Clone, Copy)]
pub struct Lcs<'a> {
    a: &'a [u8],
    b: &'a [u8],
}

impl<'a> Lcs<'a> {
    /// Create an instance over two byte sequences. Either may be empty.
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        Self { a, b }
    }

    fn m(&self) -> usize {
        self.a.len()
    }

    fn n(&self) -> usize {
        self.b.len()
    }

    /// Direct recursion, no caching. `O(2^(m+n))` time.
    ///
    /// The executable reference; the caller bounds the input lengths (there
    /// is no internal guard).
    pub fn len_naive(&self) -> u32 {
        self.naive(self.m(), self.n())
    }

    fn naive(&self, i: usize, j: usize) -> u32 {
        if i == 0 || j == 0 {
            return 0;
        }
        if self.a[i - 1] == self.b[j - 1] {
            return self.naive(i - 1, j - 1) + 1;
        }
        self.naive(i - 1, j).max(self.naive(i, j - 1))
    }

    /// Top-down recursion with a fresh memo keyed `(i, j)`. `O(m * n)` time
    /// and space.
    pub fn len_memoized(&self) -> u32 {
        self.len_memoized_with(&mut HashMemo::new())
    }

    /// Top-down recursion with a caller-supplied memo.
    ///
    /// The memo is keyed by prefix lengths, not by instance: share it only
    /// between calls solving this same pair of sequences.
    pub fn len_memoized_with(&self, memo: &mut impl Memo<(usize, usize), u32>) -> u32 {
        self.memoized(self.m(), self.n(), memo)
    }

    fn memoized(&self, i: usize, j: usize, memo: &mut impl Memo<(usize, usize), u32>) -> u32 {
        if i == 0 || j == 0 {
            return 0;
        }
        if let Some(len) = memo.get(&(i, j)) {
            return len;
        }
        let len = if self.a[i - 1] == self.b[j - 1] {
            self.memoized(i - 1, j - 1, memo) + 1
        } else {
            self.memoized(i - 1, j, memo)
                .max(self.memoized(i, j - 1, memo))
        };
        memo.insert((i, j), len);
        len
    }

    /// Bottom-up fill of the full `(m+1) x (n+1)` table, then a single
    /// backtracking walk. `O(m * n)` time and space.
    ///
    /// Returns the optimal length and one subsequence achieving it. The
    /// walk starts at `(m, n)`: on a symbol match it records the symbol and
    /// moves diagonally; otherwise it moves to whichever neighbour holds
    /// the larger value. Ties step to the previous row (decrement `i`).
    /// That tie-break is part of the contract: it fixes which of several
    /// equal-length subsequences this strategy returns.
    pub fn solve_tabulated(&self) -> (u32, Vec<u8>) {
        let table = self.fill_table();
        let mut subsequence = Vec::new();
        let mut i = self.m();
        let mut j = self.n();
        while i > 0 && j > 0 {
            if self.a[i - 1] == self.b[j - 1] {
                subsequence.push(self.a[i - 1]);
                i -= 1;
                j -= 1;
            } else if table[i - 1][j] >= table[i][j - 1] {
                i -= 1;
            } else {
                j -= 1;
            }
        }
        subsequence.reverse();
        (table[self.m()][self.n()], subsequence)
    }

    /// Two alternating rows of length `min(m, n) + 1`. `O(m * n)` time,
    /// `O(min(m, n))` space. Length only; reconstruction needs the rows
    /// this strategy throws away.
    pub fn len_compressed(&self) -> u32 {
        let (short, long) = if self.m() <= self.n() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        let width = short.len();
        let mut prev = vec![0u32; width + 1];
        let mut curr = vec![0u32; width + 1];
        for &symbol in long {
            for j in 1..=width {
                curr[j] = if symbol == short[j - 1] {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(curr[j - 1])
                };
            }
            std::mem::swap(&mut prev, &mut curr);
        }
        prev[width]
    }

    /// Every distinct longest common subsequence, at most `max_results`.
    ///
    /// Walks the full table like [`solve_tabulated`](Self::solve_tabulated)
    /// but branches wherever both neighbours tie the optimum, so each
    /// branch yields one optimal subsequence. Branches that coincide are
    /// deduplicated as they are found, by inserting into the result set
    /// during traversal rather than after it.
    ///
    /// The number of tied paths is exponential in the worst case, which is
    /// why the bound is not optional: traversal stops as soon as the set
    /// holds `max_results` subsequences. With empty input (or no common
    /// symbol) the set holds exactly the empty subsequence.
    pub fn all_subsequences(&self, max_results: usize) -> BTreeSet<Vec<u8>> {
        let mut found = BTreeSet::new();
        if max_results == 0 {
            return found;
        }

        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("lcs_enumerate", m = self.m(), n = self.n(), max_results);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let table = self.fill_table();
        let mut stem = Vec::new();
        self.branch(&table, self.m(), self.n(), &mut stem, &mut found, max_results);
        found
    }

    /// Collect optimal subsequences reachable from cell `(i, j)`.
    ///
    /// `stem` holds the symbols picked up so far, in reverse order (the
    /// walk runs from the end of both sequences toward the front).
    fn branch(
        &self,
        table: &[Vec<u32>],
        i: usize,
        j: usize,
        stem: &mut Vec<u8>,
        found: &mut BTreeSet<Vec<u8>>,
        max_results: usize,
    ) {
        if found.len() >= max_results {
            return;
        }
        if i == 0 || j == 0 {
            let mut subsequence = stem.clone();
            subsequence.reverse();
            found.insert(subsequence);
            return;
        }
        if self.a[i - 1] == self.b[j - 1] {
            stem.push(self.a[i - 1]);
            self.branch(table, i - 1, j - 1, stem, found, max_results);
            stem.pop();
        } else {
            if table[i - 1][j] == table[i][j] {
                self.branch(table, i - 1, j, stem, found, max_results);
            }
            if table[i][j - 1] == table[i][j] {
                self.branch(table, i, j - 1, stem, found, max_results);
            }
        }
    }

    fn fill_table(&self) -> Vec<Vec<u32>> {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("lcs_tabulate", m = self.m(), n = self.n());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = vec![vec![0u32; self.n() + 1]; self.m() + 1];
        for i in 1..=self.m() {
            for j in 1..=self.n() {
                table[i][j] = if self.a[i - 1] == self.b[j - 1] {
                    table[i - 1][j - 1] + 1
                } else {
                    table[i - 1][j].max(table[i][j - 1])
                };
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_pair() {
        let lcs = Lcs::new(b"ABCDGH", b"AEDFHR");
        assert_eq!(lcs.len_naive(), 3);
        assert_eq!(lcs.len_memoized(), 3);
        assert_eq!(lcs.len_compressed(), 3);
        assert_eq!(lcs.solve_tabulated(), (3, b"ADH".to_vec()));
    }

    #[test]
    fn second_textbook_pair() {
        let lcs = Lcs::new(b"AGGTAB", b"GXTXAYB");
        assert_eq!(lcs.solve_tabulated(), (4, b"GTAB".to_vec()));
        assert_eq!(lcs.len_compressed(), 4);
    }

    #[test]
    fn empty_sequences() {
        for lcs in [
            Lcs::new(b"", b"XYZ"),
            Lcs::new(b"XYZ", b""),
            Lcs::new(b"", b""),
        ] {
            assert_eq!(lcs.len_naive(), 0);
            assert_eq!(lcs.len_memoized(), 0);
            assert_eq!(lcs.len_compressed(), 0);
            assert_eq!(lcs.solve_tabulated(), (0, Vec::new()));
        }
    }

    #[test]
    fn disjoint_alphabets() {
        let lcs = Lcs::new(b"AAAA", b"BBBB");
        assert_eq!(lcs.solve_tabulated(), (0, Vec::new()));
        assert_eq!(lcs.all_subsequences(16), BTreeSet::from([Vec::new()]));
    }

    #[test]
    fn tie_break_steps_to_previous_row() {
        // Both "A" and "B" are optimal; the fixed tie-break picks "A".
        let lcs = Lcs::new(b"AB", b"BA");
        assert_eq!(lcs.solve_tabulated(), (1, b"A".to_vec()));
    }

    #[test]
    fn enumerates_all_optima() {
        let lcs = Lcs::new(b"ABCBDAB", b"BDCABA");
        let all = lcs.all_subsequences(64);
        assert!(all.contains(b"BCBA".as_slice()));
        assert!(all.contains(b"BDAB".as_slice()));
        assert!(all.iter().all(|s| s.len() == 4), "non-optimal entry: {all:?}");
        // The single reconstruction is one of the enumerated optima.
        let (_, one) = lcs.solve_tabulated();
        assert!(all.contains(&one));
    }

    #[test]
    fn enumeration_respects_the_bound() {
        let lcs = Lcs::new(b"ABCBDAB", b"BDCABA");
        assert_eq!(lcs.all_subsequences(2).len(), 2);
        assert!(lcs.all_subsequences(0).is_empty());
    }

    #[test]
    fn identical_sequences() {
        let lcs = Lcs::new(b"HELLO", b"HELLO");
        assert_eq!(lcs.solve_tabulated(), (5, b"HELLO".to_vec()));
        assert_eq!(lcs.all_subsequences(8), BTreeSet::from([b"HELLO".to_vec()]));
    }

    #[test]
    fn memo_reuse_on_same_instance() {
        let lcs = Lcs::new(b"PROGRAMMING", b"DYNAMIC");
        let mut memo = HashMemo::new();
        let first = lcs.len_memoized_with(&mut memo);
        let second = lcs.len_memoized_with(&mut memo);
        assert_eq!(first, second);
        assert_eq!(first, lcs.len_compressed());
    }
}
