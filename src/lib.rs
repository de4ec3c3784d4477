//! Classic dynamic programs with interchangeable solving strategies.
//!
//! This crate implements three textbook dynamic programs, each as a family
//! of strategies over the same recurrence:
//!
//! 1. A *naive* strategy: direct recursive expansion, exponential time.
//!    Kept as the executable statement of the recurrence and as the
//!    reference the cheaper strategies are tested against.
//! 2. A *memoized* strategy: the same recursion with a cache keyed by
//!    subproblem identity (top-down).
//! 3. A *tabulated* strategy: iterative table fill in dependency order
//!    (bottom-up). Where the full table is retained, this strategy also
//!    backtracks through it to reconstruct a witness achieving the optimum
//!    (the selected item set, or an actual common subsequence), not just
//!    the optimal value itself.
//! 4. A *space-optimized* strategy: same time bound, but keeping only the
//!    table rows the recurrence actually reads. Value only; reconstruction
//!    needs the rows this strategy discards.
//!
//! ## Built-in problems
//! - [`problems::fibonacci`] : scalar recurrence over a single index.
//! - [`problems::knapsack`]  : 0/1 subset selection under a weight budget,
//!   with recovery of the chosen item indices.
//! - [`problems::lcs`]       : longest common subsequence of two byte
//!   sequences, with recovery of one (or all) optimal subsequences.
//!
//! ## Quick start
//! ```
//! use classic_dp::problems::knapsack::Knapsack;
//!
//! let problem = Knapsack::new(vec![10, 20, 30], vec![60, 100, 120], 50)?;
//! let selection = problem.solve_tabulated();
//! assert_eq!(selection.value, 220);
//! assert_eq!(selection.items, vec![1, 2]);
//! # Ok::<(), classic_dp::InstanceError>(())
//! ```
//!
//! Every strategy is a pure function of its inputs: no shared state, no
//! I/O, no suspension. Strategies for the same instance may therefore be
//! run concurrently (e.g. to cross-check results) without synchronization.
//! The exponential strategies carry no internal size guard; bounding their
//! inputs is the caller's responsibility.

pub mod error;
pub mod memo;
pub mod problems;

pub use crate::error::InstanceError;
pub use crate::memo::{HashMemo, Memo};
