//! The built-in dynamic programs.
//!
//! Each module solves one problem with the full strategy family and shares
//! no code with its siblings beyond the [`Memo`](crate::memo::Memo) cache
//! abstraction; the solvers are independent and may be used in isolation.
//!
//! - [`fibonacci`] : scalar recurrence over a single integer index.
//! - [`knapsack`]  : 0/1 subset selection with index reconstruction.
//! - [`lcs`]       : longest common subsequence with subsequence
//!   reconstruction and exhaustive enumeration.

pub mod fibonacci;
pub mod knapsack;
pub mod lcs;
