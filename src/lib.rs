//! tailsum sums the "tail" of each input integer sequence: everything after the sequence's first
//! element. Each group of integers produces exactly one sum, in the groups' order.
//!
//! The core lives in [`sum`] and is a pure function over in-memory slices:
//!
//! ```
//! let sums = tailsum::sum::sum_all_tails([vec![1, 2, 3, 4], vec![10, -3, -3, -3]]);
//! assert_eq!(sums, [9, -9]);
//! ```
//!
//! Around it, [`groups`] parses text or JSON input into groups, [`output`] renders the sums as
//! plain text or JSON, and [`run`] ties the three together behind the same options the CLI takes.

pub mod groups;
pub mod output;
pub mod run;
pub mod sum;

mod util;
