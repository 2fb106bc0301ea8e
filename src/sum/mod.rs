//! The tail-summing core.
//!
//! A "tail" is everything after a sequence's first element. These are pure functions over in-memory
//! slices; they never fail, and identical inputs always produce identical outputs.

/// Sums `values` left to right, starting from zero.
///
/// Addition is wrapping: on `i64` overflow the sum wraps around rather than panicking, matching the
/// fixed-width wraparound of a native 64-bit integer.
pub fn sum(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &value| acc.wrapping_add(value))
}

/// Sums everything after the first element of `values`.
///
/// A sequence with fewer than two elements has an empty tail, which sums to `0`.
pub fn tail_sum(values: &[i64]) -> i64 {
    match values.split_first() {
        None => 0,
        Some((_, tail)) => sum(tail),
    }
}

/// Computes [`tail_sum`] for each group, in the groups' order.
///
/// The output always has exactly one element per input group, so `output[i]` is the tail sum of
/// `groups[i]`; zero groups produce an empty `Vec`.
///
/// ## Example
///
/// ```
/// let sums = tailsum::sum::sum_all_tails([vec![], vec![5], vec![1, 2, 3, 4], vec![10, -3, -3, -3]]);
/// assert_eq!(sums, [0, 0, 9, -9]);
/// ```
pub fn sum_all_tails<G, S>(groups: G) -> Vec<i64>
where
    G: IntoIterator<Item = S>,
    S: AsRef<[i64]>,
{
    groups.into_iter().map(|group| tail_sum(group.as_ref())).collect()
}
