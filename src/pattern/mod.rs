//! Dot pattern generation
//!
//! Gmail ignores dots in the local-part, so every way of placing dots into
//! the gaps of a username reaches the same inbox. A username of length L has
//! L-1 gaps and therefore `2^(L-1) - 1` non-identity patterns.

mod generator;

pub use generator::PatternGenerator;

/// Largest gap count whose full index space fits in a `u64`.
///
/// Longer usernames still enumerate in the same ascending order; their index
/// space is capped at `u64::MAX`, which only affects the leading gaps.
pub const MAX_INDEXED_GAPS: usize = 63;

/// Generate up to `requested_count` dot variants of `username`.
///
/// The result is deterministic, duplicate-free and ordered by ascending
/// pattern index. The dotless username itself is never included.
pub fn generate_variants(username: &str, requested_count: usize) -> Vec<String> {
    PatternGenerator::new(username).generate_patterns(requested_count)
}

/// Number of gaps between the characters of `username`.
pub fn gap_count(username: &str) -> usize {
    username.chars().count().saturating_sub(1)
}

/// Number of non-identity dot patterns for `username`, saturating at `u64::MAX`.
pub fn total_patterns(username: &str) -> u64 {
    let gaps = gap_count(username);
    if gaps > MAX_INDEXED_GAPS {
        u64::MAX
    } else {
        (1_u64 << gaps) - 1
    }
}
