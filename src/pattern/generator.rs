//! Dot pattern generator

use std::collections::HashSet;

use super::total_patterns;

/// Upper bound on up-front allocation for a single generation call
const MAX_PREALLOCATED: usize = 4096;

/// Generator for the dot patterns of one username.
///
/// Pattern index `i` (1-based) selects gaps by its binary digits, read most
/// significant first: the first digit is the gap after the first character.
/// Index 0 would be the username itself and is never produced.
pub struct PatternGenerator {
    username: String,
    chars: Vec<char>,
    current_index: u64,
    total: u64,
}

impl PatternGenerator {
    /// Create a new generator for `username`
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            chars: username.chars().collect(),
            current_index: 0,
            total: total_patterns(username),
        }
    }

    /// The username being varied
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Number of gaps a dot may be placed in
    pub fn gap_count(&self) -> usize {
        self.chars.len().saturating_sub(1)
    }

    /// Get total number of non-identity patterns
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of patterns already yielded by the iterator
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Build the pattern for a 1-based index
    pub fn pattern_at(&self, index: u64) -> Option<String> {
        if index == 0 || index > self.total {
            return None;
        }

        let gaps = self.gap_count();
        let mut pattern = String::with_capacity(self.username.len() + gaps);

        for (j, &c) in self.chars.iter().enumerate() {
            pattern.push(c);
            if j < gaps && gap_selected(index, gaps - 1 - j) {
                pattern.push('.');
            }
        }

        Some(pattern)
    }

    /// Produce up to `requested_count` patterns in ascending index order.
    ///
    /// Independent of the iterator position, so repeated calls with the same
    /// count return the same sequence.
    pub fn generate_patterns(&self, requested_count: usize) -> Vec<String> {
        let available = usize::try_from(self.total).unwrap_or(usize::MAX);
        let mut patterns = Vec::with_capacity(requested_count.min(available).min(MAX_PREALLOCATED));
        let mut seen = HashSet::new();

        for index in 1..=self.total {
            if patterns.len() >= requested_count {
                break;
            }
            let Some(pattern) = self.pattern_at(index) else {
                break;
            };
            if seen.insert(pattern.clone()) {
                patterns.push(pattern);
            }
        }

        tracing::debug!(
            length = self.chars.len(),
            gaps = self.gap_count(),
            requested = requested_count,
            produced = patterns.len(),
            "Generated dot patterns"
        );

        patterns
    }

    /// Generate next batch of patterns
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        self.by_ref().take(count).collect()
    }

    /// Check if generator is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.total
    }

    /// Remaining count
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.current_index)
    }
}

/// Whether the gap `shift` places from the right is selected by `index`
fn gap_selected(index: u64, shift: usize) -> bool {
    u32::try_from(shift)
        .ok()
        .and_then(|s| index.checked_shr(s))
        .is_some_and(|v| v & 1 == 1)
}

impl Iterator for PatternGenerator {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_exhausted() {
            return None;
        }
        let pattern = self.pattern_at(self.current_index + 1)?;
        self.current_index += 1;
        Some(pattern)
    }
}
