//! Address handling around the pattern generator
//!
//! Validation happens before generation; composition and canonicalisation
//! turn generated patterns back into deliverable addresses.

pub mod validator;

pub use validator::{AddressValidator, ValidatedAddress};

use crate::types::MIN_VARIATIONS;

/// Clamp a raw count input to `[MIN_VARIATIONS, max]`.
///
/// Non-numeric input falls back to the minimum.
pub fn clamp_count(raw: &str, max: usize) -> usize {
    let max = max.max(MIN_VARIATIONS);
    match raw.trim().parse::<i64>() {
        Ok(n) if n < MIN_VARIATIONS as i64 => MIN_VARIATIONS,
        Ok(n) => usize::try_from(n).map_or(max, |n| n.min(max)),
        Err(_) => match raw.trim().parse::<u128>() {
            Ok(_) => max,
            Err(_) => MIN_VARIATIONS,
        },
    }
}

/// Append `@domain` to each pattern
pub fn compose(patterns: &[String], domain: &str) -> Vec<String> {
    patterns
        .iter()
        .map(|pattern| format!("{}@{}", pattern, domain))
        .collect()
}

/// Remove dots from the local-part, giving the address Gmail delivers to
pub fn canonical(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) => {
            let local: String = local.chars().filter(|&c| c != '.').collect();
            format!("{}@{}", local, domain)
        }
        None => address.chars().filter(|&c| c != '.').collect(),
    }
}
