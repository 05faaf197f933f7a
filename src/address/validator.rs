//! Gmail address validation

use crate::error::{DotForgeError, Result};
use crate::types::DEFAULT_DOMAIN;
use regex::Regex;
use std::collections::HashSet;

/// Address validator
pub struct AddressValidator {
    domains: HashSet<String>,
}

impl AddressValidator {
    /// Create a validator that accepts `gmail.com` only
    pub fn new() -> Self {
        Self {
            domains: std::iter::once(DEFAULT_DOMAIN.to_string()).collect(),
        }
    }

    /// Replace the accepted domains
    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.domains = domains
            .into_iter()
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        self
    }

    /// Validate an address, lower-casing it first
    pub fn validate(&self, address: &str) -> Result<ValidatedAddress> {
        let normalized = normalize(address);

        if normalized.is_empty() {
            return Err(DotForgeError::validation("Email address cannot be empty"));
        }

        let (username, domain) = normalized
            .split_once('@')
            .ok_or_else(|| DotForgeError::validation("Email address must contain '@'"))?;

        if domain.contains('@') {
            return Err(DotForgeError::validation("Email address must contain a single '@'"));
        }

        if username.is_empty() {
            return Err(DotForgeError::validation("Username cannot be empty"));
        }

        self.validate_characters(username)?;

        if !self.domains.contains(domain) {
            return Err(DotForgeError::validation(format!(
                "Domain '{}' is not a Gmail domain",
                domain
            )));
        }

        Ok(ValidatedAddress {
            original: address.to_string(),
            username: username.to_string(),
            domain: domain.to_string(),
        })
    }

    /// Validate local-part characters
    fn validate_characters(&self, username: &str) -> Result<()> {
        let valid_chars = Regex::new(r"^[a-z0-9]+$")
            .map_err(|e| DotForgeError::internal(e.to_string()))?;

        if !valid_chars.is_match(username) {
            return Err(DotForgeError::validation(
                "Username may only contain letters and digits",
            ));
        }

        Ok(())
    }

    /// Check if the address passes validation
    pub fn is_valid(&self, address: &str) -> bool {
        self.validate(address).is_ok()
    }
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Address that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAddress {
    pub original: String,
    pub username: String,
    pub domain: String,
}

impl ValidatedAddress {
    /// Normalized `username@domain`
    pub fn full_address(&self) -> String {
        format!("{}@{}", self.username, self.domain)
    }
}

/// Trim and lower-case an address
pub fn normalize(address: &str) -> String {
    address.trim().to_lowercase()
}
