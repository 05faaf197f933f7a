//! Gmail Dot Forge - dot-variant Gmail address generation
//!
//! Gmail ignores dots in the local-part of an address, so `j.ohn@gmail.com`
//! and `jo.hn@gmail.com` both reach `john@gmail.com`. This crate enumerates
//! those variants deterministically.

pub mod address;
pub mod error;
pub mod export;
pub mod pattern;
pub mod prefs;
pub mod types;

// Re-export commonly used types
pub use error::{DotForgeError, Result};
pub use types::{AppConfig, GenerationReport, GenerationRequest, Theme, MAX_VARIATIONS, MIN_VARIATIONS};

// Re-export main functionality
pub use address::AddressValidator;
pub use pattern::{generate_variants, PatternGenerator};
pub use prefs::PreferenceStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
