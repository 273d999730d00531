//! Terminal output styling.
//!
//! ## stdout vs stderr principle
//!
//! - **stdout**: Primary data output (resolved keys, `list` rows, JSON)
//! - **stderr**: Status messages (errors, hints, warnings)
//!
//! This separation allows `export KEY=$(bbm-keys resolve openai_key)` without
//! status messages leaking into the captured value.

mod constants;

// Re-exports from anstream (auto-detecting output)
pub use anstream::{eprintln, println};

pub use constants::*;
