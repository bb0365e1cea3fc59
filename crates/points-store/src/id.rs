//! # Receipt ID Generation
//!
//! Identifiers are the decimal text of a process-local counter: `"1"`, `"2"`,
//! `"3"`, ... Clients must treat them as opaque.

use std::sync::atomic::{AtomicU64, Ordering};

/// Mints unique receipt identifiers.
///
/// Safe to share between tasks; every call to [`IdGenerator::next_id`]
/// returns a value no other call has returned.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first ID is `"1"`.
    pub fn new() -> Self {
        IdGenerator::default()
    }

    /// Returns the next identifier.
    pub fn next_id(&self) -> String {
        // Relaxed: only uniqueness is promised
        let id = self.last.fetch_add(1, Ordering::Relaxed) + 1;
        id.to_string()
    }
}
