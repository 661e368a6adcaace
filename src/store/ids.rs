//! Identifier generation
//!
//! Produces 24-character lowercase hex ids laid out like a document-database
//! ObjectId: 4 bytes of seconds, 5 bytes of per-process discriminator and a
//! 3 byte counter.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Length of every generated id.
pub const ID_LENGTH: usize = 24;

const DISCRIMINATOR_MASK: u64 = 0xFF_FFFF_FFFF;
const COUNTER_MASK: u32 = 0xFF_FFFF;

// == Id Generator ==
#[derive(Debug)]
pub struct IdGenerator {
    discriminator: u64,
    counter: u32,
}

impl IdGenerator {
    /// Creates a generator seeded from the process id and wall clock.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let pid = std::process::id() as u64;

        Self {
            discriminator: (nanos ^ (pid << 20)) & DISCRIMINATOR_MASK,
            counter: (nanos as u32) & COUNTER_MASK,
        }
    }

    /// Returns the next id for a document created at `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        self.counter = self.counter.wrapping_add(1) & COUNTER_MASK;
        let secs = now.timestamp().clamp(0, u32::MAX as i64) as u32;
        format!(
            "{:08x}{:010x}{:06x}",
            secs, self.discriminator, self.counter
        )
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalizes a client-supplied id, returning None when it is malformed.
pub fn normalize_id(id: &str) -> Option<String> {
    let id = id.trim();
    if id.len() == ID_LENGTH && id.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(id.to_ascii_lowercase())
    } else {
        None
    }
}
