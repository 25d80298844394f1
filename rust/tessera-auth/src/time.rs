use std::time::{SystemTime, UNIX_EPOCH};

/// Seconds since the Unix epoch, the resolution token lifetimes use.
pub fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
