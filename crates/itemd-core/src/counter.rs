use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide count of inbound HTTP requests.
///
/// Independent of the item store; never reset.
#[derive(Debug, Default)]
pub struct RequestCounter {
    total: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self { total: AtomicU64::new(0) }
    }

    /// Add one and return the new total.
    pub fn increment(&self) -> u64 {
        self.total.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn read(&self) -> u64 {
        self.total.load(Ordering::Relaxed)
    }
}
