use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source. The first call to `next` returns 1.
///
/// Correct on its own under concurrent callers; `fetch_add` never hands out
/// the same value twice.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: AtomicU64::new(1) }
    }

    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
