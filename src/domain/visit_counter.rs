//! Process-wide counter of served static-asset requests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic hit counter shared by every request handler.
///
/// Only whole-value operations are exposed: a single `fetch_add` for
/// increments and a single `store` for resets, so concurrent increments are
/// never lost. All operations touch one atomic location, which gives every
/// reader a value from one linear history of increments and resets.
///
/// The value lives in memory only and starts at zero on every process start.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one visit.
    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Sets the count back to exactly zero.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }

    /// Returns the current count.
    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(VisitCounter::new().read(), 0);
    }

    #[test]
    fn test_increment() {
        let counter = VisitCounter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.read(), 2);
    }

    #[test]
    fn test_reset_then_read_is_zero() {
        let counter = VisitCounter::new();
        for _ in 0..17 {
            counter.increment();
        }

        counter.reset();

        assert_eq!(counter.read(), 0);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        const THREADS: u64 = 16;
        const PER_THREAD: u64 = 10_000;

        let counter = Arc::new(VisitCounter::new());
        counter.increment();

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..PER_THREAD {
                        counter.increment();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.read(), 1 + THREADS * PER_THREAD);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_from_tasks() {
        let counter = Arc::new(VisitCounter::new());

        let tasks: Vec<_> = (0..500)
            .map(|_| {
                let counter = Arc::clone(&counter);
                tokio::spawn(async move { counter.increment() })
            })
            .collect();

        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(counter.read(), 500);
    }
}
