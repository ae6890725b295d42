// tests/support/mocks/behaviour.rs
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Per-key delay and failure injection for keyed lookups, plus counters for
/// how many lookups started, finished and ran at once.
#[derive(Default)]
pub struct LookupBehaviour {
    delays: Mutex<HashMap<i64, Duration>>,
    failures: Mutex<HashSet<i64>>,
    calls: AtomicUsize,
    completed: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl LookupBehaviour {
    pub fn delay(&self, key: i64, delay: Duration) {
        self.delays.lock().unwrap().insert(key, delay);
    }

    pub fn delay_all(&self, keys: impl IntoIterator<Item = i64>, delay: Duration) {
        let mut delays = self.delays.lock().unwrap();
        for key in keys {
            delays.insert(key, delay);
        }
    }

    pub fn fail(&self, key: i64) {
        self.failures.lock().unwrap().insert(key);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Lookups that ran to the end of their delay.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub async fn enter(&self, key: i64) -> DomainResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delays.lock().unwrap().get(&key).copied();
        let fails = self.failures.lock().unwrap().contains(&key);

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.completed.fetch_add(1, Ordering::SeqCst);

        if fails {
            return Err(DomainError::Persistence(format!("injected failure for {key}")));
        }
        Ok(())
    }
}
