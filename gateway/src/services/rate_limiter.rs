//! Per-source sliding-window rate limiting.
//!
//! The table is bounded: at most [`MAX_ENTRIES`] sources are tracked at
//! once, and entries idle for longer than [`STALE_WINDOWS`] windows are
//! swept opportunistically. A source that keeps hammering the gateway
//! refreshes its `last_seen` on every denied request, so the eviction
//! policy removes idle sources first and an active offender stays
//! blocked until its window expires.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Hard ceiling on tracked sources.
pub(crate) const MAX_ENTRIES: usize = 512;
/// Entries idle for this many windows are swept.
const STALE_WINDOWS: u32 = 10;

struct Entry {
    count: u32,
    window_start: Instant,
    last_seen: Instant,
}

struct Inner {
    entries: HashMap<String, Entry>,
    last_sweep: Instant,
}

/// The per-source request limiter.
pub(crate) struct RateLimiter {
    window: Duration,
    max_per_window: u32,
    max_entries: usize,
    inner: Mutex<Inner>,
}

impl RateLimiter {
    pub(crate) fn new(window: Duration, max_per_window: u32) -> Self {
        Self::with_capacity(window, max_per_window, MAX_ENTRIES)
    }

    pub(crate) fn with_capacity(window: Duration, max_per_window: u32, max_entries: usize) -> Self {
        Self {
            window,
            max_per_window,
            max_entries,
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    /// Decides whether a request from `source` may proceed at `now`.
    ///
    /// Never allocates except when a new source is first inserted.
    pub(crate) fn allow(&self, source: &str, now: Instant) -> bool {
        let trimmed = source.trim();
        let key = if trimmed.is_empty() { "unknown" } else { trimmed };

        let mut inner = self.inner.lock();

        let sweep_due = now.saturating_duration_since(inner.last_sweep) >= self.window;
        if sweep_due || inner.entries.len() >= self.max_entries {
            let stale = self.window * STALE_WINDOWS;
            inner
                .entries
                .retain(|_, entry| now.saturating_duration_since(entry.last_seen) < stale);
            inner.last_sweep = now;
        }

        if !inner.entries.contains_key(key) {
            if inner.entries.len() >= self.max_entries {
                let victim = inner
                    .entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_seen)
                    .map(|(source, _)| source.clone());
                if let Some(victim) = victim {
                    inner.entries.remove(&victim);
                }
            }
            inner.entries.insert(
                key.to_owned(),
                Entry {
                    count: 0,
                    window_start: now,
                    last_seen: now,
                },
            );
        }

        let entry = inner.entries.get_mut(key).expect("entry ensured above");
        if now.saturating_duration_since(entry.window_start) >= self.window {
            entry.window_start = now;
            entry.count = 0;
        }
        entry.last_seen = now;
        if entry.count >= self.max_per_window {
            return false;
        }
        entry.count += 1;
        true
    }

    #[cfg(test)]
    fn tracked_sources(&self) -> usize {
        self.inner.lock().entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const WINDOW: Duration = Duration::from_secs(60);

    #[test]
    fn never_exceeds_max_per_window() {
        let limiter = RateLimiter::new(WINDOW, 7);
        let start = Instant::now();
        let mut rng = rand::thread_rng();

        for _ in 0..20 {
            let mut allowed = 0;
            let mut at = start;
            // random call pattern inside a single window
            for _ in 0..rng.gen_range(8..40) {
                at += Duration::from_millis(rng.gen_range(0..1_000));
                if at.saturating_duration_since(start) >= WINDOW {
                    break;
                }
                if limiter.allow("10.0.0.9", at) {
                    allowed += 1;
                }
            }
            assert!(allowed <= 7, "allowed {allowed} requests in one window");
        }
    }

    #[test]
    fn window_expiry_resets_the_budget() {
        let limiter = RateLimiter::new(WINDOW, 2);
        let start = Instant::now();
        assert!(limiter.allow("s", start));
        assert!(limiter.allow("s", start));
        assert!(!limiter.allow("s", start + Duration::from_secs(1)));
        assert!(limiter.allow("s", start + WINDOW));
    }

    #[test]
    fn table_never_exceeds_capacity_and_evicts_the_oldest() {
        let limiter = RateLimiter::with_capacity(WINDOW, 5, 4);
        let start = Instant::now();
        for i in 0..4 {
            assert!(limiter.allow(&format!("10.0.0.{i}"), start + Duration::from_secs(i)));
        }
        assert_eq!(limiter.tracked_sources(), 4);

        // 10.0.0.0 has the oldest last_seen and must be the victim
        assert!(limiter.allow("10.0.0.9", start + Duration::from_secs(10)));
        assert_eq!(limiter.tracked_sources(), 4);

        // the evicted source starts a fresh entry, the survivor kept its count
        assert!(limiter.allow("10.0.0.1", start + Duration::from_secs(11)));
    }

    #[test]
    fn sources_are_normalised_before_lookup() {
        let limiter = RateLimiter::new(WINDOW, 2);
        let start = Instant::now();
        assert!(limiter.allow("  1.2.3.4  ", start));
        assert!(limiter.allow("1.2.3.4", start));
        assert!(!limiter.allow(" 1.2.3.4", start));
        assert_eq!(limiter.tracked_sources(), 1);
    }

    #[test]
    fn empty_sources_share_the_unknown_bucket() {
        let limiter = RateLimiter::new(WINDOW, 1);
        let start = Instant::now();
        assert!(limiter.allow("", start));
        assert!(!limiter.allow("   ", start));
    }

    #[test]
    fn capped_source_stays_blocked_under_churn() {
        let limiter = RateLimiter::with_capacity(WINDOW, 3, 8);
        let start = Instant::now();
        for _ in 0..3 {
            assert!(limiter.allow("attacker", start));
        }
        assert!(!limiter.allow("attacker", start));

        // hundreds of one-shot sources churn through the table; the
        // attacker keeps hammering and must stay blocked because every
        // denial refreshes its recency
        let mut at = start;
        for i in 0..600 {
            at += Duration::from_millis(50);
            limiter.allow(&format!("churn-{i}"), at);
            assert!(
                !limiter.allow("attacker", at + Duration::from_millis(1)),
                "attacker slipped through at churn step {i}"
            );
            assert!(limiter.tracked_sources() <= 8);
        }

        // the budget comes back only once the window has expired
        assert!(limiter.allow("attacker", start + WINDOW + Duration::from_secs(1)));
    }

    #[test]
    fn idle_entries_are_swept() {
        let limiter = RateLimiter::with_capacity(WINDOW, 5, 64);
        let start = Instant::now();
        for i in 0..10 {
            limiter.allow(&format!("idle-{i}"), start);
        }
        assert_eq!(limiter.tracked_sources(), 10);

        // past the stale threshold a single request triggers the sweep
        let later = start + WINDOW * 11;
        limiter.allow("fresh", later);
        assert_eq!(limiter.tracked_sources(), 1);
    }
}
