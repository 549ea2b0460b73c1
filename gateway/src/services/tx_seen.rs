//! TTL-bounded duplicate-transaction detection.
//!
//! A FIFO queue mirrors the insertion order of the hash map so expiry
//! is amortised O(1) per insertion: every call consumes the expired
//! prefix of the queue before deciding.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

struct Inner {
    seen: HashMap<String, Instant>,
    order: VecDeque<(String, Instant)>,
}

/// Remembers recently submitted transaction hashes.
pub(crate) struct TxSeenCache {
    ttl: Duration,
    inner: Mutex<Inner>,
}

impl TxSeenCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Mutex::new(Inner {
                seen: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    /// Records `hash` at `now`. Returns `false` when the hash was
    /// already seen within the TTL (a replay), `true` otherwise.
    pub(crate) fn remember(&self, hash: &str, now: Instant) -> bool {
        let key = hash.trim().trim_start_matches("0x").to_lowercase();
        let mut inner = self.inner.lock();

        while inner
            .order
            .front()
            .is_some_and(|(_, seen_at)| now.saturating_duration_since(*seen_at) >= self.ttl)
        {
            if let Some((expired, seen_at)) = inner.order.pop_front() {
                // only drop the map entry if it still belongs to this
                // queue slot; the hash may have been re-inserted since
                if inner.seen.get(&expired).copied() == Some(seen_at) {
                    inner.seen.remove(&expired);
                }
            }
        }

        if inner.seen.contains_key(&key) {
            return false;
        }
        inner.seen.insert(key.clone(), now);
        inner.order.push_back((key, now));
        true
    }

    #[cfg(test)]
    fn live_entries(&self) -> usize {
        self.inner.lock().seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(900);

    #[test]
    fn replays_within_ttl_are_rejected() {
        let cache = TxSeenCache::new(TTL);
        let start = Instant::now();
        assert!(cache.remember("abc123", start));
        assert!(!cache.remember("abc123", start + Duration::from_secs(1)));
        assert!(!cache.remember("abc123", start + TTL - Duration::from_secs(1)));
    }

    #[test]
    fn hashes_are_accepted_again_after_the_ttl() {
        let cache = TxSeenCache::new(TTL);
        let start = Instant::now();
        assert!(cache.remember("abc123", start));
        assert!(cache.remember("abc123", start + TTL));
    }

    #[test]
    fn prefix_and_case_do_not_split_entries() {
        let cache = TxSeenCache::new(TTL);
        let start = Instant::now();
        assert!(cache.remember("0xABCDEF", start));
        assert!(!cache.remember("abcdef", start));
    }

    #[test]
    fn expiry_consumes_the_queue_prefix() {
        let cache = TxSeenCache::new(TTL);
        let start = Instant::now();
        for i in 0..10 {
            assert!(cache.remember(&format!("{i:02x}"), start + Duration::from_secs(i)));
        }
        assert_eq!(cache.live_entries(), 10);

        // five of the ten have aged out by now
        assert!(cache.remember("fresh", start + TTL + Duration::from_secs(4)));
        assert_eq!(cache.live_entries(), 6);
    }

    #[test]
    fn reinsert_after_expiry_keeps_map_and_queue_aligned() {
        let cache = TxSeenCache::new(TTL);
        let start = Instant::now();
        assert!(cache.remember("aa", start));
        // expired, re-inserted with a fresh timestamp
        assert!(cache.remember("aa", start + TTL));
        // the original queue slot expires later; the fresh entry must
        // survive that cleanup
        assert!(!cache.remember("aa", start + TTL + Duration::from_secs(1)));
        assert_eq!(cache.live_entries(), 1);
    }
}
