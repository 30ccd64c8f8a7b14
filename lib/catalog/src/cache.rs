//! Process-wide catalog cache with time-based expiry.
//!
//! Catalogs are immutable for their cache lifetime and rebuilt wholesale on
//! expiry; a stale-read window is acceptable and there is no invalidation
//! signaling between holders of the returned `Arc`s.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

/// Default time-to-live for cached catalogs.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

struct CacheSlot<T> {
    value: Arc<T>,
    loaded_at: Instant,
}

/// A lazily loaded, time-expiring cache around one catalog value.
///
/// The loader must itself be total - it degrades to an empty catalog and
/// reports the failure rather than erroring, so `get` always yields a value.
pub struct CachedCatalog<T> {
    slot: RwLock<Option<CacheSlot<T>>>,
    ttl: Duration,
    loader: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> CachedCatalog<T> {
    pub fn new(ttl: Duration, loader: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
            loader: Box::new(loader),
        }
    }

    pub fn with_default_ttl(loader: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self::new(DEFAULT_TTL, loader)
    }

    /// The cached value, reloading first if missing or expired.
    #[must_use]
    pub fn get(&self) -> Arc<T> {
        if let Some(slot) = self.slot.read().as_ref() {
            if slot.loaded_at.elapsed() < self.ttl {
                return Arc::clone(&slot.value);
            }
        }
        self.reload()
    }

    /// Rebuild the cached value now and reset its clock.
    pub fn reload(&self) -> Arc<T> {
        let value = Arc::new((self.loader)());
        *self.slot.write() = Some(CacheSlot {
            value: Arc::clone(&value),
            loaded_at: Instant::now(),
        });
        value
    }

    /// Drop the cached value; the next `get` reloads.
    pub fn invalidate(&self) {
        *self.slot.write() = None;
    }

    /// Whether a cached value exists and has not expired.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.slot
            .read()
            .as_ref()
            .map(|slot| slot.loaded_at.elapsed() < self.ttl)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_cache(ttl: Duration) -> (Arc<AtomicUsize>, CachedCatalog<usize>) {
        let loads = Arc::new(AtomicUsize::new(0));
        let loads_in_loader = Arc::clone(&loads);
        let cache = CachedCatalog::new(ttl, move || {
            loads_in_loader.fetch_add(1, Ordering::SeqCst) + 1
        });
        (loads, cache)
    }

    #[test]
    fn test_get_memoizes_within_ttl() {
        let (loads, cache) = counting_cache(Duration::from_secs(3600));
        assert_eq!(*cache.get(), 1);
        assert_eq!(*cache.get(), 1);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(cache.is_fresh());
    }

    #[test]
    fn test_zero_ttl_reloads_every_access() {
        let (loads, cache) = counting_cache(Duration::ZERO);
        assert_eq!(*cache.get(), 1);
        assert_eq!(*cache.get(), 2);
        assert_eq!(loads.load(Ordering::SeqCst), 2);
        assert!(!cache.is_fresh());
    }

    #[test]
    fn test_invalidate_forces_reload() {
        let (loads, cache) = counting_cache(Duration::from_secs(3600));
        cache.get();
        cache.invalidate();
        assert!(!cache.is_fresh());
        assert_eq!(*cache.get(), 2);
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_reload_swaps_wholesale() {
        let (_, cache) = counting_cache(Duration::from_secs(3600));
        let first = cache.get();
        let second = cache.reload();
        assert_eq!(*first, 1);
        assert_eq!(*second, 2);
        assert_eq!(*cache.get(), 2);
    }
}
