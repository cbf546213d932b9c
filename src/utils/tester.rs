//! Internal testing utilities

use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::hashcore::HashHooks;

//  Installs a logger, once, honoring `RUST_LOG`.
pub fn initialize_logger() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    });
}

//  Hooks hashing every key to the same value, so that all keys share a single
//  probe sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollidingHooks(pub usize);

impl HashHooks for CollidingHooks {
    fn hash(&self, _: &str) -> usize { self.0 }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}
