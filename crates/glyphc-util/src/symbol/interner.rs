//! Global string interner backing [`super::Symbol`].
//!
//! A `DashMap` keyed by hash gives lock-free concurrent interning without
//! needing a `Mutex`, even though `glyphc` itself only ever interns from one
//! thread. Strings are leaked to `'static` once, which is fine for a process
//! that runs to completion and exits.

use ahash::AHasher;
use dashmap::DashMap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use super::Symbol;

pub(crate) static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

pub(crate) struct StringTable {
    map: DashMap<u64, (&'static str, u32)>,
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            map: DashMap::with_capacity(256),
            next_index: AtomicU32::new(0),
        }
    }

    pub(crate) fn intern(&self, s: &str) -> Symbol {
        let hash = Self::hash_str(s);
        if let Some(entry) = self.map.get(&hash) {
            if entry.value().0 == s {
                return Symbol { index: entry.value().1 };
            }
        }
        match self.map.entry(hash) {
            dashmap::mapref::entry::Entry::Occupied(entry) => {
                if entry.get().0 == s {
                    Symbol { index: entry.get().1 }
                } else {
                    self.probe_insert(s, hash)
                }
            }
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
                let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                entry.insert((leaked, idx));
                Symbol { index: idx }
            }
        }
    }

    fn probe_insert(&self, s: &str, original_hash: u64) -> Symbol {
        const PROBE_PRIME: u64 = 0x9e3779b97f4a7c15;
        let mut probe = original_hash;
        loop {
            probe = probe.wrapping_add(PROBE_PRIME);
            match self.map.entry(probe) {
                dashmap::mapref::entry::Entry::Occupied(entry) => {
                    if entry.get().0 == s {
                        return Symbol { index: entry.get().1 };
                    }
                }
                dashmap::mapref::entry::Entry::Vacant(entry) => {
                    let leaked: &'static str = Box::leak(s.to_string().into_boxed_str());
                    let idx = self.next_index.fetch_add(1, Ordering::Relaxed);
                    entry.insert((leaked, idx));
                    return Symbol { index: idx };
                }
            }
        }
    }

    pub(crate) fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.map
            .iter()
            .find(|entry| entry.value().1 == symbol.index)
            .map(|entry| entry.value().0)
    }

    fn hash_str(s: &str) -> u64 {
        let mut hasher = AHasher::default();
        s.hash(&mut hasher);
        hasher.finish()
    }
}
