//! Two-pool cache of measured display widths.
//!
//! Short texts are kept for the lifetime of the cache in a sharded concurrent
//! map. Long texts go into a small pool bounded by a FIFO queue: once the pool is
//! full, inserting a new key evicts the oldest inserted one.
//!
//! Widths are always computed outside any lock. Insertion re-checks for an
//! existing entry, so two threads racing on the same key both return the same
//! width and the pool never exceeds its capacity.

use std::collections::{HashMap, VecDeque};

use dashmap::DashMap;
use parking_lot::Mutex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::unicode;

/// Longest text (in runes) stored in the short pool.
pub const SHORT_TEXT_MAX_LEN: usize = 64;

/// Number of entries retained by the long pool.
pub const LONG_POOL_CAPACITY: usize = 16;

/// Sizing of the width cache pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidthCacheConfig {
    /// Texts up to this many runes use the unbounded short pool.
    pub short_text_max_len: usize,
    /// Maximum number of entries in the long pool.
    pub long_pool_capacity: usize,
}

impl Default for WidthCacheConfig {
    fn default() -> Self {
        WidthCacheConfig {
            short_text_max_len: SHORT_TEXT_MAX_LEN,
            long_pool_capacity: LONG_POOL_CAPACITY,
        }
    }
}

impl WidthCacheConfig {
    /// Check that the configuration describes a usable cache.
    pub fn validate(&self) -> NavResult<()> {
        if self.long_pool_capacity == 0 {
            return Err(NavError::invalid_config(
                "long_pool_capacity",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct LongPool {
    widths: HashMap<String, usize>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<String>,
}

impl LongPool {
    /// Insert a new key, returning the key evicted to stay within `capacity`.
    fn insert(&mut self, text: String, width: usize, capacity: usize) -> Option<String> {
        self.order.push_back(text.clone());
        self.widths.insert(text, width);

        if self.order.len() <= capacity {
            return None;
        }
        let oldest = self.order.pop_front()?;
        self.widths.remove(&oldest);
        Some(oldest)
    }

    fn clear(&mut self) {
        self.widths.clear();
        self.order.clear();
    }
}

/// Thread-safe width cache with a short and a long pool.
#[derive(Debug)]
pub struct WidthCache {
    config: WidthCacheConfig,
    short: DashMap<String, usize>,
    long: Mutex<LongPool>,
}

impl WidthCache {
    /// Create an empty cache.
    pub fn new(config: WidthCacheConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: WidthCacheConfig) -> Self {
        WidthCache {
            config,
            short: DashMap::new(),
            long: Mutex::new(LongPool::default()),
        }
    }

    pub fn config(&self) -> &WidthCacheConfig {
        &self.config
    }

    fn is_short(&self, text: &str) -> bool {
        unicode::rune_count(text) <= self.config.short_text_max_len
    }

    /// Return the cached width of `text`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        if self.is_short(text) {
            self.get_or_insert_short(text, compute)
        } else {
            self.get_or_insert_long(text, compute)
        }
    }

    fn get_or_insert_short<F>(&self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        if let Some(width) = self.short.get(text) {
            log::trace!("short pool hit ({} bytes)", text.len());
            return *width;
        }

        let width = compute(text);
        *self.short.entry(text.to_owned()).or_insert(width)
    }

    fn get_or_insert_long<F>(&self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        if let Some(&width) = self.long.lock().widths.get(text) {
            log::trace!("long pool hit ({} bytes)", text.len());
            return width;
        }

        let width = compute(text);

        let mut pool = self.long.lock();
        if let Some(&existing) = pool.widths.get(text) {
            return existing;
        }
        if let Some(evicted) = pool.insert(text.to_owned(), width, self.config.long_pool_capacity) {
            log::debug!(
                "long pool full ({} entries), evicted oldest entry of {} bytes",
                self.config.long_pool_capacity,
                evicted.len()
            );
        }
        width
    }

    /// Cached width of `text`, if present.
    pub fn get(&self, text: &str) -> Option<usize> {
        if self.is_short(text) {
            self.short.get(text).map(|width| *width)
        } else {
            self.long.lock().widths.get(text).copied()
        }
    }

    /// Whether `text` currently has a cached width.
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// Number of entries in the short pool.
    pub fn short_len(&self) -> usize {
        self.short.len()
    }

    /// Number of entries in the long pool.
    pub fn long_len(&self) -> usize {
        self.long.lock().widths.len()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.short.clear();
        self.long.lock().clear();
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_valid_config(WidthCacheConfig::default())
    }
}
