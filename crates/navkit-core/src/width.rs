//! Display width measurement service.
//!
//! [`WidthService`] answers "how many terminal columns does this text occupy?"
//! for renderers laying text onto a fixed-width grid. It owns its
//! [`WidthCache`]; create one per process and hand it out by reference or `Arc`.

use std::sync::Arc;

use crate::error::NavResult;
use crate::unicode;
use crate::width_cache::{WidthCache, WidthCacheConfig};

/// Cached display width measurement.
///
/// # Examples
///
/// ```
/// use navkit_core::width::WidthService;
///
/// let widths = WidthService::new();
/// assert_eq!(widths.get_width("Hello世界"), 9);
/// assert_eq!(widths.char_width('世'), 2);
/// ```
#[derive(Debug)]
pub struct WidthService {
    cache: WidthCache,
}

impl WidthService {
    /// Create a service with the default pool sizes.
    pub fn new() -> Self {
        WidthService {
            cache: WidthCache::default(),
        }
    }

    /// Create a service with custom pool sizes.
    pub fn with_config(config: WidthCacheConfig) -> NavResult<Self> {
        Ok(WidthService {
            cache: WidthCache::new(config)?,
        })
    }

    /// Create a default service behind an `Arc` for sharing across threads.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Width of a single code point: 0, 1 or 2 columns.
    pub fn char_width(&self, c: char) -> usize {
        unicode::classify_code_point(c).columns()
    }

    /// Width of `text` in terminal columns.
    ///
    /// Empty text is 0 without touching the cache. The result is always the
    /// value [`unicode::measure_string`] would produce.
    pub fn get_width(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.cache.get_or_insert_with(text, unicode::measure_string)
    }

    pub fn cache(&self) -> &WidthCache {
        &self.cache
    }
}

impl Default for WidthService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_width() {
        let widths = WidthService::new();
        assert_eq!(widths.get_width(""), 0);
        assert_eq!(widths.get_width("hello"), 5);
        assert_eq!(widths.get_width("Hello世界"), 9);
        assert_eq!(widths.get_width("こんにちは"), 10);
        assert_eq!(widths.get_width("e\u{0301}"), 1);
        assert_eq!(widths.get_width("\u{1b}[0m"), 3);
    }

    #[test]
    fn test_empty_text_is_not_cached() {
        let widths = WidthService::new();
        widths.get_width("");
        assert_eq!(widths.cache().short_len(), 0);
    }

    #[test]
    fn test_char_width() {
        let widths = WidthService::new();
        assert_eq!(widths.char_width('a'), 1);
        assert_eq!(widths.char_width('\0'), 0);
        assert_eq!(widths.char_width('\u{0308}'), 0);
        assert_eq!(widths.char_width('한'), 2);
    }

    #[test]
    fn test_repeated_calls_are_stable() {
        let widths = WidthService::new();
        let text = "mixed 幅 text";
        let first = widths.get_width(text);
        for _ in 0..10 {
            assert_eq!(widths.get_width(text), first);
        }
        assert_eq!(first, unicode::measure_string(text));
        assert!(widths.cache().contains(text));
    }

    #[test]
    fn test_long_text_widths() {
        let widths = WidthService::new();
        let text = "世".repeat(100);
        assert_eq!(widths.get_width(&text), 200);
        assert_eq!(widths.cache().long_len(), 1);
    }

    #[test]
    fn test_with_config_rejects_zero_capacity() {
        let config = WidthCacheConfig {
            long_pool_capacity: 0,
            ..WidthCacheConfig::default()
        };
        assert!(WidthService::with_config(config).is_err());
    }

    #[test]
    fn test_service_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WidthService>();
    }
}
