//! Navkit Core Library
//!
//! Cursor navigation and display-width measurement for line and terminal
//! editors. Two independent components live here:
//!
//! - [`Document`]: an immutable text snapshot plus cursor that answers movement
//!   queries (character, line, document and paragraph motions) with signed
//!   offsets, and translates between rune indexes and row/column pairs.
//! - [`WidthService`]: classifies code points as 0, 1 or 2 terminal columns and
//!   measures strings through a thread-safe two-pool cache.
//!
//! Neither component mutates text; the caller owns the buffer and applies the
//! returned offsets itself.

pub mod document;
pub mod error;
pub mod line_index;
pub mod prelude;
pub mod unicode;
pub mod width;
pub mod width_cache;

// Re-export navigation types
pub use document::Document;
#[cfg(feature = "serde")]
pub use document::DocumentState;
pub use line_index::LineIndex;

// Re-export width types
pub use unicode::{classify_code_point, measure_string, GlyphWidth};
pub use width::WidthService;
pub use width_cache::{WidthCache, WidthCacheConfig, LONG_POOL_CAPACITY, SHORT_TEXT_MAX_LEN};

pub use error::{NavError, NavResult};
