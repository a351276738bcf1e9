//! Convenient re-exports for common usage patterns
//!
//! Import everything an editor needs for navigation and width queries with a
//! single `use navkit_core::prelude::*;` statement.
//!
//! # Examples
//!
//! ```
//! use navkit_core::prelude::*;
//!
//! let doc = Document::with_text("hello\nworld", 8);
//! let widths = WidthService::new();
//! assert_eq!(doc.get_cursor_up_position(1, None), -6);
//! assert_eq!(widths.get_width(doc.current_line()), 5);
//! ```

// Navigation
pub use crate::document::Document;
pub use crate::line_index::LineIndex;

// Width measurement
pub use crate::width::WidthService;
pub use crate::width_cache::{WidthCache, WidthCacheConfig};

// Error handling
pub use crate::error::{NavError, NavResult};

// Unicode utilities
pub use crate::unicode::{classify_code_point, measure_string, rune_count, GlyphWidth};
