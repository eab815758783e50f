//! cfgtree Path Index
//!
//! Linearizes indentation-structured configuration (router/switch CLI style)
//! into an ordered sequence of path records.
//!
//! # Core Concepts
//!
//! - [`PathRecord`]: one line plus the separator-joined tokens of its ancestors
//! - [`CommentPrefixes`]: literal prefixes that mark comment lines
//! - [`build`]: indented text → records
//! - [`encode_line`]: compact `a,b,value` text → record with restored indentation
//!
//! # Example
//!
//! ```rust
//! use cfgtree_index::{build, render_compact, CommentPrefixes};
//!
//! let text = "configure\n card 1\n  mda 1\n   no shutdown";
//! let records = build(text, &CommentPrefixes::none(), ',')?;
//! assert_eq!(records[3].path, "configure,card 1,mda 1");
//! assert!(render_compact(&records, ',').ends_with("mda 1,no shutdown"));
//! # Ok::<(), cfgtree_index::IndexError>(())
//! ```

#![warn(unreachable_pub)]

// Core modules
mod compact;
mod error;
mod linearize;
mod record;

// Re-exports
pub use compact::{encode_block, encode_line, render_compact};
pub use error::IndexError;
pub use linearize::{anchored, between_lines, build, reject_tabs};
pub use record::{indent_width, CommentPrefixes, PathRecord};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
