//! cfgtree Editor
//!
//! Structural editing of indentation-structured configuration text.
//!
//! # Core Operations
//!
//! - **Search**: [`ConfigEditor::search`], [`ConfigEditor::search_capture`],
//!   [`ConfigEditor::serial_check`]
//! - **Delete**: [`ConfigEditor::delete_serial`], [`ConfigEditor::delete_between`]
//! - **Insert**: [`ConfigEditor::add_after`], [`ConfigEditor::add_before`]
//! - **Replace**: [`ConfigEditor::replace_line`], [`ConfigEditor::replace_serial`],
//!   [`ConfigEditor::replace_between`]
//!
//! Edit requests are written in compact form, one record per line:
//! `ancestor1,ancestor2,...,value`. The ancestor count restores the value's
//! indentation using the configured step width.
//!
//! # Architecture
//!
//! ```text
//! text → build → [PathRecord] → edit operations → serialize → text
//!                      ↑______________reparse_____________↓
//! ```
//!
//! # Example
//!
//! ```rust
//! use cfgtree_edit::{ConfigEditor, EditorConfig};
//!
//! let text = "configure\n card 1\n  mda 1\n   no shutdown";
//! let mut editor = ConfigEditor::new(text, EditorConfig::default())?;
//!
//! editor.delete_serial("configure,card 1,mda 1,no shutdown", false, false)?;
//! assert_eq!(editor.serialize(), "configure\n card 1\n  mda 1");
//! # Ok::<(), cfgtree_edit::EditError>(())
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod error;

mod delete;
mod editor;
mod insert;
mod matcher;
mod replace;

// Re-exports for convenience
pub use config::{Boundary, EditorConfig};
pub use editor::ConfigEditor;
pub use error::{EditError, EditResult};

pub use cfgtree_index::{CommentPrefixes, IndexError, PathRecord};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the editor
    pub use crate::config::{Boundary, EditorConfig};
    pub use crate::editor::ConfigEditor;
    pub use crate::error::{EditError, EditResult};
    pub use cfgtree_index::{CommentPrefixes, PathRecord};
}
