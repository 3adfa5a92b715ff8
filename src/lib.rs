//! folio - book-style back-of-index builder
//!
//! Reads a plain-text document line by line, assigns each line to a
//! logical page (`lines_per_page` consecutive lines per page),
//! normalizes every whitespace-delimited token into a lowercase
//! letters-and-apostrophes word, and emits a sorted listing of
//! word → sorted page numbers.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - normalize (token → word)
//!   - pager (line → page accounting)
//!   - index (accumulation + rendering)
//!   - pipeline (single-pass driver)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - clap surface, stream wiring, stderr summary
//!
//! # Example
//!
//! ```
//! use folio::core::pipeline::Pipeline;
//! use std::io::Cursor;
//!
//! let input = Cursor::new("Hello world\nhello again\nTHE WORLD\n");
//! let (index, _stats) = Pipeline::new(2).run(input).unwrap();
//!
//! let mut out = Vec::new();
//! index.render_text(&mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "again:\t1\nhello:\t1\nthe:\t2\nworld:\t1,2\n"
//! );
//! ```

// Core domain logic (adapter-agnostic)
pub mod core;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::{Config, RenderFormat};
pub use core::error::{FolioError, Result};
pub use core::index::PageIndex;
pub use core::pipeline::Pipeline;
pub use core::types::IndexStats;
