//! Core domain logic for folio (adapter-agnostic).
//!
//! Everything under here is plain synchronous Rust with no knowledge
//! of the CLI surface: normalization, pagination, the index itself,
//! and the pipeline that ties them together.

pub mod config;
pub mod error;
pub mod index;
pub mod normalize;
pub mod pager;
pub mod pipeline;
pub mod types;
