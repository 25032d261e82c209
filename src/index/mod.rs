//! Occurrence indexing
//!
//! The index is the middle of the pipeline: scanner matches flow in, a
//! flat per-name occurrence table comes out.
//!
//! ```text
//! OpenTags/CloseTags --> TagRegistry --> [TagOccurrences, ...]
//!   (lexical matches)    (dedup by name,  (positions, pairs,
//!                         first-seen order) balance, label)
//! ```
//!
//! - `occurrences`: one tag name's positions, rank pairs, and balance
//! - `registry`: insertion-ordered dedup across a whole document

pub mod occurrences;
pub mod registry;

pub use occurrences::{Balance, TagOccurrences};
pub use registry::TagRegistry;
