//! RustyTags - tag extraction and classification for inline markup
//!
//! Scans plain-text documents for `<name>` ... `</name>` tag occurrences,
//! where `name` may be a semicolon-separated composite label, and builds a
//! structured report: every occurrence position, rank-paired start/end
//! offsets, unbalanced tag names in each direction, and an organized view
//! grouping error-free tags by their primary main topic.
//!
//! Pipeline:
//!
//! ```text
//! text --> OpenTags/CloseTags --> TagRegistry --> DocumentReport
//!          (two lexical passes)   (dedup, order)  (pairs, errors,
//!                                                  organized view)
//! ```
//!
//! The scanner is non-nesting and non-validating: malformed markup is
//! classified and reported, never rejected. All positions are character
//! offsets into the decoded text.
//!
//! ```
//! use rustytags::DocumentReport;
//!
//! let report = DocumentReport::from_text(
//!     "notes.txt",
//!     "/docs/notes.txt",
//!     "<Kanda1; the first book>...</Kanda1; the first book>",
//! );
//! assert!(report.is_balanced());
//! assert_eq!(report.organized_tags["Kanda1"].len(), 1);
//! ```

pub mod artifact;
pub mod core;
pub mod error;
pub mod index;
pub mod label;
pub mod report;

pub use crate::artifact::{artifact_name, read_document};
pub use crate::core::tokenizer::{CloseTags, OpenTags, TagMatch};
pub use crate::error::{Result, TagError};
pub use crate::index::{Balance, TagOccurrences, TagRegistry};
pub use crate::label::TagLabel;
pub use crate::report::{DocumentReport, TopicEntry};
