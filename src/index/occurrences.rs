//! Per-name occurrence sets
//!
//! One `TagOccurrences` exists per distinct trimmed tag name. It holds the
//! positions of every opening and closing occurrence in arrival order, the
//! derived start/end pairs, and the classified label segments.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::label::TagLabel;

/// Three-way comparison of opening and closing occurrence counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Equal counts, zero included
    Balanced,
    /// More opens than closes (dangling opens)
    ExtraOpens,
    /// More closes than opens (dangling closes)
    ExtraCloses,
}

/// All occurrences of one tag name in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOccurrences {
    /// Trimmed tag name, identity key
    pub name: String,
    /// Character offsets just past each `<name>`, in arrival order
    pub start_positions: Vec<usize>,
    /// Character offsets of each `</name>`, in arrival order
    pub end_positions: Vec<usize>,
    /// Rank-paired (start, end) offsets, derived from the positions
    pub pairs: Vec<(usize, usize)>,
    /// Label segments classified as topical
    pub main_topics: Vec<String>,
    /// Label segments classified as descriptive/qualifying
    pub subject_info: Vec<String>,
}

impl TagOccurrences {
    /// Create an empty occurrence set, classifying the name's label once
    pub fn new(name: &str) -> Self {
        let TagLabel {
            main_topics,
            subject_info,
        } = TagLabel::parse(name);
        TagOccurrences {
            name: name.to_string(),
            start_positions: Vec::new(),
            end_positions: Vec::new(),
            pairs: Vec::new(),
            main_topics,
            subject_info,
        }
    }

    /// Record an opening occurrence
    #[inline]
    pub fn record_start(&mut self, position: usize) {
        self.start_positions.push(position);
    }

    /// Record a closing occurrence
    #[inline]
    pub fn record_end(&mut self, position: usize) {
        self.end_positions.push(position);
    }

    /// Recompute `pairs` from the current positions.
    ///
    /// The i-th smallest start is paired with the i-th smallest end,
    /// truncated to the shorter list; surplus positions stay unpaired and
    /// surface through `balance`. Sorting happens on copies, so the
    /// recorded positions keep their arrival order.
    ///
    /// Pairing is rank-based, never nesting-aware; consumers depend on
    /// this exact rule holding for non-well-nested input.
    pub fn compute_pairs(&mut self) {
        let mut starts = self.start_positions.clone();
        let mut ends = self.end_positions.clone();
        starts.sort_unstable();
        ends.sort_unstable();
        self.pairs = starts.into_iter().zip(ends).collect();
    }

    /// Compare opening and closing occurrence counts
    #[inline]
    pub fn balance(&self) -> Balance {
        match self.start_positions.len().cmp(&self.end_positions.len()) {
            Ordering::Equal => Balance::Balanced,
            Ordering::Greater => Balance::ExtraOpens,
            Ordering::Less => Balance::ExtraCloses,
        }
    }
}
