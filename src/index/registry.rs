//! Insertion-ordered tag registry
//!
//! Deduplicates scanner matches by trimmed tag name. Names keep the order
//! in which they were first seen, which makes serialized output
//! deterministic; positions within each entry keep their arrival order.

use indexmap::IndexMap;

use crate::core::tokenizer::{CloseTags, OpenTags};
use crate::index::occurrences::TagOccurrences;

/// Registry of every distinct tag name found in one document
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: IndexMap<String, TagOccurrences>,
}

impl TagRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        TagRegistry {
            tags: IndexMap::new(),
        }
    }

    /// Scan a document and build the full registry.
    ///
    /// Runs the opening pass to completion before the closing pass, so a
    /// name seen only in closing tags registers after every opened name.
    /// Pairs are computed once both passes are done.
    pub fn scan_text(text: &str) -> Self {
        let mut registry = TagRegistry::new();
        for m in OpenTags::new(text) {
            registry.record_open(m.name, m.position);
        }
        for m in CloseTags::new(text) {
            registry.record_close(m.name, m.position);
        }
        for occurrences in registry.tags.values_mut() {
            occurrences.compute_pairs();
        }
        registry
    }

    /// Record an opening occurrence, creating the entry on first sight
    pub fn record_open(&mut self, name: &str, position: usize) {
        self.entry(name).record_start(position);
    }

    /// Record a closing occurrence, creating the entry on first sight.
    /// A close-only name is a legal entry; it surfaces later as a
    /// closing error.
    pub fn record_close(&mut self, name: &str, position: usize) {
        self.entry(name).record_end(position);
    }

    // The entry API wants an owned key, so look up by &str first and only
    // allocate on first sight.
    fn entry(&mut self, name: &str) -> &mut TagOccurrences {
        if !self.tags.contains_key(name) {
            self.tags
                .insert(name.to_string(), TagOccurrences::new(name));
        }
        &mut self.tags[name]
    }

    /// Look up one tag by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&TagOccurrences> {
        self.tags.get(name)
    }

    /// Number of distinct tag names
    #[inline]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Check if no tags were found
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate occurrence sets in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &TagOccurrences> {
        self.tags.values()
    }

    /// Consume the registry into its occurrence sets, first-seen order
    pub fn into_tags(self) -> Vec<TagOccurrences> {
        self.tags.into_values().collect()
    }
}
