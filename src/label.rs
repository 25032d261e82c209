//! Tag label classification
//!
//! A tag name may be a semicolon-separated composite label, e.g.
//! `"Kanda1; the first book"`. Segments are trimmed and classified into
//! main topics (no internal whitespace) and subject/information qualifiers
//! (internal whitespace), with two fixed rules:
//!
//! - a single-segment label is always a main topic, whitespace or not
//! - a multi-segment label with only main topics has its last segment
//!   reclassified as the sole qualifier, since composite labels end in a
//!   qualifying clause

/// Classification of one tag name into topics and qualifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagLabel {
    /// Segments classified as topical, in segment order
    pub main_topics: Vec<String>,
    /// Segments classified as descriptive/qualifying, in segment order
    pub subject_info: Vec<String>,
}

impl TagLabel {
    /// Split `name` on `;` and classify the non-empty trimmed segments
    pub fn parse(name: &str) -> Self {
        let segments: Vec<&str> = name
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut main_topics = Vec::new();
        let mut subject_info = Vec::new();

        if segments.len() == 1 {
            main_topics.push(segments[0].to_string());
        } else {
            for segment in &segments {
                if segment.chars().any(char::is_whitespace) {
                    subject_info.push(segment.to_string());
                } else {
                    main_topics.push(segment.to_string());
                }
            }
            // A multi-segment label keeps at least one qualifier: demote
            // the last topic when every segment classified as topical.
            if main_topics.len() > 1 && subject_info.is_empty() {
                if let Some(last) = main_topics.pop() {
                    subject_info.push(last);
                }
            }
        }

        TagLabel {
            main_topics,
            subject_info,
        }
    }

    /// True when no segment survived trimming
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.main_topics.is_empty() && self.subject_info.is_empty()
    }
}
