//! Document reports
//!
//! `DocumentReport` is the engine's end product: every occurrence set
//! found in one document, the unbalanced tag names in each direction, and
//! the organized view grouping error-free tags by their primary main
//! topic. All fields are computed eagerly at construction; the report is
//! immutable afterwards and serializes to the persisted JSON artifact.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::index::{Balance, TagOccurrences, TagRegistry};

/// One tag's row in the organized view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    /// The full original tag name
    pub full_tag: String,
    /// Qualifier segments of the label
    pub subject_info: Vec<String>,
    /// Main topics after the first (the first is the grouping key)
    pub remaining_main_topics: Vec<String>,
    /// Opening positions, arrival order
    pub start_positions: Vec<usize>,
    /// Closing positions, arrival order
    pub end_positions: Vec<usize>,
    /// Rank-paired (start, end) offsets
    pub pairs: Vec<(usize, usize)>,
}

/// Full scan report for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Document file name, echoed into the artifact
    pub file_name: String,
    /// Document path as given, echoed into the artifact
    pub file_path: String,
    /// Every occurrence set, in first-seen order
    pub tags: Vec<TagOccurrences>,
    /// Names with more opens than closes
    pub opening_errors: Vec<String>,
    /// Names with more closes than opens
    pub closing_errors: Vec<String>,
    /// Error-free tags grouped by primary main topic
    pub organized_tags: IndexMap<String, Vec<TopicEntry>>,
}

impl DocumentReport {
    /// Scan `text` and build the complete report.
    ///
    /// Never fails: malformed markup is data, reported through the error
    /// name lists and the occurrence sets themselves. The text is only
    /// borrowed for the scan and is not retained.
    pub fn from_text(file_name: &str, file_path: &str, text: &str) -> Self {
        let tags = TagRegistry::scan_text(text).into_tags();
        let (opening_errors, closing_errors) = classify_errors(&tags);
        let organized_tags = organize(&tags, &opening_errors, &closing_errors);

        debug!(
            file = file_name,
            tags = tags.len(),
            opening_errors = opening_errors.len(),
            closing_errors = closing_errors.len(),
            "document scan complete"
        );

        DocumentReport {
            file_name: file_name.to_string(),
            file_path: file_path.to_string(),
            tags,
            opening_errors,
            closing_errors,
            organized_tags,
        }
    }

    /// Look up one occurrence set by name
    pub fn tag(&self, name: &str) -> Option<&TagOccurrences> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// Check if both error lists are empty
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.opening_errors.is_empty() && self.closing_errors.is_empty()
    }
}

/// Partition unbalanced tag names by surplus direction
fn classify_errors(tags: &[TagOccurrences]) -> (Vec<String>, Vec<String>) {
    let mut opening = Vec::new();
    let mut closing = Vec::new();
    for tag in tags {
        match tag.balance() {
            Balance::Balanced => {}
            Balance::ExtraOpens => opening.push(tag.name.clone()),
            Balance::ExtraCloses => closing.push(tag.name.clone()),
        }
    }
    (opening, closing)
}

/// Group error-free tags by their primary main topic.
///
/// Error tags are omitted entirely, not merely flagged; tags with no main
/// topic (a label of only empty or only qualifier segments) are omitted
/// too. Key order follows tag registration order, as do entries within a
/// group.
fn organize(
    tags: &[TagOccurrences],
    opening_errors: &[String],
    closing_errors: &[String],
) -> IndexMap<String, Vec<TopicEntry>> {
    let mut organized: IndexMap<String, Vec<TopicEntry>> = IndexMap::new();

    for tag in tags {
        if opening_errors.contains(&tag.name) || closing_errors.contains(&tag.name) {
            continue;
        }
        let Some(primary) = tag.main_topics.first() else {
            continue;
        };
        organized
            .entry(primary.clone())
            .or_default()
            .push(TopicEntry {
                full_tag: tag.name.clone(),
                subject_info: tag.subject_info.clone(),
                remaining_main_topics: tag.main_topics[1..].to_vec(),
                start_positions: tag.start_positions.clone(),
                end_positions: tag.end_positions.clone(),
                pairs: tag.pairs.clone(),
            });
    }

    organized
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn report(text: &str) -> DocumentReport {
        DocumentReport::from_text("doc.txt", "/tmp/doc.txt", text)
    }

    #[test]
    fn test_balanced_tag() {
        let r = report("<tag>content</tag>");
        assert_eq!(r.tags.len(), 1);
        assert_eq!(r.tag("tag").unwrap().pairs.len(), 1);
        assert!(r.is_balanced());
        assert_eq!(r.organized_tags.len(), 1);
    }

    #[test]
    fn test_surplus_open_is_an_opening_error() {
        let r = report("<tag><tag></tag>");
        let tag = r.tag("tag").unwrap();
        assert_eq!(tag.start_positions.len(), 2);
        assert_eq!(tag.end_positions.len(), 1);
        assert_eq!(tag.pairs.len(), 1);
        assert_eq!(r.opening_errors, vec!["tag"]);
        assert!(r.closing_errors.is_empty());
        // error tags are left out of the organized view entirely
        assert!(r.organized_tags.is_empty());
    }

    #[test]
    fn test_orphan_close_is_a_closing_error() {
        let r = report("</orphan>");
        let tag = r.tag("orphan").unwrap();
        assert!(tag.start_positions.is_empty());
        assert_eq!(tag.end_positions.len(), 1);
        assert_eq!(r.closing_errors, vec!["orphan"]);
        assert!(r.opening_errors.is_empty());
        assert!(r.organized_tags.is_empty());
    }

    #[test]
    fn test_organized_groups_by_primary_topic() {
        let text = "<A; one two>x</A; one two><A; three four>y</A; three four>";
        let r = report(text);
        assert!(r.is_balanced());
        assert_eq!(r.organized_tags.len(), 1);
        let group = &r.organized_tags["A"];
        assert_eq!(group.len(), 2);
        assert_eq!(group[0].full_tag, "A; one two");
        assert_eq!(group[0].subject_info, vec!["one two"]);
        assert_eq!(group[1].full_tag, "A; three four");
        assert_eq!(group[1].subject_info, vec!["three four"]);
    }

    #[test]
    fn test_organized_entry_carries_remaining_topics() {
        let r = report("<A;B;C; about it></A;B;C; about it>");
        let group = &r.organized_tags["A"];
        assert_eq!(group[0].remaining_main_topics, vec!["B", "C"]);
        assert_eq!(group[0].subject_info, vec!["about it"]);
        assert_eq!(group[0].start_positions, r.tag("A;B;C; about it").unwrap().start_positions);
        assert_eq!(group[0].pairs, r.tag("A;B;C; about it").unwrap().pairs);
    }

    #[test]
    fn test_organized_skips_topicless_labels() {
        // both segments carry whitespace, so no main topic exists
        let r = report("<a b; c d></a b; c d>");
        assert!(r.is_balanced());
        assert_eq!(r.tags.len(), 1);
        assert!(r.organized_tags.is_empty());
    }

    #[test]
    fn test_organized_key_order_follows_registration() {
        let r = report("<z></z><m></m><z></z>");
        let keys: Vec<&str> = r.organized_tags.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "m"]);
    }

    #[test]
    fn test_empty_name_key_is_reportable() {
        let r = report("< ></>");
        let tag = r.tag("").unwrap();
        assert_eq!(tag.pairs, vec![(3, 3)]);
        assert!(r.is_balanced());
        // empty label has no main topic
        assert!(r.organized_tags.is_empty());
    }

    #[test]
    fn test_artifact_field_names() {
        let r = report("<A; the intro>x</A; the intro>");
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["file_name"].is_string());
        assert!(json["file_path"].is_string());
        assert!(json["tags"].is_array());
        assert!(json["opening_errors"].is_array());
        assert!(json["closing_errors"].is_array());
        let entry = &json["organized_tags"]["A"][0];
        assert_eq!(entry["full_tag"], "A; the intro");
        assert!(entry["subject_info"].is_array());
        assert!(entry["remaining_main_topics"].is_array());
        assert!(entry["start_positions"].is_array());
        assert!(entry["end_positions"].is_array());
        assert!(entry["pairs"].is_array());
    }

    #[test]
    fn test_json_round_trip() {
        let r = report("<a></a><a></a></b><c; d e>x</c; d e>");
        let json = serde_json::to_string(&r).unwrap();
        let back: DocumentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    fn tag_soup() -> impl Strategy<Value = String> {
        let fragment = proptest::sample::select(vec![
            "<a>", "</a>", "<b;x y>", "</b;x y>", "<A;B>", "< >", "</>", "<>", "<", ">", "/",
            "text", "é漢", "\n",
        ]);
        proptest::collection::vec(fragment, 0..16).prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn prop_error_lists_match_counts(text in tag_soup()) {
            let r = report(&text);
            for name in &r.opening_errors {
                let tag = r.tag(name).unwrap();
                prop_assert!(tag.start_positions.len() > tag.end_positions.len());
            }
            for name in &r.closing_errors {
                let tag = r.tag(name).unwrap();
                prop_assert!(tag.start_positions.len() < tag.end_positions.len());
                prop_assert!(!r.opening_errors.contains(name));
            }
        }

        #[test]
        fn prop_pairs_are_sorted_rank_matches(text in tag_soup()) {
            let r = report(&text);
            for tag in &r.tags {
                let mut starts = tag.start_positions.clone();
                let mut ends = tag.end_positions.clone();
                starts.sort_unstable();
                ends.sort_unstable();
                prop_assert_eq!(tag.pairs.len(), starts.len().min(ends.len()));
                for (i, &(s, e)) in tag.pairs.iter().enumerate() {
                    prop_assert_eq!((s, e), (starts[i], ends[i]));
                }
            }
        }

        #[test]
        fn prop_organized_excludes_error_tags(text in tag_soup()) {
            let r = report(&text);
            for entries in r.organized_tags.values() {
                for entry in entries {
                    prop_assert!(!r.opening_errors.contains(&entry.full_tag));
                    prop_assert!(!r.closing_errors.contains(&entry.full_tag));
                    let tag = r.tag(&entry.full_tag).unwrap();
                    prop_assert!(!tag.main_topics.is_empty());
                }
            }
        }

        #[test]
        fn prop_report_round_trips_through_json(text in tag_soup()) {
            let r = report(&text);
            let json = serde_json::to_string(&r).unwrap();
            let back: DocumentReport = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, r);
        }
    }
}
