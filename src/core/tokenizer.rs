//! Tag occurrence tokenizers
//!
//! Pull-style iterators that extract tag occurrences from document text:
//! - `OpenTags`: opening occurrences, equivalent to the pattern
//!   `<([^/][^>]*)>`: a `<` whose next character is not `/`, then
//!   everything up to the terminating `>`
//! - `CloseTags`: closing occurrences, equivalent to `</([^>]*)>`
//!
//! The two iterators are independent full passes over the same text and
//! may overlap: in `<x</y>` the opening pass yields the name `x</y` while
//! the closing pass yields `y`. Scanning is non-nesting and non-validating;
//! interleaved and unbalanced tags are reported as found.
//!
//! Within one pass, matches never overlap: after a successful match the
//! scan resumes past its terminating `>`, and after a failed candidate `<`
//! it resumes at the following character.
//!
//! All positions are character offsets into the text. An opening match is
//! positioned just past its terminating `>`; a closing match is positioned
//! at its leading `<`.

use crate::core::scanner::Scanner;

/// A single tag occurrence produced by a scan pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Tag name with surrounding whitespace trimmed
    pub name: &'a str,
    /// Character offset assigned to this occurrence
    pub position: usize,
}

/// Iterator over opening-tag occurrences
pub struct OpenTags<'a> {
    scanner: Scanner<'a>,
}

impl<'a> OpenTags<'a> {
    /// Create an opening-tag scan over the given text
    #[inline]
    pub fn new(input: &'a str) -> Self {
        OpenTags {
            scanner: Scanner::new(input),
        }
    }
}

impl<'a> Iterator for OpenTags<'a> {
    type Item = TagMatch<'a>;

    fn next(&mut self) -> Option<TagMatch<'a>> {
        loop {
            let lt = self.scanner.find_tag_start()?;
            // The character after '<' must exist and must not be '/'.
            // It may be anything else, '>' included: the name consumes at
            // least one character, so the terminating '>' is the first one
            // at lt + 2 or later.
            match self.scanner.byte_at(lt + 1) {
                None | Some(b'/') => {
                    self.scanner.advance_to(lt + 1);
                    continue;
                }
                Some(_) => {}
            }
            let gt = match self.scanner.find_tag_end_from(lt + 2) {
                Some(gt) => gt,
                // No '>' remains, so no later candidate can match either
                None => return None,
            };
            let name = self.scanner.slice(lt + 1, gt).trim();
            self.scanner.advance_to(gt + 1);
            return Some(TagMatch {
                name,
                position: self.scanner.char_position(),
            });
        }
    }
}

/// Iterator over closing-tag occurrences
pub struct CloseTags<'a> {
    scanner: Scanner<'a>,
}

impl<'a> CloseTags<'a> {
    /// Create a closing-tag scan over the given text
    #[inline]
    pub fn new(input: &'a str) -> Self {
        CloseTags {
            scanner: Scanner::new(input),
        }
    }
}

impl<'a> Iterator for CloseTags<'a> {
    type Item = TagMatch<'a>;

    fn next(&mut self) -> Option<TagMatch<'a>> {
        loop {
            let lt = self.scanner.find_tag_start()?;
            if self.scanner.byte_at(lt + 1) != Some(b'/') {
                self.scanner.advance_to(lt + 1);
                continue;
            }
            // The name may be empty ('</>'), so the terminating '>' is the
            // first one at lt + 2 or later.
            let gt = match self.scanner.find_tag_end_from(lt + 2) {
                Some(gt) => gt,
                None => return None,
            };
            let name = self.scanner.slice(lt + 2, gt).trim();
            self.scanner.advance_to(lt);
            let position = self.scanner.char_position();
            self.scanner.advance_to(gt + 1);
            return Some(TagMatch { name, position });
        }
    }
}
