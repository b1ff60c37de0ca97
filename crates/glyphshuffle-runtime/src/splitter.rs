#![forbid(unsafe_code)]

//! Reference text splitter over plain strings.
//!
//! Real surfaces derive lines from layout; this splitter is the honest
//! approximation for headless hosts and tests: `\n` separates lines,
//! Unicode word boundaries separate word groups, and grapheme clusters are
//! the leaf characters. Zero-width clusters never become cells; there is
//! nothing visible to scramble. Lines that segment to no words (blank or
//! all-whitespace) produce no line at all, so a block with no segmentable
//! text yields an empty hierarchy.
//!
//! The hierarchy is produced in the contract's two conceptual passes
//! (lines and word groups first, leaves per word second), and leaf handles
//! are numbered in reading order from a per-splitter counter.

use glyphshuffle_core::{ElemId, SplitChar, SplitLine, SplitText, SplitWord, TextSplitter};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Grapheme-cluster splitter for plain text.
#[derive(Debug, Clone, Default)]
pub struct GraphemeSplitter {
    next_elem: u64,
}

impl GraphemeSplitter {
    /// Create a splitter with its handle counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn split_word(&mut self, word: &str) -> SplitWord {
        let mut chars = Vec::new();
        for grapheme in word.graphemes(true) {
            if grapheme.width() == 0 {
                continue;
            }
            chars.push(SplitChar {
                elem: ElemId(self.next_elem),
                glyph: grapheme.to_string(),
            });
            self.next_elem += 1;
        }
        SplitWord { chars }
    }
}

impl TextSplitter for GraphemeSplitter {
    fn split(&mut self, text: &str) -> SplitText {
        let mut lines = Vec::new();
        for raw_line in text.split('\n') {
            let words: Vec<SplitWord> = raw_line
                .split_word_bounds()
                .filter(|chunk| !chunk.trim().is_empty())
                .map(|chunk| self.split_word(chunk))
                .collect();
            if words.is_empty() {
                continue;
            }
            lines.push(SplitLine { words });
        }
        SplitText { lines }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_lines_words_and_chars() {
        let mut splitter = GraphemeSplitter::new();
        let split = splitter.split("HI YOU\nBYE");
        assert_eq!(split.lines.len(), 2);
        assert_eq!(split.lines[0].words.len(), 2);
        assert_eq!(split.lines[0].words[0].chars.len(), 2);
        assert_eq!(split.lines[0].words[1].chars.len(), 3);
        assert_eq!(split.lines[1].words.len(), 1);
        assert_eq!(split.leaf_count(), 8);
    }

    #[test]
    fn handles_numbered_in_reading_order() {
        let mut splitter = GraphemeSplitter::new();
        let split = splitter.split("AB C");
        let elems: Vec<u64> = split
            .lines
            .iter()
            .flat_map(|line| &line.words)
            .flat_map(|word| &word.chars)
            .map(|c| c.elem.0)
            .collect();
        assert_eq!(elems, vec![0, 1, 2]);
    }

    #[test]
    fn counter_spans_multiple_splits() {
        let mut splitter = GraphemeSplitter::new();
        let first = splitter.split("AB");
        let second = splitter.split("CD");
        assert_eq!(first.lines[0].words[0].chars[1].elem, ElemId(1));
        assert_eq!(second.lines[0].words[0].chars[0].elem, ElemId(2));
    }

    #[test]
    fn empty_text_yields_no_lines() {
        let mut splitter = GraphemeSplitter::new();
        assert!(splitter.split("").lines.is_empty());
        assert!(splitter.split("   \n\t\n  ").lines.is_empty());
    }

    #[test]
    fn blank_lines_between_content_are_dropped() {
        let mut splitter = GraphemeSplitter::new();
        let split = splitter.split("A\n\nB");
        assert_eq!(split.lines.len(), 2);
    }

    #[test]
    fn grapheme_clusters_stay_single_cells() {
        let mut splitter = GraphemeSplitter::new();
        // é as e + combining acute: one cluster, one cell.
        let split = splitter.split("e\u{301}t");
        assert_eq!(split.leaf_count(), 2);
        assert_eq!(split.lines[0].words[0].chars[0].glyph, "e\u{301}");
    }

    #[test]
    fn punctuation_forms_its_own_word_group() {
        let mut splitter = GraphemeSplitter::new();
        let split = splitter.split("HI!");
        // Word boundaries put "HI" and "!" in separate groups; both animate.
        assert_eq!(split.leaf_count(), 3);
    }
}
