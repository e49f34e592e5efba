//! Summary sizing heuristic.
//!
//! Maps the size of an original document (in pages, possibly estimated) to a
//! target length for its summary. Everything here is plain arithmetic: no I/O
//! and no failure modes.

use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPRESSION_RATIO: f64 = 0.20;
pub const DEFAULT_WORDS_PER_PAGE: u32 = 300;
pub const DEFAULT_WORDS_PER_SENTENCE: u32 = 17;
pub const DEFAULT_CHARS_PER_WORD: u32 = 5;

/// Target length of a summary, derived from the original page count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryTargetSpec {
    pub summary_pages: f64,
    pub total_words: u64,
    pub total_sentences: u64,
    pub chars_no_spaces: u64,
    pub chars_with_spaces: u64,
    pub original_pages: f64,
}

/// Reference figures for a single page at the configured density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerPageStats {
    pub words_per_page: u32,
    pub sentences_per_page: f64,
    pub chars_per_page_no_spaces: u64,
    pub chars_per_page_with_spaces: u64,
}

/// Parameters of the sizing heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingParams {
    pub compression_ratio: f64,
    pub words_per_page: u32,
    pub words_per_sentence: u32,
    pub chars_per_word: u32,
}

impl Default for SizingParams {
    fn default() -> Self {
        Self {
            compression_ratio: DEFAULT_COMPRESSION_RATIO,
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            words_per_sentence: DEFAULT_WORDS_PER_SENTENCE,
            chars_per_word: DEFAULT_CHARS_PER_WORD,
        }
    }
}

impl SizingParams {
    /// Computes the summary target for a document of `original_pages` pages.
    ///
    /// Zero, negative or NaN page counts yield an all-zero target rather than
    /// an error; guarding against degenerate documents is the caller's job.
    #[must_use]
    pub fn estimate(&self, original_pages: f64) -> SummaryTargetSpec {
        let summary_pages = (original_pages * self.compression_ratio).max(0.0);
        let total_words = summary_pages * f64::from(self.words_per_page);
        let total_sentences = if self.words_per_sentence == 0 {
            0.0
        } else {
            total_words / f64::from(self.words_per_sentence)
        };
        let chars_no_spaces = total_words * f64::from(self.chars_per_word);
        let chars_with_spaces = total_words * (f64::from(self.chars_per_word) + 1.0);

        SummaryTargetSpec {
            summary_pages: round_to(summary_pages, 2),
            total_words: round_count(total_words),
            total_sentences: round_count(total_sentences),
            chars_no_spaces: round_count(chars_no_spaces),
            chars_with_spaces: round_count(chars_with_spaces),
            original_pages,
        }
    }

    #[must_use]
    pub fn per_page(&self) -> PerPageStats {
        let sentences_per_page = if self.words_per_sentence == 0 {
            0.0
        } else {
            f64::from(self.words_per_page) / f64::from(self.words_per_sentence)
        };

        PerPageStats {
            words_per_page: self.words_per_page,
            sentences_per_page: round_to(sentences_per_page, 2),
            chars_per_page_no_spaces: u64::from(self.words_per_page)
                * u64::from(self.chars_per_word),
            chars_per_page_with_spaces: u64::from(self.words_per_page)
                * (u64::from(self.chars_per_word) + 1),
        }
    }

    /// Estimates a page count for text that has no intrinsic pagination.
    #[must_use]
    pub fn estimate_pages(&self, text: &str) -> f64 {
        if self.words_per_page == 0 {
            return 0.0;
        }
        word_count(text) as f64 / f64::from(self.words_per_page)
    }
}

/// [`SizingParams::estimate`] with the default parameters.
#[must_use]
pub fn estimate_summary_target(original_pages: f64) -> SummaryTargetSpec {
    SizingParams::default().estimate(original_pages)
}

/// Page estimate for raw text at the default 300 words per page.
#[must_use]
pub fn estimate_pages_from_words(text: &str) -> f64 {
    SizingParams::default().estimate_pages(text)
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

// Ties go to even so that targets match the figures users already see.
fn round_count(value: f64) -> u64 {
    value.max(0.0).round_ties_even() as u64
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
