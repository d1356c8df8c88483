use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Accumulated corpus statistics.
///
/// Holds the token frequency table over everything fitted so far, the total
/// token count, and the ordered collection of fitted texts. Counts only ever
/// grow: texts are appended, never removed, and the sum of the table counts
/// always equals `total_tokens`.
///
/// The table is insertion-ordered, so iteration over the vocabulary is
/// deterministic across runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    token_counts: IndexMap<String, u64>,
    total_tokens: u64,
    texts: Vec<Vec<String>>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tokenized texts, merging their token counts into the running
    /// table and total. Equivalent to recounting the whole accumulated
    /// multiset from scratch, without the rescan.
    pub fn extend_texts(&mut self, texts: Vec<Vec<String>>) {
        for text in &texts {
            for token in text {
                *self.token_counts.entry(token.clone()).or_insert(0) += 1;
                self.total_tokens += 1;
            }
        }
        self.texts.extend(texts);
    }

    /// Get the corpus-wide count for a token; 0 for tokens never fitted
    pub fn token_count(&self, token: &str) -> u64 {
        self.token_counts.get(token).copied().unwrap_or(0)
    }

    /// Get the full frequency table
    pub fn token_counts(&self) -> &IndexMap<String, u64> {
        &self.token_counts
    }

    /// Get the total number of tokens across all fitted texts
    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    /// Get the fitted texts, in fit order
    pub fn texts(&self) -> &[Vec<String>] {
        &self.texts
    }

    /// Get the number of fitted texts
    pub fn text_num(&self) -> usize {
        self.texts.len()
    }

    /// Get the current vocabulary size (number of unique tokens)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.token_counts.len()
    }
}
