pub mod corpus;
pub mod hypergeom;
pub mod scoring;

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::{HddError, Result};
use crate::hdd::corpus::Corpus;
use crate::hdd::scoring::{score_text, Aggregation};

/// Tokenizer callback: turns one raw text into its ordered token sequence.
/// Supplied by the caller at construction; the crate ships none of its own.
pub type Tokenizer = Box<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Collection input for `fit`.
/// The variant fixes the required tokenizer mode for the whole call:
/// `Raw` needs a configured tokenizer, `Tokenized` forbids one.
#[derive(Debug, Clone)]
pub enum TextsInput {
    /// Raw strings, one per text
    Raw(Vec<String>),
    /// Pre-tokenized texts
    Tokenized(Vec<Vec<String>>),
}

impl TextsInput {
    fn is_empty(&self) -> bool {
        match self {
            TextsInput::Raw(texts) => texts.is_empty(),
            TextsInput::Tokenized(texts) => texts.is_empty(),
        }
    }
}

/// Single-text input for `calculate`, same tokenizer rule as `TextsInput`
#[derive(Debug, Clone)]
pub enum TextInput {
    Raw(String),
    Tokenized(Vec<String>),
}

/// Scorer configuration, fixed for the instance lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HddConfig {
    /// How per-type estimates are grouped into one score per text
    pub aggregation: Aggregation,
    /// Cap on the hypergeometric sample size, so the binomial coefficients
    /// stay computable for long texts. Must be positive.
    pub max_sample_size: usize,
}

impl Default for HddConfig {
    fn default() -> Self {
        Self {
            aggregation: Aggregation::Mean,
            max_sample_size: 75,
        }
    }
}

/// HD-D lexical diversity scorer.
///
/// Accumulates a corpus of tokenized texts via [`fit`](HddScorer::fit), then
/// scores texts against the corpus statistics: per distinct word type, the
/// probability of appearing at least once in a fixed-size random sub-sample,
/// grouped into one score per text.
///
/// Scoring reads the corpus state without mutating it, so a fitted scorer
/// can be shared across threads for batch work; only `fit` needs exclusive
/// access.
pub struct HddScorer {
    config: HddConfig,
    tokenizer: Option<Tokenizer>,
    corpus: Option<Corpus>,
}

impl fmt::Debug for HddScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HddScorer")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.is_some())
            .field("corpus", &self.corpus)
            .finish()
    }
}

impl Default for HddScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl HddScorer {
    /// Create a scorer with the default configuration (mean aggregation,
    /// sample size capped at 75, no tokenizer)
    pub fn new() -> Self {
        Self {
            config: HddConfig::default(),
            tokenizer: None,
            corpus: None,
        }
    }

    /// Create a scorer from an explicit configuration
    pub fn with_config(config: HddConfig) -> Result<Self> {
        if config.max_sample_size == 0 {
            return Err(HddError::invalid_config(
                "max_sample_size must be a positive integer",
            ));
        }
        Ok(Self {
            config,
            tokenizer: None,
            corpus: None,
        })
    }

    /// Attach a tokenizer; `Raw` inputs become accepted, `Tokenized` inputs
    /// rejected, from here on
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &HddConfig {
        &self.config
    }

    /// Get the accumulated corpus; `None` until the first successful `fit`
    pub fn corpus(&self) -> Option<&Corpus> {
        self.corpus.as_ref()
    }

    /// Check whether `fit` has succeeded at least once
    pub fn is_fitted(&self) -> bool {
        self.corpus.is_some()
    }

    /// Extend the corpus with new texts.
    ///
    /// Tokenizes raw inputs through the configured tokenizer, appends the
    /// token sequences to the held collection, and merges their counts into
    /// the frequency table and total. The first call creates the corpus;
    /// later calls extend it.
    ///
    /// Fails without touching any state when the input is empty or when the
    /// input variant disagrees with the tokenizer configuration.
    pub fn fit(&mut self, texts: TextsInput) -> Result<()> {
        if texts.is_empty() {
            return Err(HddError::empty_input("fit requires at least one text"));
        }
        let tokenized = match (texts, &self.tokenizer) {
            (TextsInput::Raw(raw), Some(tokenize)) => {
                raw.iter().map(|text| tokenize(text)).collect()
            }
            (TextsInput::Tokenized(tokenized), None) => tokenized,
            (TextsInput::Raw(_), None) => {
                return Err(HddError::tokenizer_mismatch(
                    "raw text input requires a configured tokenizer",
                ))
            }
            (TextsInput::Tokenized(_), Some(_)) => {
                return Err(HddError::tokenizer_mismatch(
                    "pre-tokenized input conflicts with the configured tokenizer",
                ))
            }
        };
        self.corpus
            .get_or_insert_with(Corpus::new)
            .extend_texts(tokenized);
        Ok(())
    }

    /// Score one text against the current corpus statistics, without
    /// mutating them.
    ///
    /// Returns `Ok(None)` for an empty text under `Mean` or `Root`
    /// aggregation; that is a degenerate score, not an error.
    pub fn calculate(&self, text: TextInput) -> Result<Option<f64>> {
        let corpus = self
            .corpus
            .as_ref()
            .ok_or_else(|| HddError::not_fitted("calculate"))?;
        let tokens = match (text, &self.tokenizer) {
            (TextInput::Raw(raw), Some(tokenize)) => tokenize(&raw),
            (TextInput::Tokenized(tokens), None) => tokens,
            (TextInput::Raw(_), None) => {
                return Err(HddError::tokenizer_mismatch(
                    "raw text input requires a configured tokenizer",
                ))
            }
            (TextInput::Tokenized(_), Some(_)) => {
                return Err(HddError::tokenizer_mismatch(
                    "pre-tokenized input conflicts with the configured tokenizer",
                ))
            }
        };
        Ok(self.score_tokens(&tokens, corpus))
    }

    /// Score every fitted text, in fit order
    pub fn process_corpus(&self) -> Result<Vec<Option<f64>>> {
        self.process_corpus_with_progress(|_| {})
    }

    /// Score every fitted text, reporting the running count of scored texts
    /// to `observer` after each one. The observer is informational only and
    /// has no effect on the computed values.
    pub fn process_corpus_with_progress<F>(&self, mut observer: F) -> Result<Vec<Option<f64>>>
    where
        F: FnMut(usize),
    {
        let corpus = self
            .corpus
            .as_ref()
            .ok_or_else(|| HddError::not_fitted("process_corpus"))?;
        let mut scores = Vec::with_capacity(corpus.text_num());
        for (done, text) in corpus.texts().iter().enumerate() {
            scores.push(self.score_tokens(text, corpus));
            observer(done + 1);
        }
        Ok(scores)
    }

    /// Score every fitted text using parallel processing.
    /// The frequency table and total are read-only snapshots for the whole
    /// batch, so the result matches the sequential driver, in the same order.
    pub fn process_corpus_parallel(&self) -> Result<Vec<Option<f64>>> {
        let corpus = self
            .corpus
            .as_ref()
            .ok_or_else(|| HddError::not_fitted("process_corpus_parallel"))?;
        Ok(corpus
            .texts()
            .par_iter()
            .map(|text| self.score_tokens(text, corpus))
            .collect())
    }

    fn score_tokens(&self, tokens: &[String], corpus: &Corpus) -> Option<f64> {
        score_text(
            tokens,
            corpus.token_counts(),
            corpus.total_tokens(),
            self.config.aggregation,
            self.config.max_sample_size,
        )
    }
}
