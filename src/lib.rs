/// This crate computes the HD-D (Hypergeometric Distribution D) lexical
/// diversity metric over a corpus of tokenized texts.
pub mod errors;
pub mod hdd;

/// HD-D Scorer
/// The top-level struct of this crate. It accumulates a corpus of tokenized
/// texts and scores texts against the corpus statistics.
///
/// For each distinct word type in a text, it estimates the probability that
/// the type appears at least once in a fixed-size random sub-sample of the
/// corpus, then groups the per-type estimates into one score per text.
///
/// Internally, it holds:
/// - The configuration (aggregation mode, sample size cap)
/// - An optional tokenizer callback for raw-text input
/// - The accumulated `Corpus` (absent until the first `fit`)
///
/// `fit` mutates the corpus; `calculate` and the `process_corpus` drivers
/// only read it. Interleaving fits and scoring across threads needs external
/// synchronization; a fitted scorer used read-only is safe to share.
pub use hdd::HddScorer;

/// Scorer configuration: aggregation mode and sample size cap.
/// Defaults to mean aggregation with the sample size capped at 75.
/// `max_sample_size` must be positive; zero is rejected at construction.
pub use hdd::HddConfig;

/// Aggregation mode for grouping per-type estimates into one score:
/// - Sum: plain sum over the text's types
/// - Mean: sum divided by the token count (no value for an empty text)
/// - Root: sum divided by the square root of the token count (same rule)
pub use hdd::scoring::Aggregation;

/// Corpus for the HD-D scorer
/// This struct manages the accumulated statistics over all fitted texts:
/// - The token frequency table (insertion-ordered, deterministic iteration)
/// - The total token count
/// - The fitted texts themselves, in fit order
///
/// Counts only grow; texts are appended, never removed.
///
/// # Serialization
/// Supported, so callers can persist a fitted corpus themselves.
pub use hdd::corpus::Corpus;

/// Tagged inputs for `fit` and `calculate`.
/// The variant decides the tokenizer mode at the call site: `Raw` requires a
/// configured tokenizer, `Tokenized` requires none. A mismatch is an error,
/// checked before any state changes.
pub use hdd::{TextInput, TextsInput};

/// Tokenizer callback type: one raw text in, its token sequence out
pub use hdd::Tokenizer;

/// Error type and Result alias for this crate
pub use errors::{HddError, Result};

/// Binomial coefficient and hypergeometric tail estimate.
/// Exposed for callers that want the raw per-type arithmetic; `choose` is
/// exact over big integers, `hyper` is the at-least-once estimate scaled by
/// the reciprocal sample size as the HD-D metric defines it.
pub use hdd::hypergeom::{choose, hyper};
