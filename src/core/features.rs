/// Feature extraction from raw resume text
///
/// This module derives the fixed set of countable and boolean features that
/// the score calculators and the feedback generator consume. Extraction is a
/// pure function of the input text: no state is kept between calls.

use serde::{Deserialize, Serialize};

use crate::core::patterns::{self, Vocabulary};

/// Inputs below this word count are not scored; the pipeline returns the
/// fixed default result instead.
pub const MIN_WORD_COUNT: usize = 50;

/// Countable and boolean properties extracted from resume text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSet {
    /// Number of whitespace-separated words
    pub word_count: usize,
    /// Both an email address and a phone number are present
    pub has_contact_info: bool,
    /// A summary/objective phrase is present
    pub has_summary: bool,
    /// A quantified achievement is present
    pub has_metrics: bool,
    /// Distinct action verbs found (out of the fixed vocabulary)
    pub action_verb_count: usize,
    /// Non-empty sentence fragments, clamped to at least 1
    pub sentence_count: usize,
    /// Distinct ATS keywords found
    pub keyword_matches: usize,
}

/// Split lowercased text into word tokens.
///
/// Empty tokens are discarded; punctuation stays attached to its word.
pub fn tokenize(lower_text: &str) -> Vec<&str> {
    lower_text.split_whitespace().collect()
}

/// Count non-empty sentence fragments, clamped to a minimum of 1.
///
/// Sentences are delimited by `.`, `!` or `?`. The clamp guards the
/// words-per-sentence divisions downstream.
pub fn count_sentences(text: &str) -> usize {
    text.split(|c| matches!(c, '.' | '!' | '?'))
        .filter(|fragment| !fragment.trim().is_empty())
        .count()
        .max(1)
}

/// Extract all features from pre-tokenized resume text.
///
/// The caller is expected to have checked `words.len() >= MIN_WORD_COUNT`;
/// this function itself does no short-circuiting.
///
/// # Arguments
///
/// * `text` - Original raw text (case-sensitive patterns run on this)
/// * `lower_text` - Lowercased copy (keyword matching runs on this)
/// * `words` - Tokens produced by [`tokenize`]
/// * `vocab` - Vocabularies to match against
pub fn extract_features(
    text: &str,
    lower_text: &str,
    words: &[&str],
    vocab: &Vocabulary,
) -> FeatureSet {
    FeatureSet {
        word_count: words.len(),
        has_contact_info: patterns::has_contact_info(text),
        has_summary: patterns::count_matches(lower_text, vocab.summary_keywords) > 0,
        has_metrics: patterns::has_metrics(text),
        action_verb_count: patterns::count_matches(lower_text, vocab.action_verbs),
        sentence_count: count_sentences(text),
        keyword_matches: patterns::count_matches(lower_text, vocab.ats_keywords),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> FeatureSet {
        let vocab = Vocabulary::default();
        let lower = text.to_lowercase();
        let words = tokenize(&lower);
        extract_features(text, &lower, &words, &vocab)
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let features = extract("one  two\tthree\n\nfour ");
        assert_eq!(features.word_count, 4);
    }

    #[test]
    fn test_sentence_count_clamps_to_one() {
        assert_eq!(count_sentences("no terminator here"), 1);
        assert_eq!(count_sentences(""), 1);
        assert_eq!(count_sentences("one. two! three?"), 3);
        // Runs of terminators do not create empty sentences
        assert_eq!(count_sentences("what?! really..."), 2);
    }

    #[test]
    fn test_contact_and_summary_detection() {
        let features = extract(
            "Jane Doe, jane.doe@example.com, 555-123-4567. \
             Professional Summary: engineer.",
        );
        assert!(features.has_contact_info);
        assert!(features.has_summary);
    }

    #[test]
    fn test_action_verbs_counted_once_each() {
        let features = extract("Led a team. Led another team. Developed tools.");
        assert_eq!(features.action_verb_count, 2);
    }

    #[test]
    fn test_metrics_detection_case_insensitive() {
        let features = extract("Delivered a 25% INCREASE in throughput.");
        assert!(features.has_metrics);
    }

    #[test]
    fn test_plain_text_has_no_features() {
        let features = extract("just some ordinary prose with nothing notable");
        assert!(!features.has_contact_info);
        assert!(!features.has_summary);
        assert!(!features.has_metrics);
        assert_eq!(features.action_verb_count, 0);
    }
}
