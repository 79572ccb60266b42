/// Score calculators and aggregation
///
/// Four independent, stateless scoring functions (readability, ATS
/// compatibility, impact, formatting) plus the equal-weight aggregator.
/// Every score is an integer clamped to [0, 100].

use serde::{Deserialize, Serialize};

use crate::core::features::FeatureSet;

/// The four sub-scores and their aggregate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub readability: u8,
    pub ats: u8,
    pub impact: u8,
    pub formatting: u8,
    pub overall: u8,
}

/// Clamp a raw score into [0, 100] and round to the nearest integer.
fn clamp_score(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Flesch-Reading-Ease-style readability score.
///
/// Average word length is sampled over at most the first 500 words to bound
/// cost on long documents; average sentence length uses the full word count.
/// The divisor 5 is a fixed syllable-length normalizer, not a computed
/// syllable count.
///
/// # Arguments
///
/// * `words` - Word tokens of the whole document
/// * `sentence_count` - Non-empty sentence count (0 yields a score of 0)
pub fn readability_score(words: &[&str], sentence_count: usize) -> u8 {
    if sentence_count == 0 || words.is_empty() {
        return 0;
    }

    let sample = words.len().min(500);
    let total_word_length: usize = words[..sample].iter().map(|w| w.len()).sum();
    let avg_word_length = total_word_length as f64 / sample as f64;
    let avg_sentence_length = words.len() as f64 / sentence_count as f64;

    clamp_score(206.835 - 1.015 * avg_sentence_length - 84.6 * (avg_word_length / 5.0))
}

/// ATS compatibility score.
///
/// Base 50, +10 for contact info, +10 for a summary, up to +20 scaled by
/// keyword coverage, up to +10 scaled by word count (saturating at 500
/// words).
pub fn ats_score(features: &FeatureSet, total_keywords: usize) -> u8 {
    let mut score = 50.0;
    if features.has_contact_info {
        score += 10.0;
    }
    if features.has_summary {
        score += 10.0;
    }
    if total_keywords > 0 {
        score += (features.keyword_matches as f64 / total_keywords as f64) * 20.0;
    }
    score += (features.word_count as f64 / 50.0).min(10.0);
    clamp_score(score)
}

/// Impact score.
///
/// Base 40, up to +30 scaled by action verb coverage, +20 flat for metrics,
/// up to +10 scaled by sentence count (saturating at 50 sentences).
pub fn impact_score(features: &FeatureSet, total_action_verbs: usize) -> u8 {
    let mut score = 40.0;
    if total_action_verbs > 0 {
        score += (features.action_verb_count as f64 / total_action_verbs as f64) * 30.0;
    }
    if features.has_metrics {
        score += 20.0;
    }
    score += (features.sentence_count as f64 / 5.0).min(10.0);
    clamp_score(score)
}

/// Formatting score.
///
/// Base 50, +15 if any line break is present, +5 per distinct canonical
/// section header (at most 4 counted).
pub fn formatting_score(text: &str, distinct_sections: usize) -> u8 {
    let mut score = 50.0;
    if text.contains('\n') {
        score += 15.0;
    }
    score += ((distinct_sections * 5) as f64).min(20.0);
    clamp_score(score)
}

/// Rounded arithmetic mean of the four sub-scores.
pub fn overall_score(readability: u8, ats: u8, impact: u8, formatting: u8) -> u8 {
    let sum = readability as f64 + ats as f64 + impact as f64 + formatting as f64;
    (sum / 4.0).round() as u8
}
