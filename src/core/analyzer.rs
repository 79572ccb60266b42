/// Core resume analysis pipeline
///
/// This file contains the ResumeAnalyzer, which coordinates feature
/// extraction, scoring, aggregation and feedback generation into a single
/// entry point. Every call is an independent pure computation over its
/// input text; nothing is shared or retained between invocations.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::features::{self, FeatureSet, MIN_WORD_COUNT};
use crate::core::feedback::generate_feedback;
use crate::core::patterns::{self, Vocabulary};
use crate::core::scores::{self, ScoreSet};

/// Complete result of analyzing one resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub features: FeatureSet,
    #[serde(flatten)]
    pub scores: ScoreSet,
    /// Problems found, in rule-ladder order
    pub issues: Vec<String>,
    /// Suggestions (acknowledgments and fixes), in rule-ladder order
    pub suggestions: Vec<String>,
}

/// Fixed result returned for empty or sub-threshold input.
///
/// The scoring formulas are degenerate below the word threshold, so this is
/// a contract constant rather than a computed value.
fn default_result() -> AnalysisResult {
    AnalysisResult {
        features: FeatureSet::default(),
        scores: ScoreSet {
            readability: 0,
            ats: 25,
            impact: 0,
            formatting: 25,
            overall: 12,
        },
        issues: vec!["Resume content is too short or empty".to_string()],
        suggestions: vec!["Add at least 200 words to your resume".to_string()],
    }
}

/// Resume analyzer configured with a vocabulary
#[derive(Debug, Clone, Default)]
pub struct ResumeAnalyzer {
    vocab: Vocabulary,
}

impl ResumeAnalyzer {
    /// Create an analyzer with the standard vocabularies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with a custom vocabulary.
    pub fn with_vocabulary(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// Analyze raw resume text.
    ///
    /// Total over string input: every input, including the empty string,
    /// yields a well-formed result. Inputs with fewer than
    /// [`MIN_WORD_COUNT`] words produce the fixed default result.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw resume text, untrimmed, possibly empty
    ///
    /// # Returns
    ///
    /// The complete analysis: features, scores, issues and suggestions
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        if text.trim().is_empty() {
            return default_result();
        }

        let lower_text = text.to_lowercase();
        let words = features::tokenize(&lower_text);
        if words.len() < MIN_WORD_COUNT {
            debug!("input below {MIN_WORD_COUNT}-word threshold, returning default result");
            return default_result();
        }

        let features = features::extract_features(text, &lower_text, &words, &self.vocab);

        let readability = scores::readability_score(&words, features.sentence_count);
        let ats = scores::ats_score(&features, self.vocab.ats_keywords.len());
        let impact = scores::impact_score(&features, self.vocab.action_verbs.len());
        let formatting = scores::formatting_score(
            text,
            patterns::count_matches(&lower_text, self.vocab.section_headers),
        );
        let scores = ScoreSet {
            readability,
            ats,
            impact,
            formatting,
            overall: scores::overall_score(readability, ats, impact, formatting),
        };
        debug!(
            "scored {} words: readability={} ats={} impact={} formatting={} overall={}",
            features.word_count, readability, ats, impact, formatting, scores.overall
        );

        let feedback = generate_feedback(&features, &scores);

        AnalysisResult {
            features,
            scores,
            issues: feedback.issues,
            suggestions: feedback.suggestions,
        }
    }
}

/// Analyze resume text with the standard vocabularies.
///
/// Convenience entry point for callers that do not need a configured
/// [`ResumeAnalyzer`].
pub fn analyze(text: &str) -> AnalysisResult {
    ResumeAnalyzer::new().analyze(text)
}
