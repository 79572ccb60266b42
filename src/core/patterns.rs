/// Pattern and vocabulary definitions for the resume analyzer
///
/// This module contains the fixed vocabularies (action verbs, ATS keywords,
/// summary phrases, section headers) and the compiled regex patterns used to
/// detect contact information and quantified achievements in resume text.

use lazy_static::lazy_static;
use regex::Regex;

/// Action verbs associated with strong resume phrasing.
pub const ACTION_VERBS: &[&str] = &[
    "managed", "led", "developed", "created", "implemented", "designed",
    "built", "improved", "increased", "decreased", "reduced", "achieved",
    "accomplished", "organized", "coordinated", "directed", "established",
    "enhanced", "expanded", "facilitated", "generated", "handled",
    "initiated", "launched", "optimized", "oversaw", "produced", "promoted",
    "provided", "reorganized", "resolved", "resulted", "spearheaded",
    "streamlined", "structured", "supervised", "transformed", "upgraded",
];

/// Keywords that applicant tracking systems commonly index on.
pub const ATS_KEYWORDS: &[&str] = &[
    "experience", "skills", "education", "certification", "programming",
    "technical", "communication", "leadership", "project", "achievement",
];

/// Phrases indicating a professional summary or objective section.
pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "professional profile", "about"];

/// Canonical resume section names used for formatting checks.
pub const SECTION_HEADERS: &[&str] = &[
    "experience", "education", "skills", "certifications", "projects", "achievements",
];

/// Immutable vocabulary configuration consumed by feature extraction and
/// scoring.
///
/// The default wires up the fixed vocabularies above; tests (or callers with
/// a different domain) can swap in their own wordlists.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub action_verbs: &'static [&'static str],
    pub ats_keywords: &'static [&'static str],
    pub summary_keywords: &'static [&'static str],
    pub section_headers: &'static [&'static str],
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            action_verbs: ACTION_VERBS,
            ats_keywords: ATS_KEYWORDS,
            summary_keywords: SUMMARY_KEYWORDS,
            section_headers: SECTION_HEADERS,
        }
    }
}

lazy_static! {
    /// Email-shaped token
    pub static ref EMAIL_PATTERN: Regex =
        Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();

    /// 10-digit phone number in 3-3-4 grouping, separators optional
    pub static ref PHONE_PATTERN: Regex =
        Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").unwrap();

    /// Quantified achievement: percentage, currency amount, or a number
    /// (with optional K/M/B multiplier) adjacent to an outcome word
    pub static ref METRICS_PATTERN: Regex = Regex::new(
        r"(?i)\d+%|\$\d+|\d+[KMB]?\s*(?:increase|decrease|growth|improvement|revenue|profit|cost|save)"
    ).unwrap();
}

/// Check whether text contains both an email address and a phone number.
///
/// # Arguments
///
/// * `text` - Raw (not lowercased) text to scan
///
/// # Returns
///
/// True iff at least one email-shaped token and one phone-shaped token occur
pub fn has_contact_info(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text) && PHONE_PATTERN.is_match(text)
}

/// Check whether text contains a quantified achievement.
///
/// This is a stateless boolean test; every call scans from the start of the
/// input.
pub fn has_metrics(text: &str) -> bool {
    METRICS_PATTERN.is_match(text)
}

/// Count how many keywords from a vocabulary occur in the text.
///
/// Each keyword is counted at most once, regardless of how often it occurs.
///
/// # Arguments
///
/// * `lower_text` - Text already lowercased by the caller
/// * `keywords` - Vocabulary to match against
///
/// # Returns
///
/// Number of distinct keywords present
pub fn count_matches(lower_text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| lower_text.contains(*kw)).count()
}

/// Count distinct canonical section headers present in the text.
pub fn count_sections(lower_text: &str) -> usize {
    count_matches(lower_text, SECTION_HEADERS)
}
