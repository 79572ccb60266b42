/// Resume Analyzer - resume quality scoring and feedback
///
/// This library analyzes raw resume text and produces a structured quality
/// assessment: readability, ATS compatibility, impact and formatting
/// sub-scores, an aggregate overall score, and an ordered list of issues
/// and suggestions.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::analyzer::{analyze, AnalysisResult, ResumeAnalyzer};
pub use crate::core::features::FeatureSet;
pub use crate::core::patterns::Vocabulary;
pub use crate::core::scores::ScoreSet;
pub use crate::utils::file_utils::{read_resume_text, IntakeError, MAX_RESUME_BYTES};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a resume file and analyze its content.
///
/// This is a convenience function for simple use cases: it applies the
/// intake checks (existence, 5 MB size cap, UTF-8 decoding) and runs the
/// analysis pipeline on the decoded text.
///
/// # Arguments
///
/// * `file_path` - Path to the resume file
///
/// # Returns
///
/// The analysis result, or an [`IntakeError`] if the file cannot be read
pub fn analyze_resume_file<P: AsRef<std::path::Path>>(
    file_path: P,
) -> Result<AnalysisResult, IntakeError> {
    let text = read_resume_text(file_path.as_ref())?;
    Ok(analyze(&text))
}
