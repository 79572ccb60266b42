/// Core module for resume analysis
///
/// This module contains the analysis pipeline: vocabulary and pattern
/// definitions, feature extraction, score calculation, and rule-based
/// feedback generation.

pub mod analyzer;
pub mod features;
pub mod feedback;
pub mod patterns;
pub mod scores;
