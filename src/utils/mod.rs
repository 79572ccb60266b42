/// Utility modules for the resume analyzer
///
/// This module contains the collaborators around the core pipeline: file
/// intake (reading and validating resume files) and output formatting.

pub mod file_utils;
pub mod output_formatter;
