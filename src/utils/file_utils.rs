/// Resume file intake
///
/// This module obtains resume text for the analysis pipeline: it reads the
/// file, enforces the size cap, and decodes to UTF-8. Read failures are
/// reported through a dedicated error type so callers can distinguish them
/// from analysis output — the pipeline itself never fails and is only ever
/// invoked with text that passed these checks.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Maximum accepted resume size in bytes (5 MB).
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Errors produced while obtaining resume text
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("file too large ({size} bytes, max {MAX_RESUME_BYTES})")]
    TooLarge { size: u64 },

    #[error("file is not valid UTF-8 text: {0}")]
    NotText(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a resume file as text, enforcing the size cap.
///
/// # Arguments
///
/// * `path` - Path to the resume file
///
/// # Returns
///
/// The decoded text, or an [`IntakeError`] describing why the file cannot
/// be analyzed
pub fn read_resume_text(path: &Path) -> Result<String, IntakeError> {
    if !path.exists() {
        return Err(IntakeError::NotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(IntakeError::NotAFile(path.to_path_buf()));
    }

    let size = fs::metadata(path)?.len();
    if size > MAX_RESUME_BYTES {
        return Err(IntakeError::TooLarge { size });
    }
    debug!("reading resume {} ({} bytes)", path.display(), size);

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| IntakeError::NotText(path.to_path_buf()))
}

/// Check whether a path looks like a plain-text resume by extension.
///
/// Used by directory traversal to skip binary formats the analyzer does not
/// decode (PDF, DOCX and friends need conversion to text first).
pub fn is_text_resume(path: &Path) -> bool {
    match path.extension() {
        Some(ext) => matches!(
            ext.to_string_lossy().to_lowercase().as_str(),
            "txt" | "text" | "md"
        ),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_valid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.txt");
        fs::write(&path, "plain resume text").expect("write");

        let text = read_resume_text(&path).expect("read");
        assert_eq!(text, "plain resume text");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_resume_text(Path::new("/no/such/resume.txt")).unwrap_err();
        assert!(matches!(err, IntakeError::NotFound(_)));
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("huge.txt");
        let content = vec![b'a'; (MAX_RESUME_BYTES + 1) as usize];
        fs::write(&path, content).expect("write");

        let err = read_resume_text(&path).unwrap_err();
        assert!(matches!(err, IntakeError::TooLarge { .. }));
    }

    #[test]
    fn test_binary_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("resume.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x42]).expect("write");

        let err = read_resume_text(&path).unwrap_err();
        assert!(matches!(err, IntakeError::NotText(_)));
    }

    #[test]
    fn test_text_resume_extensions() {
        assert!(is_text_resume(Path::new("cv.txt")));
        assert!(is_text_resume(Path::new("cv.MD")));
        assert!(!is_text_resume(Path::new("cv.pdf")));
        assert!(!is_text_resume(Path::new("cv")));
    }
}
