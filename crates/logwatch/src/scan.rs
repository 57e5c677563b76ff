//! One-shot scans over log files and directories.

use std::path::Path;

use cfxtoken_extract::{Token, extract};

use crate::ScanError;

/// Runs the extractor over a block of text.
pub fn scan_text(text: &str) -> Option<&str> {
    extract(text)
}

/// Reads a file and extracts a token from its contents.
///
/// The file is decoded lossily, so non-UTF-8 log encodings still scan.
/// Absence is `Ok(None)`; only a failed read is an error.
pub fn scan_file(path: &Path) -> Result<Option<Token>, ScanError> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let token = extract(&text).map(Token::from);
    if token.is_some() {
        tracing::debug!(file = %path.display(), "token extracted from file");
    }
    Ok(token)
}

/// Scans every log-like file in a directory, first hit wins.
///
/// A file qualifies when its name contains `log`. Files are visited in
/// name order so results are deterministic. Unreadable entries are
/// skipped; the scan only fails if the directory itself cannot be read.
pub fn scan_dir(dir: &Path) -> Result<Option<Token>, ScanError> {
    let mut candidates: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.to_lowercase().contains("log"))
        })
        .collect();
    candidates.sort_unstable();

    for path in candidates {
        match scan_file(&path) {
            Ok(Some(token)) => {
                tracing::info!(file = %path.display(), "token found");
                return Ok(Some(token));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_44: &str = "aA1bB2cC3dD4eE5fF6gG7hH8iI9jJ0kK1lL2mM3nN4aa";

    #[test]
    fn scan_text_delegates_to_extractor() {
        let text = format!("token: {TOKEN_44}");
        assert_eq!(scan_text(&text), Some(TOKEN_44));
        assert_eq!(scan_text("nothing here"), None);
    }

    #[test]
    fn scan_file_finds_labeled_token() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("CitizenFX.log");
        std::fs::write(&path, format!("boot ok\nauth_token: {TOKEN_44}\n")).unwrap();

        let token = scan_file(&path).unwrap().unwrap();
        assert_eq!(token.as_str(), TOKEN_44);
    }

    #[test]
    fn scan_file_absence_is_ok_none() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.log");
        std::fs::write(&path, "just ordinary lines\n").unwrap();

        assert!(scan_file(&path).unwrap().is_none());
    }

    #[test]
    fn scan_file_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = scan_file(&tmp.path().join("does-not-exist.log"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn scan_file_tolerates_invalid_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("mixed.log");
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend_from_slice(format!("\ntoken: {TOKEN_44}\n").as_bytes());
        std::fs::write(&path, bytes).unwrap();

        let token = scan_file(&path).unwrap().unwrap();
        assert_eq!(token.as_str(), TOKEN_44);
    }

    #[test]
    fn scan_dir_first_hit_wins() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("a_log.txt"),
            format!("token: {TOKEN_44}\n"),
        )
        .unwrap();
        std::fs::write(
            tmp.path().join("b_log.txt"),
            "token: zZ9zZ8zZ7zZ6zZ5zZ4zZ3zZ2zZ1zZ0zZ9zZ8zZ7\n",
        )
        .unwrap();

        let token = scan_dir(tmp.path()).unwrap().unwrap();
        assert_eq!(token.as_str(), TOKEN_44);
    }

    #[test]
    fn scan_dir_skips_non_log_files() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join("readme.txt"),
            format!("token: {TOKEN_44}\n"),
        )
        .unwrap();

        assert!(scan_dir(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn scan_dir_empty_is_absence() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(scan_dir(tmp.path()).unwrap().is_none());
    }

    #[test]
    fn scan_dir_missing_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let result = scan_dir(&tmp.path().join("nope"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }
}
