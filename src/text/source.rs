// Text source — reads a document from disk as an ordered list of lines.

use std::path::Path;

use tracing::debug;

use crate::error::DistanceError;

/// Read a UTF-8 text file and split it into lines.
///
/// Both `\n` and `\r\n` terminators are accepted; a trailing terminator
/// does not produce an extra empty line. Missing files, permission errors
/// and invalid UTF-8 all surface as `DistanceError::Io` carrying the path.
pub async fn read_lines(path: &Path) -> Result<Vec<String>, DistanceError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DistanceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "Read document");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_lines_with_mixed_terminators() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"first line\r\nsecond\n\nfourth\n").unwrap();

        let lines = read_lines(file.path()).await.unwrap();
        assert_eq!(lines, vec!["first line", "second", "", "fourth"]);
    }

    #[tokio::test]
    async fn test_empty_file_has_no_lines() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_lines(file.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        match read_lines(&missing).await {
            Err(DistanceError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_io_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        let err = read_lines(file.path()).await.unwrap_err();
        assert!(matches!(err, DistanceError::Io { .. }));
    }
}
