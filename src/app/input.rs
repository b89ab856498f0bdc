//! Loading of the host list, domain list and header file.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};

use crate::error_handling::InputError;
use crate::probe::HeaderSet;

/// Reads a line-oriented list file.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// Duplicates are kept. `kind` names the list in error messages.
///
/// # Errors
///
/// Returns `InputError::Unreadable` if the file cannot be read. Callers treat
/// this as fatal: no probe is sent when either list is missing.
pub async fn read_lines(path: &Path, kind: &'static str) -> Result<Vec<String>, InputError> {
    let contents =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| InputError::Unreadable {
                kind,
                path: path.to_path_buf(),
                source,
            })?;

    let lines: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    debug!("Read {} {} from {}", lines.len(), kind, path.display());
    Ok(lines)
}

/// Loads the header set from a JSON object file.
///
/// Never fails: no path, an unreadable file, malformed JSON, or an object
/// with no usable entries all fall back to `HeaderSet::defaults()`, with a
/// warning for everything except the missing path.
pub async fn load_headers(path: Option<&Path>) -> HeaderSet {
    let Some(path) = path else {
        return HeaderSet::defaults();
    };

    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) => {
            warn!(
                "Failed to read header file {}: {}. Using default headers.",
                path.display(),
                e
            );
            return HeaderSet::defaults();
        }
    };

    let entries: BTreeMap<String, String> = match serde_json::from_str(&contents) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(
                "Failed to parse header file {}: {}. Using default headers.",
                path.display(),
                e
            );
            return HeaderSet::defaults();
        }
    };

    let headers = HeaderSet::from_pairs(entries);
    if headers.is_empty() {
        warn!(
            "Header file {} has no usable headers. Using default headers.",
            path.display()
        );
        return HeaderSet::defaults();
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[tokio::test]
    async fn test_read_lines_skips_blank_and_comments() {
        let file = write_temp("https://10.0.0.1\n\n  # staging\n  https://10.0.0.2  \r\nhttps://10.0.0.1\n");
        let lines = read_lines(file.path(), "hosts").await.expect("readable");
        assert_eq!(
            lines,
            vec!["https://10.0.0.1", "https://10.0.0.2", "https://10.0.0.1"]
        );
    }

    #[tokio::test]
    async fn test_read_lines_missing_file_is_error() {
        let err = read_lines(Path::new("/nonexistent/domains.txt"), "domains")
            .await
            .expect_err("missing file must fail");
        assert!(err.to_string().contains("domains"));
    }

    #[tokio::test]
    async fn test_load_headers_without_path_uses_defaults() {
        let headers = load_headers(None).await;
        assert_eq!(headers.len(), 2);
        assert!(headers.get("User-Agent").is_some());
    }

    #[tokio::test]
    async fn test_load_headers_from_json() {
        let file = write_temp(r#"{"User-Agent": "probe/1.0", "X-Forwarded-For": "127.0.0.1"}"#);
        let headers = load_headers(Some(file.path())).await;
        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("user-agent"), Some("probe/1.0"));
        assert_eq!(headers.get("x-forwarded-for"), Some("127.0.0.1"));
        assert!(headers.get("accept-language").is_none());
    }

    #[tokio::test]
    async fn test_load_headers_fallbacks() {
        let malformed = write_temp("{not json");
        assert_eq!(load_headers(Some(malformed.path())).await.len(), 2);

        let empty = write_temp("{}");
        assert!(load_headers(Some(empty.path()))
            .await
            .get("accept-language")
            .is_some());

        let wrong_type = write_temp(r#"{"X-Count": 3}"#);
        assert!(load_headers(Some(wrong_type.path()))
            .await
            .get("user-agent")
            .is_some());

        let missing = load_headers(Some(Path::new("/nonexistent/headers.json"))).await;
        assert_eq!(missing.len(), 2);
    }
}
