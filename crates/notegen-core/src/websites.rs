//! The websites.md URL list
//!
//! One URL per line. Blank lines and `#`-prefixed lines (the header and any
//! commentary) are skipped.

use std::fs;
use std::path::Path;

use crate::error::{NotegenError, Result};
use crate::project::WEBSITES_HEADER;

/// Read the list of URLs to process.
///
/// An absent file is created with the standard header and yields an empty
/// list, so a fresh project can run `transcribe` immediately.
pub fn read_websites(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        fs::write(path, WEBSITES_HEADER)
            .map_err(|e| NotegenError::io_operation("create", path.display(), e))?;
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| NotegenError::io_operation("read", path.display(), e))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_absent_file_created_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("websites.md");

        let urls = read_websites(&path).unwrap();

        assert!(urls.is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), WEBSITES_HEADER);
    }

    #[test]
    fn test_skips_header_and_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("websites.md");
        fs::write(
            &path,
            "# Websites to process\n\nhttps://youtu.be/abc\n  https://www.youtube.com/watch?v=def  \n",
        )
        .unwrap();

        let urls = read_websites(&path).unwrap();

        assert_eq!(
            urls,
            vec![
                "https://youtu.be/abc",
                "https://www.youtube.com/watch?v=def"
            ]
        );
    }
}
