//! Common password list
//!
//! Loads the denylist once at startup. The set is immutable after
//! construction and is shared by reference between validations.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Lowercase-normalized set of common passwords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonPasswords {
    set: HashSet<String>,
}

impl CommonPasswords {
    /// An empty list; nothing is ever reported as common.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads a newline-delimited list.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no entries
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonListError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CommonListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let list = Self::parse(&content);
        if list.is_empty() {
            return Err(CommonListError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} entries from {:?}", list.len(), path);

        Ok(list)
    }

    /// Loads a list, degrading to an empty set when the file is missing or unreadable.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(path) {
            Ok(list) => list,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Common password check disabled: {}", _e);
                Self::empty()
            }
        }
    }

    /// Builds a list from in-memory text, one password per line.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Case-insensitive membership.
    pub fn contains(&self, password: &str) -> bool {
        self.set.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let set = iter
            .into_iter()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();
        Self { set }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(passwords: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pwd in passwords {
            writeln!(temp_file, "{}", pwd).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_load_file_not_found() {
        let result = CommonPasswords::load_from_path("/nonexistent/path/common.txt");
        match result {
            Err(CommonListError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = CommonPasswords::load_from_path(temp_file.path());
        assert!(matches!(result, Err(CommonListError::EmptyFile)));
    }

    #[test]
    fn test_load_success_normalizes_entries() {
        let temp_file = setup_with_tempfile(&["Password123", "  qwerty  ", "", "QWERTY"]);
        let list = CommonPasswords::load_from_path(temp_file.path()).expect("list should load");
        assert_eq!(list.len(), 2);
        assert!(list.contains("password123"));
        assert!(list.contains("qwerty"));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let list = CommonPasswords::load_or_empty("/nonexistent/path/common.txt");
        assert!(list.is_empty());
        assert!(!list.contains("password"));
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let list = CommonPasswords::parse("testpassword\ncommon123\n");
        assert!(list.contains("testpassword"));
        assert!(list.contains("TESTPASSWORD"));
        assert!(list.contains("Common123"));
        assert!(!list.contains("veryuncommonpassword987"));
    }
}
