//! Common password dictionary
//!
//! Holds the list of known weak passwords consulted by the analyzer.
//! The list is an ordinary value owned by the caller, so tests and
//! applications can swap in their own entries.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing to a custom dictionary file.
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

/// Built-in weak passwords, matched as substrings of the lowercased input.
pub const DEFAULT_COMMON_PASSWORDS: [&str; 25] = [
    "password",
    "123456",
    "qwerty",
    "admin",
    "welcome",
    "password123",
    "abc123",
    "letmein",
    "monkey",
    "1234567890",
    "trustno1",
    "sunshine",
    "iloveyou",
    "princess",
    "admin123",
    "welcome123",
    "login",
    "qwerty123",
    "solo",
    "1q2w3e4r",
    "master",
    "dragon",
    "baseball",
    "football",
    "superman",
];

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Returns the dictionary path configured through `PWD_DICTIONARY_PATH`, if any.
pub fn dictionary_path() -> Option<PathBuf> {
    std::env::var_os(DICTIONARY_PATH_ENV).map(PathBuf::from)
}

/// An ordered, immutable list of lowercase common passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: Vec<String>,
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::new(DEFAULT_COMMON_PASSWORDS)
    }
}

impl CommonPasswords {
    /// Builds a dictionary from arbitrary entries.
    ///
    /// Entries are trimmed and lowercased. Blank lines and duplicates are
    /// dropped; the first occurrence keeps its position.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .filter(|e| seen.insert(e.clone()))
            .collect();
        Self { entries }
    }

    /// Loads a dictionary with one entry per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::new(content.lines());

        if dictionary.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: Empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Dictionary loaded: {} passwords from {:?}",
            dictionary.len(),
            path
        );

        Ok(dictionary)
    }

    /// Loads the file named by `PWD_DICTIONARY_PATH`, or falls back to the
    /// built-in list when the variable is unset.
    pub fn from_env() -> Result<Self, DictionaryError> {
        match dictionary_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the first entry contained in `lowered`.
    ///
    /// The candidate must already be lowercased.
    pub fn find_in(&self, lowered: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(String::as_str)
            .find(|entry| lowered.contains(entry))
    }

    /// Checks whether the password contains any entry, ignoring case.
    pub fn contains_common(&self, password: &str) -> bool {
        self.find_in(&password.to_lowercase()).is_some()
    }
}
