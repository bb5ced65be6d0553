//! Common password section - checks the password against the dictionary.

use super::{Adjustment, SectionResult};
use crate::dictionary::CommonPasswords;
use crate::feedback::COMMON;

/// Penalizes passwords containing a dictionary entry, ignoring case.
///
/// Stops at the first matching entry.
pub fn common_password_section(password: &str, dictionary: &CommonPasswords) -> SectionResult {
    match dictionary.find_in(&password.to_lowercase()) {
        Some(_) => vec![Adjustment::penalty(1.5, COMMON)],
        None => Vec::new(),
    }
}
