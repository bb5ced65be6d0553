//! Length section - rewards longer passwords.

use super::{Adjustment, SectionResult};
use crate::feedback::TOO_SHORT;

const MIN_LENGTH: usize = 8;
const LONG_LENGTH: usize = 12;

/// Scores the password length, counted in characters.
///
/// # Returns
/// - `+2` for 12 characters or more
/// - `+1` for 8 to 11 characters
/// - a "too short" suggestion otherwise
pub fn length_section(password: &str) -> SectionResult {
    let len = password.chars().count();
    let adjustment = if len >= LONG_LENGTH {
        Adjustment::bonus(2.0)
    } else if len >= MIN_LENGTH {
        Adjustment::bonus(1.0)
    } else {
        Adjustment::missing(TOO_SHORT)
    };
    vec![adjustment]
}
