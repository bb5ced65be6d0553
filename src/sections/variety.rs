//! Character variety section - checks for uppercase, lowercase, digits, special chars.

use super::{Adjustment, SectionResult};
use crate::feedback::{MISSING_DIGIT, MISSING_LOWERCASE, MISSING_SPECIAL, MISSING_UPPERCASE};

/// Punctuation accepted as a special character.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};:'\"\\|,.<>/?";

/// Scores the presence of each character class.
///
/// Always returns four adjustments, in the order uppercase, lowercase,
/// digit, special.
pub fn character_variety_section(password: &str) -> SectionResult {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(c));

    [
        (has_upper, 0.75, MISSING_UPPERCASE),
        (has_lower, 0.75, MISSING_LOWERCASE),
        (has_digit, 1.0, MISSING_DIGIT),
        (has_special, 1.5, MISSING_SPECIAL),
    ]
    .into_iter()
    .map(|(present, points, feedback)| {
        if present {
            Adjustment::bonus(points)
        } else {
            Adjustment::missing(feedback)
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(result: &SectionResult) -> Vec<&'static str> {
        result.iter().filter_map(|a| a.feedback).collect()
    }

    fn points(result: &SectionResult) -> f64 {
        result.iter().map(|a| a.points).sum()
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = character_variety_section("lowercase123!");
        assert_eq!(feedback(&result), vec![MISSING_UPPERCASE]);
        assert_eq!(points(&result), 3.25);
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = character_variety_section("UPPERCASE123!");
        assert_eq!(feedback(&result), vec![MISSING_LOWERCASE]);
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = character_variety_section("NoNumbers!");
        assert_eq!(feedback(&result), vec![MISSING_DIGIT]);
        assert_eq!(points(&result), 3.0);
    }

    #[test]
    fn test_variety_section_missing_special() {
        let result = character_variety_section("NoSpecial123");
        assert_eq!(feedback(&result), vec![MISSING_SPECIAL]);
        assert_eq!(points(&result), 2.5);
    }

    #[test]
    fn test_variety_section_all_categories() {
        let result = character_variety_section("HasAll123!@#");
        assert!(feedback(&result).is_empty());
        assert_eq!(points(&result), 4.0);
    }

    #[test]
    fn test_variety_section_empty_reports_every_class() {
        let result = character_variety_section("");
        assert_eq!(
            feedback(&result),
            vec![MISSING_UPPERCASE, MISSING_LOWERCASE, MISSING_DIGIT, MISSING_SPECIAL]
        );
        assert_eq!(points(&result), 0.0);
    }

    #[test]
    fn test_variety_section_only_listed_punctuation_counts() {
        // '~' and spaces are not in the special set
        let result = character_variety_section("Abc 1~");
        assert_eq!(feedback(&result), vec![MISSING_SPECIAL]);

        let result = character_variety_section("Abc1\\");
        assert!(feedback(&result).is_empty());
    }

    #[test]
    fn test_variety_section_non_ascii_letters_do_not_count() {
        let result = character_variety_section("ÄÖÜäöü1!");
        assert_eq!(feedback(&result), vec![MISSING_UPPERCASE, MISSING_LOWERCASE]);
    }
}
