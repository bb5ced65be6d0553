//! Pattern analysis section - detects repeated and sequential runs.

use super::{Adjustment, SectionResult};
use crate::feedback::{REPEATED, SEQUENTIAL};

const RUN_LENGTH: usize = 3;

/// Ordered alphabets whose 3-character slices count as sequential runs.
const SEQUENCES: [&str; 2] = ["abcdefghijklmnopqrstuvwxyz", "0123456789"];

/// Analyzes the password for repeated and sequential runs.
///
/// Repeats compare characters exactly, so `"aAa"` is not a repeat.
/// Sequences ignore case and are checked once per reference alphabet, so
/// a password holding both `"abc"` and `"123"` is penalized twice.
pub fn pattern_analysis_section(password: &str) -> SectionResult {
    let mut result = Vec::new();

    if has_repeated_run(password) {
        result.push(Adjustment::penalty(1.0, REPEATED));
    }

    let lowered = password.to_lowercase();
    for sequence in SEQUENCES {
        if contains_sequence_slice(&lowered, sequence) {
            result.push(Adjustment::penalty(0.5, SEQUENTIAL));
        }
    }

    result
}

/// True if any character occurs three or more times in a row.
fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(RUN_LENGTH)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// True if `lowered` contains any 3-character slice of `sequence`.
fn contains_sequence_slice(lowered: &str, sequence: &str) -> bool {
    // Reference alphabets are ASCII, so byte slicing is on char boundaries.
    (0..=sequence.len().saturating_sub(RUN_LENGTH))
        .map(|i| &sequence[i..i + RUN_LENGTH])
        .any(|slice| lowered.contains(slice))
}
