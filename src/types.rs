//! Report types returned by the analyzer.

use std::fmt;

use crate::feedback::GENERAL_TIPS;

/// A strength score, always within `[0.0, 5.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 5.0;

    /// Builds a score, flooring or capping out-of-range values to the bounds.
    pub fn clamped(raw: f64) -> Self {
        Self(raw.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Score as a fraction of the maximum, for progress bars.
    pub fn fraction(&self) -> f64 {
        self.0 / Self::MAX
    }
}

/// Categorical strength derived from a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Classifies a score: below 2 is weak, below 4 is moderate, the rest strong.
    pub fn from_score(score: f64) -> Self {
        if score < 2.0 {
            Strength::Weak
        } else if score < 4.0 {
            Strength::Moderate
        } else {
            Strength::Strong
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }

    /// Display color associated with the strength.
    pub fn color_hint(&self) -> &'static str {
        match self {
            Strength::Weak => "red",
            Strength::Moderate => "orange",
            Strength::Strong => "green",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single analysis.
///
/// Reports are built by the analyzer and never change afterwards. A
/// `Strong` report always carries at least one feedback line.
#[derive(Debug, Clone, PartialEq)]
pub struct StrengthReport {
    score: Score,
    strength: Strength,
    feedback: Vec<String>,
}

impl StrengthReport {
    pub(crate) fn new(score: Score, strength: Strength, feedback: Vec<String>) -> Self {
        Self {
            score,
            strength,
            feedback,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn color_hint(&self) -> &'static str {
        self.strength.color_hint()
    }

    /// Improvement suggestions, in the order the checks ran.
    pub fn feedback(&self) -> &[String] {
        &self.feedback
    }

    /// General tips for passwords that are not yet strong.
    pub fn tips(&self) -> &'static [&'static str] {
        match self.strength {
            Strength::Strong => &[],
            _ => &GENERAL_TIPS,
        }
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.1}/{:.1})",
            self.strength,
            self.score.value(),
            Score::MAX
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_to_bounds() {
        assert_eq!(Score::clamped(-1.25).value(), 0.0);
        assert_eq!(Score::clamped(6.0).value(), 5.0);
        assert_eq!(Score::clamped(3.5).value(), 3.5);
    }

    #[test]
    fn test_score_fraction() {
        assert_eq!(Score::clamped(2.5).fraction(), 0.5);
        assert_eq!(Score::clamped(5.0).fraction(), 1.0);
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_score(0.0), Strength::Weak);
        assert_eq!(Strength::from_score(1.75), Strength::Weak);
        assert_eq!(Strength::from_score(2.0), Strength::Moderate);
        assert_eq!(Strength::from_score(3.75), Strength::Moderate);
        assert_eq!(Strength::from_score(4.0), Strength::Strong);
        assert_eq!(Strength::from_score(5.0), Strength::Strong);
    }

    #[test]
    fn test_strength_labels_and_colors() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Moderate.color_hint(), "orange");
        assert_eq!(Strength::Strong.color_hint(), "green");
        assert_eq!(Strength::Weak.color_hint(), "red");
    }

    #[test]
    fn test_report_display_and_tips() {
        let report = StrengthReport::new(Score::clamped(3.5), Strength::Moderate, vec![]);
        assert_eq!(report.to_string(), "Moderate (3.5/5.0)");
        assert_eq!(report.tips().len(), 4);

        let strong = StrengthReport::new(
            Score::clamped(5.0),
            Strength::Strong,
            vec!["Excellent password!".to_string()],
        );
        assert!(strong.tips().is_empty());
    }
}
