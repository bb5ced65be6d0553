//! Password analysis sections
//!
//! Each section scores a specific aspect of password strength and reports
//! its findings in the order its checks run.

mod common;
mod length;
mod pattern;
mod variety;

pub use common::common_password_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

/// A score change produced by one check, with the suggestion it raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub points: f64,
    pub feedback: Option<&'static str>,
}

impl Adjustment {
    /// A check that passed and earned points.
    pub fn bonus(points: f64) -> Self {
        Self {
            points,
            feedback: None,
        }
    }

    /// A check that failed without changing the score.
    pub fn missing(feedback: &'static str) -> Self {
        Self {
            points: 0.0,
            feedback: Some(feedback),
        }
    }

    /// A check that failed and costs points.
    pub fn penalty(points: f64, feedback: &'static str) -> Self {
        Self {
            points: -points,
            feedback: Some(feedback),
        }
    }
}

/// Result type for section functions: one entry per check that fired.
pub type SectionResult = Vec<Adjustment>;
