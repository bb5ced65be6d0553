//! Password strength analyzer - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dictionary::CommonPasswords;
use crate::feedback::EXCELLENT;
use crate::sections::{
    character_variety_section, common_password_section, length_section,
    pattern_analysis_section, SectionResult,
};
use crate::types::{Score, Strength, StrengthReport};

/// Scores passwords against a dictionary of common passwords.
///
/// The analyzer holds no mutable state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PasswordAnalyzer {
    dictionary: CommonPasswords,
}

impl PasswordAnalyzer {
    pub fn new(dictionary: CommonPasswords) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &CommonPasswords {
        &self.dictionary
    }

    /// Analyzes password strength and returns a detailed report.
    pub fn analyze(&self, password: &SecretString) -> StrengthReport {
        self.analyze_str(password.expose_secret())
    }

    /// Analyzes a password held as plain text.
    ///
    /// Never fails: the empty string and arbitrary Unicode are scored like
    /// any other input.
    pub fn analyze_str(&self, password: &str) -> StrengthReport {
        let mut raw_score = 0.0;
        let mut feedback = Vec::new();

        // Orchestrator: sections run in a fixed order, none short-circuits
        let sections: [(&str, SectionResult); 4] = [
            ("length", length_section(password)),
            ("variety", character_variety_section(password)),
            ("pattern", pattern_analysis_section(password)),
            ("common", common_password_section(password, &self.dictionary)),
        ];

        for (_section_name, adjustments) in sections {
            for adjustment in adjustments {
                raw_score += adjustment.points;
                if let Some(message) = adjustment.feedback {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("section {} flagged: {}", _section_name, message);
                    feedback.push(message.to_string());
                }
            }
        }

        let score = Score::clamped(raw_score);
        let strength = Strength::from_score(score.value());

        if strength == Strength::Strong && feedback.is_empty() {
            feedback.push(EXCELLENT.to_string());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "password analyzed: {} ({:.2}), {} suggestions",
            strength,
            score.value(),
            feedback.len()
        );

        StrengthReport::new(score, strength, feedback)
    }
}

/// Analyzes a password with the built-in common password list.
pub fn analyze(password: &SecretString) -> StrengthReport {
    PasswordAnalyzer::default().analyze(password)
}

/// Delay before an async analysis starts, so rapid keystrokes can cancel it.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the report via channel.
///
/// Waits for [`DEBOUNCE`] first; if `token` is cancelled by then, nothing is
/// analyzed or sent.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    analyzer: &PasswordAnalyzer,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled before start");
        return;
    }

    let report = analyzer.analyze(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password strength report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_tx_sends_report() {
        let analyzer = PasswordAnalyzer::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        analyze_tx(&analyzer, &secret("TestPass123!"), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert_eq!(report, analyzer.analyze_str("TestPass123!"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_tx_cancelled() {
        let analyzer = PasswordAnalyzer::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        analyze_tx(&analyzer, &secret("SomePassword123!"), token, tx).await;

        // Sender was dropped without sending
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_tx_closed_receiver() {
        let analyzer = PasswordAnalyzer::default();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        // Must not panic when nobody listens
        analyze_tx(&analyzer, &secret("TestPass123!"), CancellationToken::new(), tx).await;
    }
}
