//! In-memory password history owned by the caller.
//!
//! Nothing here is persisted; dropping the history drops (and zeroizes)
//! every stored password.

use std::time::SystemTime;

use secrecy::{ExposeSecret, SecretString};

use crate::analyzer::PasswordAnalyzer;
use crate::types::Strength;

#[derive(Debug)]
pub struct HistoryEntry {
    password: SecretString,
    strength: Strength,
    created_at: SystemTime,
}

impl HistoryEntry {
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }
}

/// Passwords saved during a session, in insertion order.
#[derive(Debug, Default)]
pub struct PasswordHistory {
    entries: Vec<HistoryEntry>,
}

impl PasswordHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the password together with its strength.
    ///
    /// Returns `false` and stores nothing if the password is already present.
    pub fn record(&mut self, password: &SecretString, analyzer: &PasswordAnalyzer) -> bool {
        let exposed = password.expose_secret();
        if self
            .entries
            .iter()
            .any(|e| e.password.expose_secret() == exposed)
        {
            return false;
        }

        self.entries.push(HistoryEntry {
            password: SecretString::new(exposed.into()),
            strength: analyzer.analyze(password).strength(),
            created_at: SystemTime::now(),
        });
        true
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
