//! Password strength meter library
//!
//! Scores candidate passwords, explains how to improve them, and generates
//! random passwords that satisfy basic character-class rules.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async analysis with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom common password file read by
//!   [`CommonPasswords::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{CommonPasswords, PasswordAnalyzer, generate_password};
//! use secrecy::SecretString;
//!
//! let analyzer = PasswordAnalyzer::new(CommonPasswords::from_env().expect("Failed to load dictionary"));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = analyzer.analyze(&password);
//!
//! println!("Strength: {} ({})", report, report.color_hint());
//! for suggestion in report.feedback() {
//!     println!("- {}", suggestion);
//! }
//!
//! let generated = generate_password(16).expect("length is valid");
//! let _ = analyzer.analyze(&generated);
//! ```

// Internal modules
mod analyzer;
mod dictionary;
mod generator;
mod history;
mod sections;
mod types;

pub mod feedback;

// Public API
pub use analyzer::{analyze, PasswordAnalyzer};
pub use dictionary::{
    dictionary_path, CommonPasswords, DictionaryError, DEFAULT_COMMON_PASSWORDS,
    DICTIONARY_PATH_ENV,
};
pub use generator::{
    generate_password, GeneratorError, PasswordGenerator, DEFAULT_LENGTH, MIN_LENGTH,
};
pub use history::{HistoryEntry, PasswordHistory};
pub use types::{Score, Strength, StrengthReport};

#[cfg(feature = "async")]
pub use analyzer::{analyze_tx, DEBOUNCE};
