//! Feedback messages produced by the analyzer.

pub const TOO_SHORT: &str = "Password should be at least 8 characters long";
pub const MISSING_UPPERCASE: &str = "Add uppercase letters (A-Z)";
pub const MISSING_LOWERCASE: &str = "Add lowercase letters (a-z)";
pub const MISSING_DIGIT: &str = "Add numbers (0-9)";
pub const MISSING_SPECIAL: &str = "Add special characters (!@#$%^&*)";
pub const REPEATED: &str = "Avoid repeated characters (e.g., 'aaa', '111')";
pub const SEQUENTIAL: &str = "Avoid sequential characters (e.g., 'abc', '123')";
pub const COMMON: &str = "Avoid common passwords or patterns";
pub const EXCELLENT: &str = "Excellent password!";

/// General advice shown alongside any password that is not rated Strong.
pub const GENERAL_TIPS: [&str; 4] = [
    "Use a unique password for each account",
    "Consider using a password manager",
    "Change your passwords regularly",
    "Avoid using personal information in passwords",
];
