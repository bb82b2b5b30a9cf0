//! # Error Types
//!
//! This module defines error types used throughout the ean13-tikz library.
//!
//! Encoding itself has a single failure mode: the supplied product code is
//! not exactly 12 decimal digits. That is [`ValidationError`]. Everything
//! else (metrics files, writing documents, running the LaTeX compiler)
//! belongs to the outer shell and is folded into [`Ean13Error`].

use thiserror::Error;

/// Rejected product code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Code length is not 12 digits (the check digit is computed, never supplied)
    #[error("Code must contain {expected} digits, got {actual} (check digit is computed)")]
    InvalidLength { expected: usize, actual: usize },

    /// Non-digit character in the code
    #[error("Invalid character {character:?} at position {position}: only digits 0-9 are allowed")]
    InvalidDigit { position: usize, character: char },
}

/// Main error type for ean13-tikz operations
#[derive(Debug, Error)]
pub enum Ean13Error {
    /// Invalid product code
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Invalid physical metrics (file contents or values)
    #[error("Config error: {0}")]
    Config(String),

    /// External document compiler failed
    #[error("Compile error: {0}")]
    Compile(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
