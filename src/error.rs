// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Sniff
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Sniff operations
#[derive(Error, Debug)]
pub enum SniffError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Failure reported by an environment's storage round-trip probe.
///
/// Never escapes detection: the local-storage probe catches it and records
/// the feature as unsupported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage access denied (private browsing, sandbox policy)
    #[error("storage access denied")]
    Denied,

    /// Storage quota exhausted
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// Storage backend unavailable
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Result type alias for Sniff operations
pub type Result<T> = std::result::Result<T, SniffError>;
