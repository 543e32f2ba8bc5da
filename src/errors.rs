// ABOUTME: Unified error types for the progression engine
// ABOUTME: Defines AppError taxonomy and the AppResult alias used across all modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Progression Fitness Engine

//! # Error Handling
//!
//! A single error taxonomy shared by the calculators and the streak
//! tracker. The pure calculation paths only ever produce
//! [`AppError::InvalidInput`]; lookup and persistence failures belong to
//! the storage collaborator and surface as [`AppError::NotFound`] and
//! [`AppError::Storage`].

use thiserror::Error;

/// Application error type for all engine operations
#[derive(Debug, Error)]
pub enum AppError {
    /// A goal or streak identifier did not resolve to a record
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Caller-provided data violates an engine invariant
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two writers raced on the same per-user record
    #[error("concurrent update conflict: {0}")]
    Conflict(String),

    /// The storage collaborator failed to load or persist a record
    #[error("storage failure: {0}")]
    Storage(String),
}

impl AppError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Stable machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "RESOURCE_NOT_FOUND",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::Conflict(_) => "CONCURRENT_UPDATE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

/// Result alias used throughout the engine
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(AppError::not_found("goal").code(), "RESOURCE_NOT_FOUND");
        assert_eq!(AppError::invalid_input("weight").code(), "INVALID_INPUT");
        assert_eq!(AppError::conflict("streak").code(), "CONCURRENT_UPDATE");
        assert_eq!(AppError::storage("io").code(), "STORAGE_ERROR");
    }

    #[test]
    fn messages_include_context() {
        let err = AppError::invalid_input("starting weight must be positive");
        assert_eq!(
            err.to_string(),
            "invalid input: starting weight must be positive"
        );
    }
}
