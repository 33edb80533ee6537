// ABOUTME: Unified error handling for the PMC engine
// ABOUTME: Defines AppError with constructor helpers and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! The engine is pure arithmetic over well-typed inputs, so almost every
//! entry point is infallible: an empty series projects to zero, missing
//! numeric fields contribute zero, and classification is total. Errors only
//! arise from contract violations at construction time (invalid decay
//! windows, unsorted series input).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Caller-supplied input violates a documented precondition
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// Application error type for the PMC engine
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput,
            message: message.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError,
            message: message.into(),
        }
    }
}

/// Convenience alias for results using [`AppError`]
pub type AppResult<T> = Result<T, AppError>;
