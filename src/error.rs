//! Error types for the payslip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation engine itself is a total function and never fails; every
//! error here belongs to the profile-persistence boundary.

use thiserror::Error;

/// The main error type for the payslip engine.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::ProfileNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Profile not found: missing");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A company profile save was attempted without a company name.
    #[error("Company name is required to save a company profile")]
    MissingCompanyName,

    /// A company profile save was attempted without a registration number.
    #[error("Company registration number is required to save a company profile")]
    MissingCompanyRegNo,

    /// No saved profile exists with the given id.
    #[error("Profile not found: {id}")]
    ProfileNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A profile list could not be encoded for storage.
    #[error("Failed to encode profiles for key '{key}': {message}")]
    StorageEncode {
        /// The storage key being written.
        key: String,
        /// A description of the encoding failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
