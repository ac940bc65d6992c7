//! # Error Types
//!
//! Structured error types for srb_core.
//!
//! The sizing formulas themselves never fail: out-of-range inputs propagate
//! through the arithmetic. Errors only come from catalog lookups, file I/O
//! and (de)serialization. Config sections that are skipped during loading are
//! reported as [`LoadWarning`]s, which are not errors.
//!
//! ## Example
//!
//! ```rust
//! use srb_core::errors::{CalcError, CalcResult};
//!
//! fn require_grain(name: &str) -> CalcResult<()> {
//!     if name.is_empty() {
//!         return Err(CalcError::entry_not_found("Propellant", name));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_grain("").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for srb_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for catalog and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Casing material not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Propellant or nozzle entry not found in the catalog
    #[error("{kind} not found: {name}")]
    EntryNotFound { kind: String, name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create an EntryNotFound error
    pub fn entry_not_found(kind: impl Into<String>, name: impl Into<String>) -> Self {
        CalcError::EntryNotFound {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::EntryNotFound { .. } => "ENTRY_NOT_FOUND",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

/// Why a config section was skipped during loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The section tag is not the one the entry type expects
    TagMismatch,
    /// The section has no `name` key, or it is empty
    MissingName,
    /// A present field could not be decoded into the entry type
    Malformed,
}

/// Non-fatal warning produced when a config section is ignored.
///
/// Skipping a section is a no-op for the catalog: nothing is registered
/// and loading continues with the next section.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("Skipped section '{section}' ({reason:?}): {detail}")]
pub struct LoadWarning {
    /// Section tag as found in the file
    pub section: String,
    /// Entry name, when one was present
    pub name: Option<String>,
    /// Classification of the skip
    pub reason: SkipReason,
    /// Human-readable detail
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::file_error("read", "motors.toml", "No such file");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::material_not_found("Unobtainium").error_code(), "MATERIAL_NOT_FOUND");
        assert_eq!(CalcError::entry_not_found("Propellant", "X").error_code(), "ENTRY_NOT_FOUND");
    }

    #[test]
    fn test_load_warning_display() {
        let warning = LoadWarning {
            section: "SRBLIB_NOZZLE_DEFINITION".to_string(),
            name: None,
            reason: SkipReason::MissingName,
            detail: "no 'name' key".to_string(),
        };
        let text = warning.to_string();
        assert!(text.contains("SRBLIB_NOZZLE_DEFINITION"));
        assert!(text.contains("MissingName"));
    }
}
