//! Error helpers for gym-store
//!
//! Wraps gym-core `GymError` with store-specific constructors

use gym_core::errors::GymError;
use rusqlite::ErrorCode;

/// Result type alias using GymError
pub type Result<T> = std::result::Result<T, GymError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> GymError {
    GymError::Migration {
        migration_id: migration_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> GymError {
    GymError::ChecksumMismatch {
        migration_id: migration_id.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

/// Classify a rusqlite error raised during `op`
///
/// SQLite constraint failures (UNIQUE, CHECK, NOT NULL, FOREIGN KEY) become
/// `StorageConstraint`; everything else is `Persistence`.
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> GymError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            GymError::StorageConstraint {
                op: op.to_string(),
                message: err.to_string(),
            }
        }
        _ => GymError::Persistence {
            op: op.to_string(),
            message: err.to_string(),
        },
    }
}
