use thiserror::Error;

/// Result type alias using GymError
pub type Result<T> = std::result::Result<T, GymError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that is safe to match on in tests
/// and to emit in structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Storage
    ConstraintViolation,
    Persistence,
    Migration,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Migration => "ERR_MIGRATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for humans. Built from a [`GymError`] at logging boundaries.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add offending field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for gym repository operations
///
/// Lookups that find nothing are not errors: they return `None` or `false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GymError {
    /// A supplied field failed a local rule; nothing was written
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A write violated a storage constraint and was rolled back
    #[error("Constraint violation during {op}: {message}")]
    StorageConstraint { op: String, message: String },

    /// Any other storage failure
    #[error("Storage failure during {op}: {message}")]
    Persistence { op: String, message: String },

    /// A schema migration could not be applied
    #[error("Migration {migration_id} failed: {reason}")]
    Migration {
        migration_id: String,
        reason: String,
    },

    /// An applied migration no longer matches its embedded SQL
    #[error("Checksum mismatch for migration {migration_id}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        migration_id: String,
        expected: String,
        actual: String,
    },
}

impl GymError {
    /// Shorthand for a validation failure on `field`
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        GymError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True when the caller can re-prompt and try again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GymError::Validation { .. } | GymError::StorageConstraint { .. }
        )
    }

    /// Stable error kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            GymError::Validation { .. } => ExErrorKind::InvalidInput,
            GymError::StorageConstraint { .. } => ExErrorKind::ConstraintViolation,
            GymError::Persistence { .. } => ExErrorKind::Persistence,
            GymError::Migration { .. } => ExErrorKind::Migration,
            GymError::ChecksumMismatch { .. } => ExErrorKind::ConstraintViolation,
        }
    }
}

impl From<GymError> for ExError {
    fn from(err: GymError) -> Self {
        let message = err.to_string();
        match err {
            GymError::Validation { field, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_field(field)
                .with_message(message),
            GymError::StorageConstraint { op, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_op(op)
                    .with_message(message)
            }
            GymError::Persistence { op, .. } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),
            GymError::Migration { migration_id, .. } => ExError::new(ExErrorKind::Migration)
                .with_op("migration")
                .with_entity_id(migration_id)
                .with_message(message),
            GymError::ChecksumMismatch { migration_id, .. } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_op("migration_checksum")
                    .with_entity_id(migration_id)
                    .with_message(message)
            }
        }
    }
}
