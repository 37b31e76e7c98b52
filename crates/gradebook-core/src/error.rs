//! Grade model error types.
//!
//! Every fallible operation on a [`Mark`](crate::Mark), [`Course`](crate::Course)
//! or [`CourseCatalog`](crate::CourseCatalog) returns one of these. The model
//! never decides how an error is surfaced; that is left to the caller.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the grade model.
pub type Result<T> = std::result::Result<T, GradeError>;

/// The kind of entity a lookup was searching for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Course,
    Mark,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Course => write!(f, "course"),
            EntityKind::Mark => write!(f, "mark"),
        }
    }
}

/// Errors produced by the grade model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradeError {
    /// A value would make a derived computation undefined, or failed to parse.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A lookup by identifier matched nothing.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl GradeError {
    pub(crate) fn course_not_found(id: &str) -> Self {
        GradeError::NotFound {
            kind: EntityKind::Course,
            id: id.to_string(),
        }
    }

    pub(crate) fn mark_not_found(id: &str) -> Self {
        GradeError::NotFound {
            kind: EntityKind::Mark,
            id: id.to_string(),
        }
    }

    /// Returns `true` for lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GradeError::NotFound { .. })
    }
}
