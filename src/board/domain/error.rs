//! Error types for board domain parsing.
//!
//! These only surface at boundaries that accept raw strings. The mutation
//! path itself never fails: malformed create input coerces to defaults and
//! unknown identifiers degrade to no-ops.

use thiserror::Error;

/// Error returned while parsing a workflow stage from its storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Error returned while parsing a priority from its storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
