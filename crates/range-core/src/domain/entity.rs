//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for persisted entities
//! (folders and ranges), plus the error type shared by the whole core.

use serde::{Deserialize, Serialize};

/// Core trait for all persisted domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a drag-and-drop move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Item dropped onto itself
    SelfDrop,
    /// Target is where the item already lives
    NoChange,
    /// Target folder is the moved folder or one of its descendants
    Cycle,
    /// Item or target is not in the catalog
    UnknownItem,
}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Rejected(MoveRejection),
    Remote(String),
}

impl DomainError {
    /// Structural rejections come from drag gestures and are not reported to the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, DomainError::Rejected(_))
    }
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::SelfDrop => write!(f, "item dropped onto itself"),
            MoveRejection::NoChange => write!(f, "item is already there"),
            MoveRejection::Cycle => write!(f, "a folder cannot move inside itself"),
            MoveRejection::UnknownItem => write!(f, "unknown item"),
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "{}", msg),
            DomainError::Rejected(reason) => write!(f, "Move rejected: {}", reason),
            DomainError::Remote(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
