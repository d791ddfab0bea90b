//! Folder Entity
//!
//! A named grouping node in the range hierarchy (single parent).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

/// Folder identifier (store-issued UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(pub Uuid);

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A folder in the catalog tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    pub name: String,
    /// Parent folder (None = root level)
    pub parent_id: Option<FolderId>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Folder {
    type Id = FolderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Trimmed folder name, rejected when empty
pub fn folder_name(raw: &str) -> DomainResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("Please enter a folder name".to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_is_trimmed() {
        assert_eq!(folder_name("  Preflop  ").unwrap(), "Preflop");
    }

    #[test]
    fn test_blank_folder_name_rejected() {
        assert!(matches!(folder_name("   "), Err(DomainError::InvalidInput(_))));
        assert!(folder_name("").is_err());
    }
}
