//! Range Entity
//!
//! A named, saved 13x13 action coloring plus its action palette.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use super::action::{Action, ActionId, MAX_ACTIONS};
use super::cell::Grid;
use super::entity::{DomainError, DomainResult, Entity};
use super::folder::FolderId;

/// Range identifier (store-issued UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeId(pub Uuid);

impl std::fmt::Display for RangeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub id: RangeId,
    pub name: String,
    pub grid: Grid,
    pub actions: Vec<Action>,
    /// Containing folder (None = root level)
    pub folder_id: Option<FolderId>,
    pub created_at: DateTime<Utc>,
}

/// A range without the store-assigned id and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeDraft {
    pub name: String,
    pub grid: Grid,
    pub actions: Vec<Action>,
    pub folder_id: Option<FolderId>,
}

impl Range {
    pub fn from_draft(id: RangeId, created_at: DateTime<Utc>, draft: RangeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            grid: draft.grid,
            actions: draft.actions,
            folder_id: draft.folder_id,
            created_at,
        }
    }

    pub fn action(&self, id: ActionId) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn to_draft(&self) -> RangeDraft {
        RangeDraft {
            name: self.name.clone(),
            grid: self.grid.clone(),
            actions: self.actions.clone(),
            folder_id: self.folder_id,
        }
    }

    /// Copy with the same cells, actions and folder
    pub fn duplicate_draft(&self) -> RangeDraft {
        RangeDraft {
            name: format!("{} (Copy)", self.name),
            ..self.to_draft()
        }
    }
}

impl Entity for Range {
    type Id = RangeId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl RangeDraft {
    /// Check everything a range must satisfy before it is sent to the store.
    /// The returned draft carries the trimmed name.
    pub fn validated(self) -> DomainResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("Please enter a range name".to_string()));
        }
        if self.grid.painted_count() == 0 {
            return Err(DomainError::InvalidInput("Please paint at least one cell".to_string()));
        }
        check_actions(&self.actions)?;

        let known: HashSet<ActionId> = self.actions.iter().map(|a| a.id).collect();
        if let Some(cell) = self
            .grid
            .cells()
            .iter()
            .find(|c| c.action_id().is_some_and(|id| !known.contains(&id)))
        {
            return Err(DomainError::InvalidInput(format!(
                "cell {} uses an action that does not exist",
                cell.hand()
            )));
        }

        Ok(Self { name, ..self })
    }
}

/// 1 to 7 actions with unique positive ids
pub fn check_actions(actions: &[Action]) -> DomainResult<()> {
    if actions.is_empty() || actions.len() > MAX_ACTIONS {
        return Err(DomainError::InvalidInput(format!(
            "a range needs between 1 and {} actions, got {}",
            MAX_ACTIONS,
            actions.len()
        )));
    }
    let mut seen = HashSet::new();
    for action in actions {
        if action.id.0 == 0 || !seen.insert(action.id) {
            return Err(DomainError::InvalidInput(format!(
                "invalid or duplicate action id {}",
                action.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::Color;
    use crate::domain::cell::Paint;

    fn painted_grid(action: ActionId) -> Grid {
        let mut grid = Grid::new();
        grid.set_paint(0, Some(Paint::new(Color::new("#ff4444"), action)));
        grid
    }

    fn draft(name: &str, grid: Grid) -> RangeDraft {
        RangeDraft {
            name: name.to_string(),
            grid,
            actions: vec![Action::primary()],
            folder_id: None,
        }
    }

    #[test]
    fn test_valid_draft_is_trimmed() {
        let d = draft("  UTG open ", painted_grid(ActionId(1))).validated().unwrap();
        assert_eq!(d.name, "UTG open");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = draft("   ", painted_grid(ActionId(1))).validated().unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("Please enter a range name".to_string()));
    }

    #[test]
    fn test_unpainted_grid_rejected() {
        let err = draft("BTN", Grid::new()).validated().unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("Please paint at least one cell".to_string()));
    }

    #[test]
    fn test_dangling_action_rejected() {
        assert!(draft("BTN", painted_grid(ActionId(4))).validated().is_err());
    }

    #[test]
    fn test_check_actions_bounds() {
        assert!(check_actions(&[]).is_err());
        let eight: Vec<_> = (1..=8)
            .map(|i| Action::numbered(ActionId(i), Color::default_for(i as usize)))
            .collect();
        assert!(check_actions(&eight).is_err());
        assert!(check_actions(&eight[..7]).is_ok());
        assert!(check_actions(&[Action::primary(), Action::primary()]).is_err());
    }
}
