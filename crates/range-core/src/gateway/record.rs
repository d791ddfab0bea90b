//! Storage Records
//!
//! Row shapes of the `folders` and `ranges` tables and their validated
//! mapping to domain entities. Cells and actions are stored as JSON columns
//! in the camelCase shape the browser app has always written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::{
    check_actions, Action, ActionId, Color, DomainError, DomainResult, Folder, FolderId, Grid,
    Paint, Range, RangeDraft, RangeId,
};

/// Row of `folders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Insert body for `folders`
#[derive(Debug, Clone, Serialize)]
pub struct NewFolderRecord {
    pub name: String,
    pub parent_id: Option<Uuid>,
}

/// Patch body for moving a folder
#[derive(Debug, Clone, Serialize)]
pub struct FolderParentPatch {
    pub parent_id: Option<Uuid>,
}

/// One element of `ranges.cells`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    #[serde(default)]
    pub hand: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "actionId")]
    pub action_id: Option<u32>,
}

/// One element of `ranges.actions`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: u32,
    pub name: String,
    pub color: String,
}

/// Row of `ranges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeRecord {
    pub id: Uuid,
    pub name: String,
    pub folder_id: Option<Uuid>,
    #[serde(default)]
    pub cells: Vec<CellRecord>,
    #[serde(default)]
    pub actions: Vec<ActionRecord>,
    pub created_at: DateTime<Utc>,
}

/// Insert/update body for `ranges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RangeWrite {
    pub name: String,
    pub folder_id: Option<Uuid>,
    pub cells: Vec<CellRecord>,
    pub actions: Vec<ActionRecord>,
}

/// Patch body for moving a range
#[derive(Debug, Clone, Serialize)]
pub struct RangeFolderPatch {
    pub folder_id: Option<Uuid>,
}

// ========================
// Domain -> record
// ========================

fn cell_records(grid: &Grid) -> Vec<CellRecord> {
    grid.cells()
        .iter()
        .map(|cell| CellRecord {
            hand: cell.hand().to_string(),
            color: cell.color().map(|c| c.to_string()),
            action_id: cell.action_id().map(|id| id.0),
        })
        .collect()
}

fn action_records(actions: &[Action]) -> Vec<ActionRecord> {
    actions
        .iter()
        .map(|a| ActionRecord {
            id: a.id.0,
            name: a.name.clone(),
            color: a.color.to_string(),
        })
        .collect()
}

impl From<&Folder> for FolderRecord {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.0,
            name: folder.name.clone(),
            parent_id: folder.parent_id.map(|p| p.0),
            created_at: folder.created_at,
        }
    }
}

impl From<&RangeDraft> for RangeWrite {
    fn from(draft: &RangeDraft) -> Self {
        Self {
            name: draft.name.clone(),
            folder_id: draft.folder_id.map(|f| f.0),
            cells: cell_records(&draft.grid),
            actions: action_records(&draft.actions),
        }
    }
}

impl From<&Range> for RangeRecord {
    fn from(range: &Range) -> Self {
        Self {
            id: range.id.0,
            name: range.name.clone(),
            folder_id: range.folder_id.map(|f| f.0),
            cells: cell_records(&range.grid),
            actions: action_records(&range.actions),
            created_at: range.created_at,
        }
    }
}

// ========================
// Record -> domain
// ========================

impl From<FolderRecord> for Folder {
    fn from(record: FolderRecord) -> Self {
        Self {
            id: FolderId(record.id),
            name: record.name,
            parent_id: record.parent_id.map(FolderId),
            created_at: record.created_at,
        }
    }
}

impl TryFrom<RangeRecord> for Range {
    type Error = DomainError;

    /// Half-painted cells and cells of unknown actions come back unpainted;
    /// stored hand labels are replaced by the positional ones.
    fn try_from(record: RangeRecord) -> DomainResult<Self> {
        let actions: Vec<Action> = record
            .actions
            .into_iter()
            .map(|a| Action::new(ActionId(a.id), a.name, Color::new(a.color)))
            .collect();
        check_actions(&actions)?;
        let known: HashSet<ActionId> = actions.iter().map(|a| a.id).collect();

        let paints = record
            .cells
            .into_iter()
            .map(|cell| match (cell.color, cell.action_id) {
                (Some(color), Some(id)) if known.contains(&ActionId(id)) => {
                    Some(Paint::new(Color::new(color), ActionId(id)))
                }
                _ => None,
            })
            .collect();
        let grid = Grid::from_paints(paints)?;

        Ok(Range {
            id: RangeId(record.id),
            name: record.name,
            grid,
            actions,
            folder_id: record.folder_id.map(FolderId),
            created_at: record.created_at,
        })
    }
}

/// Map listed rows, skipping (and logging) the ones that fail validation
pub fn decode_ranges(records: Vec<RangeRecord>) -> Vec<Range> {
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            match Range::try_from(record) {
                Ok(range) => Some(range),
                Err(e) => {
                    log::warn!("skipping stored range {}: {}", id, e);
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CELL_COUNT;
    use serde_json::json;

    fn record_json(cells: serde_json::Value, actions: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "name": "UTG",
            "folder_id": null,
            "cells": cells,
            "actions": actions,
            "created_at": "2024-05-01T10:00:00.123456+00:00"
        })
    }

    fn blank_cells() -> Vec<serde_json::Value> {
        (0..CELL_COUNT)
            .map(|_| json!({ "hand": "??", "color": null, "actionId": null }))
            .collect()
    }

    fn decode(value: serde_json::Value) -> DomainResult<Range> {
        let record: RangeRecord = serde_json::from_value(value).unwrap();
        Range::try_from(record)
    }

    #[test]
    fn test_decode_valid_record() {
        let mut cells = blank_cells();
        cells[1] = json!({ "hand": "AKs", "color": "#ff4444", "actionId": 1 });
        let range = decode(record_json(
            json!(cells),
            json!([{ "id": 1, "name": "Raise", "color": "#ff4444" }]),
        ))
        .unwrap();

        assert_eq!(range.name, "UTG");
        assert_eq!(range.grid.painted_count(), 1);
        // positional labels win over stored ones
        assert_eq!(range.grid.get(0).unwrap().hand().as_str(), "AA");
        assert_eq!(range.grid.get(1).unwrap().action_id(), Some(ActionId(1)));
    }

    #[test]
    fn test_half_null_and_dangling_cells_are_unpainted() {
        let mut cells = blank_cells();
        cells[0] = json!({ "hand": "AA", "color": "#ff4444", "actionId": null });
        cells[1] = json!({ "hand": "AKs", "color": null, "actionId": 1 });
        cells[2] = json!({ "hand": "AQs", "color": "#ff4444", "actionId": 9 });
        let range = decode(record_json(
            json!(cells),
            json!([{ "id": 1, "name": "Raise", "color": "#ff4444" }]),
        ))
        .unwrap();
        assert_eq!(range.grid.painted_count(), 0);
    }

    #[test]
    fn test_empty_cells_become_fresh_grid() {
        let range = decode(record_json(
            json!([]),
            json!([{ "id": 1, "name": "Raise", "color": "#ff4444" }]),
        ))
        .unwrap();
        assert_eq!(range.grid, Grid::new());
    }

    #[test]
    fn test_bad_records_rejected() {
        let short = decode(record_json(
            json!(blank_cells()[..100]),
            json!([{ "id": 1, "name": "Raise", "color": "#ff4444" }]),
        ));
        assert!(short.is_err());

        let no_actions = decode(record_json(json!(blank_cells()), json!([])));
        assert!(no_actions.is_err());
    }

    #[test]
    fn test_decode_ranges_skips_invalid() {
        let good: RangeRecord = serde_json::from_value(record_json(
            json!([]),
            json!([{ "id": 1, "name": "Raise", "color": "#ff4444" }]),
        ))
        .unwrap();
        let mut bad = good.clone();
        bad.actions.clear();
        assert_eq!(decode_ranges(vec![good, bad]).len(), 1);
    }

    #[test]
    fn test_write_uses_store_column_names() {
        let mut grid = Grid::new();
        grid.set_paint(0, Some(Paint::new(Color::new("#ff4444"), ActionId(1))));
        let draft = RangeDraft {
            name: "BTN".into(),
            grid,
            actions: vec![Action::primary()],
            folder_id: None,
        };
        let value = serde_json::to_value(RangeWrite::from(&draft)).unwrap();
        assert_eq!(value["folder_id"], serde_json::Value::Null);
        assert_eq!(value["cells"][0], json!({ "hand": "AA", "color": "#ff4444", "actionId": 1 }));
        assert_eq!(value["cells"][1]["actionId"], serde_json::Value::Null);
        assert_eq!(value["actions"][0]["name"], "Action 1");
    }
}
