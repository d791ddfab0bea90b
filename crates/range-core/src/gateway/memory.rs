//! In-Memory Gateway
//!
//! Keeps store rows in a `RefCell`. Used by tests and, wrapped with a
//! localStorage snapshot, as the offline store of the browser app.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Folder, FolderId, Range, RangeDraft, RangeId};
use super::record::{decode_ranges, FolderRecord, RangeRecord, RangeWrite};
use super::PersistenceGateway;

/// Serializable copy of the whole store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    #[serde(default)]
    pub folders: Vec<FolderRecord>,
    #[serde(default)]
    pub ranges: Vec<RangeRecord>,
}

#[derive(Debug)]
pub struct MemoryGateway {
    rows: RefCell<LibrarySnapshot>,
    next_id: Cell<u128>,
    calls: Cell<usize>,
    failing: Cell<bool>,
}

impl Default for MemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::from_snapshot(LibrarySnapshot::default())
    }

    /// Resume from saved rows; new ids continue above the highest stored one
    pub fn from_snapshot(snapshot: LibrarySnapshot) -> Self {
        let highest = snapshot
            .folders
            .iter()
            .map(|f| f.id.as_u128())
            .chain(snapshot.ranges.iter().map(|r| r.id.as_u128()))
            .max()
            .unwrap_or(0);
        Self {
            rows: RefCell::new(snapshot),
            next_id: Cell::new(highest.saturating_add(1)),
            calls: Cell::new(0),
            failing: Cell::new(false),
        }
    }

    pub fn snapshot(&self) -> LibrarySnapshot {
        self.rows.borrow().clone()
    }

    /// Number of gateway calls made so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Make every following call fail with a remote error
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    fn begin(&self, op: &str) -> DomainResult<()> {
        self.calls.set(self.calls.get() + 1);
        if self.failing.get() {
            log::warn!("memory gateway: {} failed (simulated)", op);
            return Err(DomainError::Remote(format!("{} failed", op)));
        }
        Ok(())
    }

    fn issue_id(&self) -> Uuid {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        Uuid::from_u128(id)
    }
}

#[async_trait(?Send)]
impl PersistenceGateway for MemoryGateway {
    async fn list_folders(&self) -> DomainResult<Vec<Folder>> {
        self.begin("list_folders")?;
        let mut folders = self.rows.borrow().folders.clone();
        folders.sort_by_key(|f| f.created_at);
        Ok(folders.into_iter().map(Folder::from).collect())
    }

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> DomainResult<Folder> {
        self.begin("create_folder")?;
        let record = FolderRecord {
            id: self.issue_id(),
            name: name.to_string(),
            parent_id: parent_id.map(|p| p.0),
            created_at: Utc::now(),
        };
        self.rows.borrow_mut().folders.push(record.clone());
        Ok(Folder::from(record))
    }

    async fn set_folder_parent(&self, id: FolderId, parent_id: Option<FolderId>) -> DomainResult<()> {
        self.begin("set_folder_parent")?;
        let mut rows = self.rows.borrow_mut();
        let folder = rows
            .folders
            .iter_mut()
            .find(|f| f.id == id.0)
            .ok_or_else(|| DomainError::NotFound(format!("folder {}", id)))?;
        folder.parent_id = parent_id.map(|p| p.0);
        Ok(())
    }

    async fn delete_folder(&self, id: FolderId) -> DomainResult<()> {
        self.begin("delete_folder")?;
        let mut rows = self.rows.borrow_mut();
        let before = rows.folders.len();
        rows.folders.retain(|f| f.id != id.0);
        if rows.folders.len() == before {
            return Err(DomainError::NotFound(format!("folder {}", id)));
        }
        Ok(())
    }

    async fn list_ranges(&self) -> DomainResult<Vec<Range>> {
        self.begin("list_ranges")?;
        let mut ranges = self.rows.borrow().ranges.clone();
        ranges.sort_by_key(|r| r.created_at);
        Ok(decode_ranges(ranges))
    }

    async fn create_range(&self, draft: &RangeDraft) -> DomainResult<Range> {
        self.begin("create_range")?;
        let write = RangeWrite::from(draft);
        let record = RangeRecord {
            id: self.issue_id(),
            name: write.name,
            folder_id: write.folder_id,
            cells: write.cells,
            actions: write.actions,
            created_at: Utc::now(),
        };
        self.rows.borrow_mut().ranges.push(record.clone());
        Range::try_from(record)
    }

    async fn update_range(&self, id: RangeId, draft: &RangeDraft) -> DomainResult<Range> {
        self.begin("update_range")?;
        let write = RangeWrite::from(draft);
        let mut rows = self.rows.borrow_mut();
        let record = rows
            .ranges
            .iter_mut()
            .find(|r| r.id == id.0)
            .ok_or_else(|| DomainError::NotFound(format!("range {}", id)))?;
        record.name = write.name;
        record.folder_id = write.folder_id;
        record.cells = write.cells;
        record.actions = write.actions;
        Range::try_from(record.clone())
    }

    async fn set_range_folder(&self, id: RangeId, folder_id: Option<FolderId>) -> DomainResult<()> {
        self.begin("set_range_folder")?;
        let mut rows = self.rows.borrow_mut();
        let record = rows
            .ranges
            .iter_mut()
            .find(|r| r.id == id.0)
            .ok_or_else(|| DomainError::NotFound(format!("range {}", id)))?;
        record.folder_id = folder_id.map(|f| f.0);
        Ok(())
    }

    async fn delete_range(&self, id: RangeId) -> DomainResult<()> {
        self.begin("delete_range")?;
        let mut rows = self.rows.borrow_mut();
        let before = rows.ranges.len();
        rows.ranges.retain(|r| r.id != id.0);
        if rows.ranges.len() == before {
            return Err(DomainError::NotFound(format!("range {}", id)));
        }
        Ok(())
    }
}
