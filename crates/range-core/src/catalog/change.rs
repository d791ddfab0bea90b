//! Catalog Changes
//!
//! The local mutation produced by a successful gateway call. Applying a
//! change is pure and never fails; changes naming unknown ids are no-ops.

use crate::domain::{Folder, FolderId, Range, RangeId};
use super::tree::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogChange {
    Loaded { folders: Vec<Folder>, ranges: Vec<Range> },
    FolderCreated(Folder),
    FolderMoved { id: FolderId, parent: Option<FolderId> },
    FolderDeleted(FolderId),
    /// Created or updated
    RangeSaved(Range),
    RangeMoved { id: RangeId, folder: Option<FolderId> },
    RangeDeleted(RangeId),
}

impl Catalog {
    pub fn apply(&mut self, change: CatalogChange) {
        match change {
            CatalogChange::Loaded { folders, ranges } => self.replace_all(folders, ranges),
            CatalogChange::FolderCreated(folder) => {
                // reveal the new folder
                if let Some(parent) = folder.parent_id {
                    self.expand(parent);
                }
                self.upsert_folder(folder);
            }
            CatalogChange::FolderMoved { id, parent } => self.set_folder_parent(id, parent),
            CatalogChange::FolderDeleted(id) => {
                self.remove_folder(id);
            }
            CatalogChange::RangeSaved(range) => self.upsert_range(range),
            CatalogChange::RangeMoved { id, folder } => self.set_range_folder(id, folder),
            CatalogChange::RangeDeleted(id) => {
                self.remove_range(id);
            }
        }
    }
}
