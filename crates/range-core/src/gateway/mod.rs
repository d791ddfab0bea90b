//! Persistence Gateway
//!
//! Abstract interface to the store holding folders and ranges.
//! Implementations: in-memory (tests, offline), PostgREST and localStorage
//! (the latter two live in the browser app).

use async_trait::async_trait;

use crate::domain::{DomainResult, Folder, FolderId, Range, RangeDraft, RangeId};

mod memory;
mod record;

pub use memory::{LibrarySnapshot, MemoryGateway};
pub use record::{
    decode_ranges, ActionRecord, CellRecord, FolderParentPatch, FolderRecord, NewFolderRecord,
    RangeFolderPatch, RangeRecord, RangeWrite,
};

/// Store operations used by the library
///
/// Every call is one round trip. Any `Err` means the change did not happen.
/// Lists come back in creation order. Not `Send`: browser fetch futures
/// live on the single UI thread.
#[async_trait(?Send)]
pub trait PersistenceGateway {
    async fn list_folders(&self) -> DomainResult<Vec<Folder>>;

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> DomainResult<Folder>;

    async fn set_folder_parent(&self, id: FolderId, parent_id: Option<FolderId>) -> DomainResult<()>;

    async fn delete_folder(&self, id: FolderId) -> DomainResult<()>;

    async fn list_ranges(&self) -> DomainResult<Vec<Range>>;

    async fn create_range(&self, draft: &RangeDraft) -> DomainResult<Range>;

    /// Replace name, cells, actions and folder of an existing range
    async fn update_range(&self, id: RangeId, draft: &RangeDraft) -> DomainResult<Range>;

    async fn set_range_folder(&self, id: RangeId, folder_id: Option<FolderId>) -> DomainResult<()>;

    async fn delete_range(&self, id: RangeId) -> DomainResult<()>;
}
