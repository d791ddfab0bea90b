//! localStorage Gateway
//!
//! In-memory store rows persisted as one JSON snapshot in localStorage.
//! Used when no remote store is configured.

use async_trait::async_trait;

use range_core::domain::{DomainError, DomainResult, Folder, FolderId, Range, RangeDraft, RangeId};
use range_core::gateway::{LibrarySnapshot, MemoryGateway, PersistenceGateway};

use crate::config::LOCAL_STORAGE_KEY;

pub struct LocalGateway {
    inner: MemoryGateway,
}

fn storage() -> DomainResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| DomainError::Remote("localStorage is not available".to_string()))
}

impl LocalGateway {
    /// Load the saved snapshot; a missing or unreadable one starts empty
    pub fn open() -> Self {
        let snapshot = match storage().map(|s| s.get_item(LOCAL_STORAGE_KEY)) {
            Ok(Ok(Some(json))) => serde_json::from_str::<LibrarySnapshot>(&json).unwrap_or_else(|e| {
                log::warn!("discarding unreadable local library: {}", e);
                LibrarySnapshot::default()
            }),
            _ => LibrarySnapshot::default(),
        };
        Self {
            inner: MemoryGateway::from_snapshot(snapshot),
        }
    }

    fn persist(&self) -> DomainResult<()> {
        let json = serde_json::to_string(&self.inner.snapshot())
            .map_err(|e| DomainError::Remote(format!("serialize library: {}", e)))?;
        storage()?
            .set_item(LOCAL_STORAGE_KEY, &json)
            .map_err(|_| DomainError::Remote("localStorage write failed".to_string()))
    }
}

#[async_trait(?Send)]
impl PersistenceGateway for LocalGateway {
    async fn list_folders(&self) -> DomainResult<Vec<Folder>> {
        self.inner.list_folders().await
    }

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> DomainResult<Folder> {
        let folder = self.inner.create_folder(name, parent_id).await?;
        self.persist()?;
        Ok(folder)
    }

    async fn set_folder_parent(&self, id: FolderId, parent_id: Option<FolderId>) -> DomainResult<()> {
        self.inner.set_folder_parent(id, parent_id).await?;
        self.persist()
    }

    async fn delete_folder(&self, id: FolderId) -> DomainResult<()> {
        self.inner.delete_folder(id).await?;
        self.persist()
    }

    async fn list_ranges(&self) -> DomainResult<Vec<Range>> {
        self.inner.list_ranges().await
    }

    async fn create_range(&self, draft: &RangeDraft) -> DomainResult<Range> {
        let range = self.inner.create_range(draft).await?;
        self.persist()?;
        Ok(range)
    }

    async fn update_range(&self, id: RangeId, draft: &RangeDraft) -> DomainResult<Range> {
        let range = self.inner.update_range(id, draft).await?;
        self.persist()?;
        Ok(range)
    }

    async fn set_range_folder(&self, id: RangeId, folder_id: Option<FolderId>) -> DomainResult<()> {
        self.inner.set_range_folder(id, folder_id).await?;
        self.persist()
    }

    async fn delete_range(&self, id: RangeId) -> DomainResult<()> {
        self.inner.delete_range(id).await?;
        self.persist()
    }
}
