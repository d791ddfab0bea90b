//! Library Service
//!
//! Validates a command against the current catalog, performs exactly one
//! gateway round trip (or none when the command is refused) and returns the
//! change to apply locally. Nothing here mutates the catalog itself.

use crate::catalog::{Catalog, CatalogChange, DragItem, DropTarget, MoveIntent};
use crate::domain::{
    folder_name, DomainError, DomainResult, FolderId, MoveRejection, RangeId,
};
use crate::engine::SaveRequest;
use crate::gateway::PersistenceGateway;

#[cfg(test)]
mod tests;

pub struct Library<'a, G: PersistenceGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: PersistenceGateway + ?Sized> Library<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Fetch every folder and range
    pub async fn load(&self) -> DomainResult<CatalogChange> {
        let folders = self.gateway.list_folders().await?;
        let ranges = self.gateway.list_ranges().await?;
        log::info!("loaded {} folders, {} ranges", folders.len(), ranges.len());
        Ok(CatalogChange::Loaded { folders, ranges })
    }

    pub async fn create_folder(
        &self,
        catalog: &Catalog,
        name: &str,
        parent_id: Option<FolderId>,
    ) -> DomainResult<CatalogChange> {
        let name = folder_name(name)?;
        if let Some(parent) = parent_id {
            if catalog.folder(parent).is_none() {
                return Err(DomainError::NotFound(format!("folder {}", parent)));
            }
        }
        let folder = self.gateway.create_folder(&name, parent_id).await?;
        log::info!("created folder {} ({})", folder.name, folder.id);
        Ok(CatalogChange::FolderCreated(folder))
    }

    /// Reparent a folder; moves into itself or a descendant are refused
    pub async fn move_folder(
        &self,
        catalog: &Catalog,
        id: FolderId,
        new_parent: Option<FolderId>,
    ) -> DomainResult<CatalogChange> {
        catalog
            .check_folder_move(id, new_parent)
            .map_err(|reason| reject("folder", reason))?;
        self.gateway.set_folder_parent(id, new_parent).await?;
        Ok(CatalogChange::FolderMoved {
            id,
            parent: new_parent,
        })
    }

    pub async fn move_range(
        &self,
        catalog: &Catalog,
        id: RangeId,
        new_folder: Option<FolderId>,
    ) -> DomainResult<CatalogChange> {
        catalog
            .check_range_move(id, new_folder)
            .map_err(|reason| reject("range", reason))?;
        self.gateway.set_range_folder(id, new_folder).await?;
        Ok(CatalogChange::RangeMoved {
            id,
            folder: new_folder,
        })
    }

    /// Carry out a resolved move
    pub async fn apply_move(
        &self,
        catalog: &Catalog,
        intent: MoveIntent,
    ) -> DomainResult<CatalogChange> {
        match intent {
            MoveIntent::Folder { id, parent } => self.move_folder(catalog, id, parent).await,
            MoveIntent::Range { id, folder } => self.move_range(catalog, id, folder).await,
        }
    }

    /// Drag-and-drop entry point
    pub async fn drop_item(
        &self,
        catalog: &Catalog,
        item: DragItem,
        target: DropTarget,
    ) -> DomainResult<CatalogChange> {
        let intent = catalog
            .resolve_drop(item, target)
            .map_err(|reason| reject("drop", reason))?;
        self.apply_move(catalog, intent).await
    }

    /// Only empty folders can be deleted
    pub async fn delete_folder(&self, catalog: &Catalog, id: FolderId) -> DomainResult<CatalogChange> {
        let folder = catalog
            .folder(id)
            .ok_or_else(|| DomainError::NotFound(format!("folder {}", id)))?;
        if !catalog.is_empty_folder(id) {
            return Err(DomainError::InvalidInput(format!(
                "Folder \"{}\" is not empty",
                folder.name
            )));
        }
        self.gateway.delete_folder(id).await?;
        log::info!("deleted folder {}", id);
        Ok(CatalogChange::FolderDeleted(id))
    }

    /// Create or update from the editor
    pub async fn save_range(&self, request: SaveRequest) -> DomainResult<CatalogChange> {
        let range = match request {
            SaveRequest::Create(draft) => {
                let draft = draft.validated()?;
                self.gateway.create_range(&draft).await?
            }
            SaveRequest::Update(id, draft) => {
                let draft = draft.validated()?;
                self.gateway.update_range(id, &draft).await?
            }
        };
        log::info!("saved range {} ({})", range.name, range.id);
        Ok(CatalogChange::RangeSaved(range))
    }

    /// Copy a range as "{name} (Copy)" into the same folder
    pub async fn duplicate_range(&self, catalog: &Catalog, id: RangeId) -> DomainResult<CatalogChange> {
        let range = catalog
            .range(id)
            .ok_or_else(|| DomainError::NotFound(format!("range {}", id)))?;
        let copy = self.gateway.create_range(&range.duplicate_draft()).await?;
        log::info!("duplicated range {} as {}", id, copy.id);
        Ok(CatalogChange::RangeSaved(copy))
    }

    pub async fn delete_range(&self, catalog: &Catalog, id: RangeId) -> DomainResult<CatalogChange> {
        if catalog.range(id).is_none() {
            return Err(DomainError::NotFound(format!("range {}", id)));
        }
        self.gateway.delete_range(id).await?;
        log::info!("deleted range {}", id);
        Ok(CatalogChange::RangeDeleted(id))
    }
}

fn reject(what: &str, reason: MoveRejection) -> DomainError {
    log::debug!("{} move refused: {}", what, reason);
    DomainError::Rejected(reason)
}
