//! Library Commands
//!
//! Frontend entry points to the store. Each command builds the configured
//! gateway, runs one library operation and hands back the catalog change.

mod local;
mod rest;

use async_trait::async_trait;

use range_core::catalog::{Catalog, CatalogChange, DragItem, DropTarget};
use range_core::domain::{DomainResult, Folder, FolderId, Range, RangeDraft, RangeId};
use range_core::engine::SaveRequest;
use range_core::gateway::PersistenceGateway;
use range_core::library::Library;

use crate::config::StoreConfig;

pub use local::LocalGateway;
pub use rest::RestGateway;

/// The store selected at build time
pub enum Gateway {
    Rest(RestGateway),
    Local(LocalGateway),
}

impl Gateway {
    pub fn from_config(config: Option<StoreConfig>) -> Self {
        match config {
            Some(config) => Gateway::Rest(RestGateway::new(config)),
            None => Gateway::Local(LocalGateway::open()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gateway::Rest(_) => "remote",
            Gateway::Local(_) => "local",
        }
    }
}

/// Gateway for one command
pub fn gateway() -> Gateway {
    Gateway::from_config(StoreConfig::from_env())
}

/// Log which store is in use; called once at startup
pub fn announce_store() {
    match StoreConfig::from_env() {
        Some(config) => log::info!("using remote store at {}", config.url),
        None => log::warn!("SUPABASE_URL/SUPABASE_ANON_KEY not set; keeping the library in localStorage"),
    }
}

#[async_trait(?Send)]
impl PersistenceGateway for Gateway {
    async fn list_folders(&self) -> DomainResult<Vec<Folder>> {
        match self {
            Gateway::Rest(g) => g.list_folders().await,
            Gateway::Local(g) => g.list_folders().await,
        }
    }

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> DomainResult<Folder> {
        match self {
            Gateway::Rest(g) => g.create_folder(name, parent_id).await,
            Gateway::Local(g) => g.create_folder(name, parent_id).await,
        }
    }

    async fn set_folder_parent(&self, id: FolderId, parent_id: Option<FolderId>) -> DomainResult<()> {
        match self {
            Gateway::Rest(g) => g.set_folder_parent(id, parent_id).await,
            Gateway::Local(g) => g.set_folder_parent(id, parent_id).await,
        }
    }

    async fn delete_folder(&self, id: FolderId) -> DomainResult<()> {
        match self {
            Gateway::Rest(g) => g.delete_folder(id).await,
            Gateway::Local(g) => g.delete_folder(id).await,
        }
    }

    async fn list_ranges(&self) -> DomainResult<Vec<Range>> {
        match self {
            Gateway::Rest(g) => g.list_ranges().await,
            Gateway::Local(g) => g.list_ranges().await,
        }
    }

    async fn create_range(&self, draft: &RangeDraft) -> DomainResult<Range> {
        match self {
            Gateway::Rest(g) => g.create_range(draft).await,
            Gateway::Local(g) => g.create_range(draft).await,
        }
    }

    async fn update_range(&self, id: RangeId, draft: &RangeDraft) -> DomainResult<Range> {
        match self {
            Gateway::Rest(g) => g.update_range(id, draft).await,
            Gateway::Local(g) => g.update_range(id, draft).await,
        }
    }

    async fn set_range_folder(&self, id: RangeId, folder_id: Option<FolderId>) -> DomainResult<()> {
        match self {
            Gateway::Rest(g) => g.set_range_folder(id, folder_id).await,
            Gateway::Local(g) => g.set_range_folder(id, folder_id).await,
        }
    }

    async fn delete_range(&self, id: RangeId) -> DomainResult<()> {
        match self {
            Gateway::Rest(g) => g.delete_range(id).await,
            Gateway::Local(g) => g.delete_range(id).await,
        }
    }
}

// ========================
// Commands
// ========================

pub async fn load_library() -> DomainResult<CatalogChange> {
    let gateway = gateway();
    log::debug!("loading library from {} store", gateway.name());
    Library::new(&gateway).load().await
}

pub async fn create_folder(catalog: Catalog, name: String, parent_id: Option<FolderId>) -> DomainResult<CatalogChange> {
    let gateway = gateway();
    Library::new(&gateway).create_folder(&catalog, &name, parent_id).await
}

pub async fn delete_folder(catalog: Catalog, id: FolderId) -> DomainResult<CatalogChange> {
    let gateway = gateway();
    Library::new(&gateway).delete_folder(&catalog, id).await
}

pub async fn drop_item(catalog: Catalog, item: DragItem, target: DropTarget) -> DomainResult<CatalogChange> {
    let gateway = gateway();
    Library::new(&gateway).drop_item(&catalog, item, target).await
}

pub async fn save_range(request: SaveRequest) -> DomainResult<CatalogChange> {
    let gateway = gateway();
    Library::new(&gateway).save_range(request).await
}

pub async fn duplicate_range(catalog: Catalog, id: RangeId) -> DomainResult<CatalogChange> {
    let gateway = gateway();
    Library::new(&gateway).duplicate_range(&catalog, id).await
}

pub async fn delete_range(catalog: Catalog, id: RangeId) -> DomainResult<CatalogChange> {
    let gateway = gateway();
    Library::new(&gateway).delete_range(&catalog, id).await
}
