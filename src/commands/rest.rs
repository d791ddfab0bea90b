//! PostgREST Gateway
//!
//! Talks to the Supabase REST API: `folders` and `ranges` tables, anon key
//! in both the `apikey` and bearer headers.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use range_core::domain::{DomainError, DomainResult, Folder, FolderId, Range, RangeDraft, RangeId};
use range_core::gateway::{
    decode_ranges, FolderParentPatch, FolderRecord, NewFolderRecord, PersistenceGateway,
    RangeFolderPatch, RangeRecord, RangeWrite,
};

use crate::config::StoreConfig;

const FOLDERS: &str = "folders";
const RANGES: &str = "ranges";

pub struct RestGateway {
    client: Client,
    config: StoreConfig,
}

impl RestGateway {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
    }

    fn list(&self, table: &str) -> RequestBuilder {
        self.authorized(self.client.get(self.config.table_url(table)))
            .query(&[("select", "*"), ("order", "created_at.asc")])
    }

    fn insert(&self, table: &str) -> RequestBuilder {
        self.authorized(self.client.post(self.config.table_url(table)))
            .header("Prefer", "return=representation")
    }

    fn patch(&self, table: &str, id: impl std::fmt::Display) -> RequestBuilder {
        self.authorized(self.client.patch(self.config.table_url(table)))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
    }

    fn delete(&self, table: &str, id: impl std::fmt::Display) -> RequestBuilder {
        self.authorized(self.client.delete(self.config.table_url(table)))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
    }
}

/// Send and decode; transport errors and non-2xx statuses become `Remote`
async fn fetch<T: DeserializeOwned>(builder: RequestBuilder, what: &str) -> DomainResult<T> {
    let response = builder
        .send()
        .await
        .map_err(|e| DomainError::Remote(format!("{}: {}", what, e)))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        log::error!("{} failed: {} {}", what, status, body);
        return Err(DomainError::Remote(format!("{}: {}", what, status)));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| DomainError::Remote(format!("{}: bad response: {}", what, e)))
}

/// First row of a `return=representation` response
fn first_row<T>(rows: Vec<T>, what: &str) -> DomainResult<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| DomainError::Remote(format!("{}: no row returned", what)))
}

#[async_trait(?Send)]
impl PersistenceGateway for RestGateway {
    async fn list_folders(&self) -> DomainResult<Vec<Folder>> {
        let rows: Vec<FolderRecord> = fetch(self.list(FOLDERS), "load folders").await?;
        Ok(rows.into_iter().map(Folder::from).collect())
    }

    async fn create_folder(&self, name: &str, parent_id: Option<FolderId>) -> DomainResult<Folder> {
        let body = NewFolderRecord {
            name: name.to_string(),
            parent_id: parent_id.map(|p| p.0),
        };
        let rows: Vec<FolderRecord> = fetch(self.insert(FOLDERS).json(&body), "create folder").await?;
        first_row(rows, "create folder").map(Folder::from)
    }

    async fn set_folder_parent(&self, id: FolderId, parent_id: Option<FolderId>) -> DomainResult<()> {
        let body = FolderParentPatch {
            parent_id: parent_id.map(|p| p.0),
        };
        let rows: Vec<FolderRecord> = fetch(self.patch(FOLDERS, id).json(&body), "move folder").await?;
        first_row(rows, "move folder").map(|_| ())
    }

    async fn delete_folder(&self, id: FolderId) -> DomainResult<()> {
        let rows: Vec<FolderRecord> = fetch(self.delete(FOLDERS, id), "delete folder").await?;
        first_row(rows, "delete folder").map(|_| ())
    }

    async fn list_ranges(&self) -> DomainResult<Vec<Range>> {
        let rows: Vec<RangeRecord> = fetch(self.list(RANGES), "load ranges").await?;
        Ok(decode_ranges(rows))
    }

    async fn create_range(&self, draft: &RangeDraft) -> DomainResult<Range> {
        let body = RangeWrite::from(draft);
        let rows: Vec<RangeRecord> = fetch(self.insert(RANGES).json(&body), "save range").await?;
        Range::try_from(first_row(rows, "save range")?)
    }

    async fn update_range(&self, id: RangeId, draft: &RangeDraft) -> DomainResult<Range> {
        let body = RangeWrite::from(draft);
        let rows: Vec<RangeRecord> = fetch(self.patch(RANGES, id).json(&body), "update range").await?;
        Range::try_from(first_row(rows, "update range")?)
    }

    async fn set_range_folder(&self, id: RangeId, folder_id: Option<FolderId>) -> DomainResult<()> {
        let body = RangeFolderPatch {
            folder_id: folder_id.map(|f| f.0),
        };
        let rows: Vec<RangeRecord> = fetch(self.patch(RANGES, id).json(&body), "move range").await?;
        first_row(rows, "move range").map(|_| ())
    }

    async fn delete_range(&self, id: RangeId) -> DomainResult<()> {
        let rows: Vec<RangeRecord> = fetch(self.delete(RANGES, id), "delete range").await?;
        first_row(rows, "delete range").map(|_| ())
    }
}
