//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use range_core::catalog::{Catalog, CatalogChange};
use range_core::domain::DomainError;
use range_core::shell::Shell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Dismissable message shown above the main area
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    /// Distinguishes repeated identical messages
    pub serial: u32,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Folders and ranges
    pub catalog: Catalog,
    /// Tab, open range, current folder, drawer
    pub shell: Shell,
    pub notice: Option<Notice>,
    /// Notices shown so far; never reset
    pub notice_count: u32,
    /// Library load in flight
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a catalog change and keep shell references valid
pub fn store_apply_change(store: &AppStore, change: CatalogChange) {
    match &change {
        CatalogChange::RangeDeleted(id) => {
            let id = *id;
            store.shell().update(|shell| *shell = shell.range_deleted(id));
        }
        CatalogChange::FolderDeleted(id) => {
            let id = *id;
            store.shell().update(|shell| *shell = shell.folder_deleted(id));
        }
        _ => {}
    }
    let reloaded = matches!(change, CatalogChange::Loaded { .. });
    store.catalog().update(|catalog| catalog.apply(change));
    if reloaded {
        let shell = store
            .catalog()
            .with_untracked(|catalog| store.shell().get_untracked().reconciled(catalog));
        store.shell().set(shell);
    }
}

pub fn store_notify(store: &AppStore, kind: NoticeKind, message: impl Into<String>) {
    let serial = store.notice_count().get_untracked() + 1;
    store.notice_count().set(serial);
    store.notice().set(Some(Notice {
        kind,
        message: message.into(),
        serial,
    }));
}

/// Report a failed command. Refused drag moves stay silent.
pub fn store_report_error(store: &AppStore, err: &DomainError) {
    if err.is_silent() {
        log::debug!("ignored: {}", err);
        return;
    }
    log::warn!("command failed: {}", err);
    store_notify(store, NoticeKind::Error, err.to_string());
}

pub fn store_dismiss_notice(store: &AppStore) {
    store.notice().set(None);
}
