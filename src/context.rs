//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use range_core::catalog::{CatalogChange, DragSession};
use range_core::domain::{DomainResult, FolderId, RangeId};
use range_core::engine::{RangeEditor, TrainerSession};
use range_core::shell::Tab;

use crate::store::{
    store_apply_change, store_notify, store_report_error, AppStateStoreFields, AppStore, NoticeKind,
};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    /// Editor tab session
    pub editor: RwSignal<RangeEditor>,
    /// Trainer tab session
    pub trainer: RwSignal<TrainerSession>,
    /// Sidebar drag state
    pub drag: RwSignal<DragSession>,
    /// Trigger to reload the library - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the library - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(store: AppStore, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            store,
            editor: RwSignal::new(RangeEditor::new()),
            trainer: RwSignal::new(TrainerSession::new()),
            drag: RwSignal::new(DragSession::new()),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Trigger a reload of the library
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Range picked in the sidebar; it opens in the tab that is showing
    pub fn open_range(&self, id: RangeId) {
        self.store.shell().update(|s| *s = s.select_range(id));
        self.load_open_range();
    }

    /// Open a range in the editor, switching tabs if needed
    pub fn edit_range(&self, id: RangeId) {
        self.store.shell().update(|s| *s = s.edit_range(id));
        self.load_open_range();
    }

    /// Blank editor for a new range in `folder`
    pub fn new_range(&self, folder: Option<FolderId>) {
        self.editor.update(|e| e.reset());
        self.store.shell().update(|s| *s = s.new_range(folder));
    }

    /// Switch tabs; the open range follows into the new tab
    pub fn switch_tab(&self, tab: Tab) {
        self.store.shell().update(|s| *s = s.switch_tab(tab));
        self.load_open_range();
    }

    /// Load the shell's open range into the session of the current tab,
    /// unless that session already holds it
    fn load_open_range(&self) {
        let shell = self.store.shell().get_untracked();
        let Some(id) = shell.open_range else { return };
        let Some(range) = self.store.catalog().with_untracked(|c| c.range(id).cloned()) else {
            return;
        };
        match shell.tab {
            Tab::Editor => {
                if self.editor.with_untracked(|e| e.editing_id()) == Some(id) {
                    return;
                }
                match RangeEditor::open(&range) {
                    Ok(editor) => self.editor.set(editor),
                    Err(err) => store_report_error(&self.store, &err),
                }
            }
            Tab::Trainer => {
                if self.trainer.with_untracked(|t| t.reference_id()) != Some(id) {
                    self.trainer.update(|t| t.select(range));
                }
            }
        }
    }

    /// Apply a successful change everywhere it matters, or report the error.
    /// Returns whether the command succeeded.
    pub fn settle(&self, result: DomainResult<CatalogChange>, success: Option<String>) -> bool {
        match result {
            Ok(change) => {
                match &change {
                    CatalogChange::RangeDeleted(id) => {
                        let id = *id;
                        self.editor.update(|e| e.forget(id));
                        self.trainer.update(|t| t.forget(id));
                    }
                    CatalogChange::RangeSaved(range) => {
                        // the trainer restarts against the edited copy
                        if self.trainer.with_untracked(|t| t.reference_id()) == Some(range.id) {
                            let range = range.clone();
                            self.trainer.update(|t| t.select(range));
                        }
                    }
                    CatalogChange::RangeMoved { id, folder } => {
                        let (id, folder) = (*id, *folder);
                        self.editor.update(|e| e.folder_changed(id, folder));
                    }
                    CatalogChange::Loaded { ranges, .. } => {
                        // ranges removed elsewhere leave the sessions
                        let known = |id: RangeId| ranges.iter().any(|r| r.id == id);
                        if let Some(id) = self.editor.with_untracked(|e| e.editing_id()).filter(|id| !known(*id)) {
                            self.editor.update(|e| e.forget(id));
                        }
                        if let Some(id) = self.trainer.with_untracked(|t| t.reference_id()).filter(|id| !known(*id)) {
                            self.trainer.update(|t| t.forget(id));
                        }
                    }
                    _ => {}
                }
                store_apply_change(&self.store, change);
                if let Some(message) = success {
                    store_notify(&self.store, NoticeKind::Success, message);
                }
                true
            }
            Err(err) => {
                store_report_error(&self.store, &err);
                false
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
