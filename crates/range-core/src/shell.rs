//! Shell State
//!
//! Which tab is showing, which range is open, which folder new ranges go
//! into and whether the sidebar drawer is open. Transitions are pure.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::{FolderId, RangeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Editor,
    Trainer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Shell {
    pub tab: Tab,
    pub open_range: Option<RangeId>,
    pub current_folder: Option<FolderId>,
    /// Drawer on narrow screens
    pub sidebar_open: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn switch_tab(self, tab: Tab) -> Self {
        Self { tab, ..self }
    }

    /// Range picked in the sidebar; opens in whichever tab is showing
    pub fn select_range(self, id: RangeId) -> Self {
        Self {
            open_range: Some(id),
            sidebar_open: false,
            ..self
        }
    }

    /// "Edit" from a context menu always lands in the editor
    pub fn edit_range(self, id: RangeId) -> Self {
        Self {
            tab: Tab::Editor,
            open_range: Some(id),
            sidebar_open: false,
            ..self
        }
    }

    /// Blank editor for a new range inside `folder`
    pub fn new_range(self, folder: Option<FolderId>) -> Self {
        Self {
            tab: Tab::Editor,
            open_range: None,
            current_folder: folder,
            sidebar_open: false,
        }
    }

    pub fn select_folder(self, folder: Option<FolderId>) -> Self {
        Self {
            current_folder: folder,
            ..self
        }
    }

    pub fn open_sidebar(self) -> Self {
        Self {
            sidebar_open: true,
            ..self
        }
    }

    pub fn close_sidebar(self) -> Self {
        Self {
            sidebar_open: false,
            ..self
        }
    }

    pub fn range_deleted(self, id: RangeId) -> Self {
        Self {
            open_range: self.open_range.filter(|open| *open != id),
            ..self
        }
    }

    pub fn folder_deleted(self, id: FolderId) -> Self {
        Self {
            current_folder: self.current_folder.filter(|current| *current != id),
            ..self
        }
    }

    /// Drop references a freshly loaded catalog no longer contains
    pub fn reconciled(self, catalog: &Catalog) -> Self {
        Self {
            open_range: self.open_range.filter(|id| catalog.range(*id).is_some()),
            current_folder: self.current_folder.filter(|id| catalog.folder(*id).is_some()),
            ..self
        }
    }
}
