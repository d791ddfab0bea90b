//! Range Editor Session
//!
//! Name field, action palette and paint engine of the editor tab. The
//! engine's brush always follows the palette's active action.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{
    ActionId, Color, DomainResult, FolderId, Grid, Range, RangeDraft, RangeId,
};
use super::paint::{PaintEngine, PaintOutcome};
use super::palette::ActionPalette;

/// What saving the editor should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(RangeDraft),
    Update(RangeId, RangeDraft),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Loaded {
    id: RangeId,
    folder_id: Option<FolderId>,
}

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

fn next_session() -> u64 {
    NEXT_SESSION.fetch_add(1, Ordering::Relaxed)
}

/// Identifies one editing session: a fresh draft or one opened range.
/// A save response only applies to the session that sent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EditorSession(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeEditor {
    name: String,
    engine: PaintEngine,
    palette: ActionPalette,
    loaded: Option<Loaded>,
    session: EditorSession,
}

impl RangeEditor {
    pub fn new() -> Self {
        let mut editor = Self {
            session: EditorSession(next_session()),
            ..Self::default()
        };
        editor.sync_brush();
        editor
    }

    /// Load a saved range for editing
    pub fn open(range: &Range) -> DomainResult<Self> {
        let palette = ActionPalette::from_actions(range.actions.clone())?;
        let mut editor = Self {
            name: range.name.clone(),
            engine: PaintEngine::with_grid(range.grid.clone()),
            palette,
            loaded: Some(Loaded {
                id: range.id,
                folder_id: range.folder_id,
            }),
            session: EditorSession(next_session()),
        };
        editor.sync_brush();
        Ok(editor)
    }

    /// Back to an empty new range
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn engine(&self) -> &PaintEngine {
        &self.engine
    }

    pub fn palette(&self) -> &ActionPalette {
        &self.palette
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn session(&self) -> EditorSession {
        self.session
    }

    /// Id of the saved range being edited, if any
    pub fn editing_id(&self) -> Option<RangeId> {
        self.loaded.as_ref().map(|l| l.id)
    }

    pub fn paint(&mut self, row: usize, col: usize) -> PaintOutcome {
        self.engine.paint(row, col)
    }

    pub fn begin_stroke(&mut self, row: usize, col: usize) -> PaintOutcome {
        self.engine.begin_stroke(row, col)
    }

    pub fn continue_stroke(&mut self, row: usize, col: usize) -> PaintOutcome {
        self.engine.continue_stroke(row, col)
    }

    pub fn end_stroke(&mut self) {
        self.engine.end_stroke();
    }

    pub fn add_action(&mut self) -> Option<ActionId> {
        let id = self.palette.add();
        self.sync_brush();
        id
    }

    pub fn edit_action(&mut self, id: ActionId, name: &str, color: Color) -> DomainResult<usize> {
        let changed = self.palette.edit(id, name, color, self.engine.grid_mut())?;
        self.sync_brush();
        Ok(changed)
    }

    pub fn delete_action(&mut self, id: ActionId) -> bool {
        let removed = self.palette.delete(id, self.engine.grid_mut());
        self.sync_brush();
        removed
    }

    pub fn set_active(&mut self, id: ActionId) -> bool {
        let changed = self.palette.set_active(id);
        self.sync_brush();
        changed
    }

    pub fn close_action_editor(&mut self) {
        self.palette.close_editor();
    }

    /// Build the validated save request. A new range goes into
    /// `current_folder`; an edited range keeps its own folder.
    pub fn save_request(&self, current_folder: Option<FolderId>) -> DomainResult<SaveRequest> {
        let folder_id = match &self.loaded {
            Some(loaded) => loaded.folder_id,
            None => current_folder,
        };
        let draft = RangeDraft {
            name: self.name.clone(),
            grid: self.engine.grid().clone(),
            actions: self.palette.actions().to_vec(),
            folder_id,
        }
        .validated()?;

        Ok(match &self.loaded {
            Some(loaded) => SaveRequest::Update(loaded.id, draft),
            None => SaveRequest::Create(draft),
        })
    }

    /// Apply the result of a successful save sent from `session`. A new
    /// range clears the form; an update keeps editing the stored copy.
    /// Responses for a session the editor has since left are ignored.
    pub fn saved(&mut self, session: EditorSession, range: &Range) {
        if session != self.session {
            log::debug!("save of {} arrived after the editor moved on", range.id);
            return;
        }
        match &self.loaded {
            None => self.reset(),
            Some(loaded) if loaded.id == range.id => {
                self.name = range.name.clone();
                self.loaded = Some(Loaded {
                    id: range.id,
                    folder_id: range.folder_id,
                });
            }
            Some(_) => {}
        }
    }

    /// The edited range moved to another folder
    pub fn folder_changed(&mut self, id: RangeId, folder_id: Option<FolderId>) {
        if let Some(loaded) = self.loaded.as_mut().filter(|l| l.id == id) {
            loaded.folder_id = folder_id;
        }
    }

    /// The edited range was deleted; the editor falls back to a new range
    pub fn forget(&mut self, id: RangeId) {
        if self.editing_id() == Some(id) {
            self.reset();
        }
    }

    fn sync_brush(&mut self) {
        self.engine.set_brush(self.palette.brush());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Action};
    use chrono::Utc;
    use uuid::Uuid;

    fn saved_range(folder: Option<FolderId>) -> Range {
        let mut editor = RangeEditor::new();
        editor.set_name("CO open");
        editor.paint(0, 0);
        let SaveRequest::Create(draft) = editor.save_request(folder).unwrap() else {
            panic!("expected create");
        };
        Range::from_draft(RangeId(Uuid::from_u128(7)), Utc::now(), draft)
    }

    #[test]
    fn test_brush_follows_active_action() {
        let mut editor = RangeEditor::new();
        assert_eq!(editor.engine().brush().unwrap().action_id, ActionId(1));
        let two = editor.add_action().unwrap();
        editor.paint(1, 1);
        assert_eq!(editor.grid().at(1, 1).unwrap().action_id(), Some(two));
    }

    #[test]
    fn test_delete_active_falls_back_to_primary_brush() {
        let mut editor = RangeEditor::new();
        let two = editor.add_action().unwrap();
        for col in 0..5 {
            editor.paint(0, col);
        }
        assert!(editor.delete_action(two));
        assert_eq!(editor.grid().painted_count(), 0);
        assert_eq!(editor.engine().brush().unwrap().action_id, ActionId::PRIMARY);
        assert!(!editor.delete_action(ActionId::PRIMARY));
    }

    #[test]
    fn test_new_range_save_uses_current_folder() {
        let folder = FolderId(Uuid::from_u128(1));
        let mut editor = RangeEditor::new();
        editor.set_name(" BTN ");
        editor.paint(0, 0);
        match editor.save_request(Some(folder)).unwrap() {
            SaveRequest::Create(draft) => {
                assert_eq!(draft.name, "BTN");
                assert_eq!(draft.folder_id, Some(folder));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_save_validation_messages() {
        let mut editor = RangeEditor::new();
        editor.paint(0, 0);
        assert_eq!(
            editor.save_request(None).unwrap_err(),
            DomainError::InvalidInput("Please enter a range name".into())
        );
        editor.set_name("SB");
        editor.paint(0, 0);
        assert_eq!(
            editor.save_request(None).unwrap_err(),
            DomainError::InvalidInput("Please paint at least one cell".into())
        );
    }

    #[test]
    fn test_existing_range_keeps_its_folder() {
        let home = FolderId(Uuid::from_u128(2));
        let range = saved_range(Some(home));
        let editor = RangeEditor::open(&range).unwrap();
        let other = FolderId(Uuid::from_u128(3));
        match editor.save_request(Some(other)).unwrap() {
            SaveRequest::Update(id, draft) => {
                assert_eq!(id, range.id);
                assert_eq!(draft.folder_id, Some(home));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_saved_clears_only_new_ranges() {
        let range = saved_range(None);

        let mut fresh = RangeEditor::new();
        fresh.set_name("draft");
        let session = fresh.session();
        fresh.saved(session, &range);
        assert_eq!(fresh.name(), "");
        assert_eq!(fresh.editing_id(), None);
        assert_ne!(fresh.session(), session);

        let mut editing = RangeEditor::open(&range).unwrap();
        let session = editing.session();
        editing.saved(session, &range);
        assert_eq!(editing.name(), "CO open");
        assert_eq!(editing.editing_id(), Some(range.id));
    }

    #[test]
    fn test_late_save_keeps_other_range_edits() {
        let a = saved_range(None);
        let mut b = saved_range(None);
        b.id = RangeId(Uuid::from_u128(8));
        b.name = "B".into();

        // save A, then open B and edit it before A's response lands
        let mut editor = RangeEditor::open(&a).unwrap();
        let sent_from = editor.session();
        editor = RangeEditor::open(&b).unwrap();
        editor.paint(5, 5);
        editor.set_name("B edited");
        editor.saved(sent_from, &a);

        assert_eq!(editor.editing_id(), Some(b.id));
        assert_eq!(editor.name(), "B edited");
        assert!(editor.grid().at(5, 5).unwrap().is_painted());
    }

    #[test]
    fn test_late_save_keeps_next_draft() {
        let range = saved_range(None);
        let mut editor = RangeEditor::new();
        editor.set_name("first");
        let sent_from = editor.session();

        // "New Range" before the first draft's response lands
        editor.reset();
        editor.set_name("second");
        editor.paint(3, 3);
        editor.saved(sent_from, &range);

        assert_eq!(editor.name(), "second");
        assert_eq!(editor.grid().painted_count(), 1);
    }

    #[test]
    fn test_open_uses_first_action() {
        let mut range = saved_range(None);
        range.actions.insert(0, Action::numbered(ActionId(3), Color::default_for(2)));
        let editor = RangeEditor::open(&range).unwrap();
        assert_eq!(editor.palette().active(), ActionId(3));
    }
}
