//! Drag State Machine
//!
//! idle -> dragging(item) -> hovering(target, valid?) -> dropped | cancelled -> idle

use serde::{Deserialize, Serialize};

use crate::domain::{FolderId, MoveRejection, RangeId};
use super::tree::Catalog;

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragItem {
    Folder(FolderId),
    Range(RangeId),
}

/// What the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropTarget {
    Folder(FolderId),
    Range(RangeId),
    /// Top-level drop zone
    Root,
}

/// A resolved, valid move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveIntent {
    Folder { id: FolderId, parent: Option<FolderId> },
    Range { id: RangeId, folder: Option<FolderId> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragItem),
    Hovering {
        item: DragItem,
        target: DropTarget,
        valid: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSession {
    phase: DragPhase,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn item(&self) -> Option<DragItem> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(item) | DragPhase::Hovering { item, .. } => Some(item),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// Hover validity of `target`, for rendering
    pub fn hover_state(&self, target: DropTarget) -> Option<bool> {
        match self.phase {
            DragPhase::Hovering { target: t, valid, .. } if t == target => Some(valid),
            _ => None,
        }
    }

    pub fn start(&mut self, item: DragItem) {
        self.phase = DragPhase::Dragging(item);
    }

    /// Pointer entered a target; validity is computed against the catalog
    pub fn hover(&mut self, target: DropTarget, catalog: &Catalog) {
        if let Some(item) = self.item() {
            let valid = catalog.resolve_drop(item, target).is_ok();
            self.phase = DragPhase::Hovering { item, target, valid };
        }
    }

    /// Pointer left `target` without dropping
    pub fn leave(&mut self, target: DropTarget) {
        if let DragPhase::Hovering { item, target: t, .. } = self.phase {
            if t == target {
                self.phase = DragPhase::Dragging(item);
            }
        }
    }

    /// Release the pointer. Returns None when nothing was hovered (a cancel),
    /// otherwise the move or why it was refused. Always ends idle.
    pub fn release(&mut self, catalog: &Catalog) -> Option<Result<MoveIntent, MoveRejection>> {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            DragPhase::Hovering { item, target, .. } => Some(catalog.resolve_drop(item, target)),
            _ => None,
        }
    }

    /// Drop onto an explicit target, without a prior hover
    pub fn drop_on(
        &mut self,
        target: DropTarget,
        catalog: &Catalog,
    ) -> Option<Result<MoveIntent, MoveRejection>> {
        let item = self.item()?;
        self.phase = DragPhase::Idle;
        Some(catalog.resolve_drop(item, target))
    }

    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Folder;
    use chrono::Utc;
    use uuid::Uuid;

    fn fid(n: u128) -> FolderId {
        FolderId(Uuid::from_u128(n))
    }

    fn catalog() -> Catalog {
        let folder = |n, parent: Option<u128>| Folder {
            id: fid(n),
            name: format!("F{}", n),
            parent_id: parent.map(fid),
            created_at: Utc::now(),
        };
        Catalog::from_parts(vec![folder(1, None), folder(2, Some(1)), folder(3, None)], vec![])
    }

    #[test]
    fn test_full_cycle_to_valid_drop() {
        let catalog = catalog();
        let mut session = DragSession::new();
        assert_eq!(session.phase(), DragPhase::Idle);

        session.start(DragItem::Folder(fid(2)));
        assert_eq!(session.phase(), DragPhase::Dragging(DragItem::Folder(fid(2))));

        session.hover(DropTarget::Folder(fid(3)), &catalog);
        assert_eq!(session.hover_state(DropTarget::Folder(fid(3))), Some(true));

        let result = session.release(&catalog);
        assert_eq!(
            result,
            Some(Ok(MoveIntent::Folder { id: fid(2), parent: Some(fid(3)) }))
        );
        assert!(!session.is_active());
    }

    #[test]
    fn test_invalid_hover_is_flagged_and_refused() {
        let catalog = catalog();
        let mut session = DragSession::new();
        session.start(DragItem::Folder(fid(1)));
        session.hover(DropTarget::Folder(fid(2)), &catalog);
        assert_eq!(session.hover_state(DropTarget::Folder(fid(2))), Some(false));
        assert_eq!(session.release(&catalog), Some(Err(MoveRejection::Cycle)));
        assert_eq!(session.phase(), DragPhase::Idle);
    }

    #[test]
    fn test_leave_then_release_cancels() {
        let catalog = catalog();
        let mut session = DragSession::new();
        session.start(DragItem::Folder(fid(2)));
        session.hover(DropTarget::Root, &catalog);
        session.leave(DropTarget::Root);
        assert_eq!(session.phase(), DragPhase::Dragging(DragItem::Folder(fid(2))));
        assert_eq!(session.release(&catalog), None);
        assert!(!session.is_active());
    }

    #[test]
    fn test_hover_without_drag_is_ignored() {
        let mut session = DragSession::new();
        session.hover(DropTarget::Root, &catalog());
        assert_eq!(session.phase(), DragPhase::Idle);
        assert_eq!(session.drop_on(DropTarget::Root, &catalog()), None);
    }

    #[test]
    fn test_drop_on_self_is_refused() {
        let catalog = catalog();
        let mut session = DragSession::new();
        session.start(DragItem::Folder(fid(3)));
        assert_eq!(
            session.drop_on(DropTarget::Folder(fid(3)), &catalog),
            Some(Err(MoveRejection::SelfDrop))
        );
    }
}
