//! Trainer Session
//!
//! The user recreates a saved range from memory with that range's actions,
//! then checks the attempt. Checking locks the grid and shows per-cell status
//! until the attempt is reset or another range is picked.

use crate::domain::{Action, ActionId, Grid, Paint, Range, RangeId};
use super::paint::{PaintEngine, PaintOutcome};
use super::scoring::{compare, ScoreReport};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrainerSession {
    reference: Option<Range>,
    engine: PaintEngine,
    active: Option<ActionId>,
    report: Option<ScoreReport>,
}

impl TrainerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh attempt against `range`; its first action is the brush
    pub fn select(&mut self, range: Range) {
        log::info!("training against range {}", range.id);
        self.active = range.actions.first().map(|a| a.id);
        self.reference = Some(range);
        self.engine = PaintEngine::new();
        self.report = None;
        self.sync_brush();
    }

    pub fn clear_selection(&mut self) {
        *self = Self::new();
    }

    /// Drop the reference if it was deleted from the library
    pub fn forget(&mut self, id: RangeId) {
        if self.reference_id() == Some(id) {
            self.clear_selection();
        }
    }

    pub fn reference(&self) -> Option<&Range> {
        self.reference.as_ref()
    }

    pub fn reference_id(&self) -> Option<RangeId> {
        self.reference.as_ref().map(|r| r.id)
    }

    pub fn actions(&self) -> &[Action] {
        self.reference
            .as_ref()
            .map(|r| r.actions.as_slice())
            .unwrap_or(&[])
    }

    pub fn active(&self) -> Option<ActionId> {
        self.active
    }

    pub fn engine(&self) -> &PaintEngine {
        &self.engine
    }

    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    pub fn report(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    pub fn is_checked(&self) -> bool {
        self.report.is_some()
    }

    pub fn set_active(&mut self, id: ActionId) -> bool {
        if !self.actions().iter().any(|a| a.id == id) {
            return false;
        }
        self.active = Some(id);
        self.sync_brush();
        true
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

    /// Score the attempt and switch the grid to comparison mode
    pub fn check(&mut self) -> Option<ScoreReport> {
        let reference = self.reference.as_ref()?;
        let report = compare(self.engine.grid(), &reference.grid);
        log::info!(
            "checked attempt: {}/{} cells ({}%)",
            report.matches,
            report.total,
            report.percent
        );
        self.engine.set_comparison(Some(reference.grid.clone()));
        self.report = Some(report);
        Some(report)
    }

    /// Clear the attempt and leave comparison mode
    pub fn reset(&mut self) {
        self.engine.set_comparison(None);
        self.engine.replace_grid(Grid::new());
        self.report = None;
    }

    fn sync_brush(&mut self) {
        let brush = self
            .active
            .and_then(|id| self.actions().iter().find(|a| a.id == id))
            .map(|a| Paint::new(a.color.clone(), a.id));
        self.engine.set_brush(brush);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Color, RangeDraft};
    use crate::engine::scoring::CellStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn reference() -> Range {
        let mut grid = Grid::new();
        let raise = Paint::new(Color::new("#ff4444"), ActionId(1));
        for i in 0..13 {
            grid.set_paint(i, Some(raise.clone()));
        }
        let draft = RangeDraft {
            name: "UTG".into(),
            grid,
            actions: vec![
                Action::primary(),
                Action::numbered(ActionId(2), Color::default_for(1)),
            ],
            folder_id: None,
        };
        Range::from_draft(RangeId(Uuid::from_u128(1)), Utc::now(), draft)
    }

    #[test]
    fn test_select_starts_fresh_with_first_action() {
        let mut session = TrainerSession::new();
        session.select(reference());
        assert_eq!(session.active(), Some(ActionId(1)));
        assert_eq!(session.grid().painted_count(), 0);
        assert!(!session.is_checked());
    }

    #[test]
    fn test_no_reference_no_brush() {
        let mut session = TrainerSession::new();
        assert_eq!(session.paint(0, 0), PaintOutcome::Ignored);
        assert!(session.check().is_none());
    }

    #[test]
    fn test_check_scores_and_locks() {
        let mut session = TrainerSession::new();
        session.select(reference());
        for col in 0..13 {
            session.paint(0, col);
        }
        let report = session.check().unwrap();
        assert_eq!(report.percent, 100);
        assert_eq!(session.paint(5, 5), PaintOutcome::Ignored);
        assert_eq!(session.engine().cell_status(0), Some(CellStatus::Correct));
        assert_eq!(session.engine().cell_status(20), Some(CellStatus::Neutral));
    }

    #[test]
    fn test_wrong_action_counts_as_miss() {
        let mut session = TrainerSession::new();
        session.select(reference());
        assert!(session.set_active(ActionId(2)));
        session.paint(0, 0);
        let report = session.check().unwrap();
        assert_eq!(report.matches, 169 - 13);
        assert_eq!(session.engine().cell_status(0), Some(CellStatus::Incorrect));
    }

    #[test]
    fn test_reset_unlocks_and_clears() {
        let mut session = TrainerSession::new();
        session.select(reference());
        session.paint(0, 0);
        session.check();
        session.reset();
        assert!(session.report().is_none());
        assert!(!session.engine().is_locked());
        assert_eq!(session.grid().painted_count(), 0);
        assert_eq!(session.paint(0, 0), PaintOutcome::Painted);
    }

    #[test]
    fn test_forget_deleted_reference() {
        let mut session = TrainerSession::new();
        let range = reference();
        let id = range.id;
        session.select(range);
        session.forget(RangeId(Uuid::from_u128(99)));
        assert!(session.reference().is_some());
        session.forget(id);
        assert!(session.reference().is_none());
    }
}
