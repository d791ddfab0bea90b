//! Cell Paint Engine
//!
//! Holds the grid being painted, the active brush and the stroke state.
//! Painting a cell that already carries exactly the brush clears it; any
//! other cell takes the brush. A comparison grid locks the engine read-only.

use crate::domain::{hand, Grid, Paint, GRID_SIZE};
use super::scoring::{cell_status, CellStatus};

/// What a paint call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintOutcome {
    Painted,
    Cleared,
    Ignored,
}

impl PaintOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, PaintOutcome::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Stroke {
    #[default]
    Idle,
    /// Pointer is down; `last` is the cell painted most recently in this stroke
    Active { last: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaintEngine {
    grid: Grid,
    brush: Option<Paint>,
    stroke: Stroke,
    comparison: Option<Grid>,
}

impl PaintEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Swap in another grid; any stroke in progress ends
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.stroke = Stroke::Idle;
    }

    pub fn brush(&self) -> Option<&Paint> {
        self.brush.as_ref()
    }

    pub fn set_brush(&mut self, brush: Option<Paint>) {
        self.brush = brush;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.stroke, Stroke::Active { .. })
    }

    /// Read-only while a comparison grid is shown
    pub fn is_locked(&self) -> bool {
        self.comparison.is_some()
    }

    pub fn comparison(&self) -> Option<&Grid> {
        self.comparison.as_ref()
    }

    pub fn set_comparison(&mut self, reference: Option<Grid>) {
        self.comparison = reference;
        self.stroke = Stroke::Idle;
    }

    /// Toggle-paint one cell with the active brush
    pub fn paint(&mut self, row: usize, col: usize) -> PaintOutcome {
        if self.is_locked() || row >= GRID_SIZE || col >= GRID_SIZE {
            return PaintOutcome::Ignored;
        }
        let Some(brush) = self.brush.clone() else {
            return PaintOutcome::Ignored;
        };

        let index = hand::index(row, col);
        let already = self.grid.get(index).and_then(|c| c.paint()) == Some(&brush);
        if already {
            self.grid.set_paint(index, None);
            PaintOutcome::Cleared
        } else {
            self.grid.set_paint(index, Some(brush));
            PaintOutcome::Painted
        }
    }

    /// Pointer/touch down on a cell
    pub fn begin_stroke(&mut self, row: usize, col: usize) -> PaintOutcome {
        if self.is_locked() || row >= GRID_SIZE || col >= GRID_SIZE {
            return PaintOutcome::Ignored;
        }
        self.stroke = Stroke::Active {
            last: hand::index(row, col),
        };
        self.paint(row, col)
    }

    /// Pointer/touch moved onto a cell while a stroke is active. Repeated
    /// events for the cell painted last are ignored.
    pub fn continue_stroke(&mut self, row: usize, col: usize) -> PaintOutcome {
        let Stroke::Active { last } = self.stroke else {
            return PaintOutcome::Ignored;
        };
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return PaintOutcome::Ignored;
        }
        let index = hand::index(row, col);
        if index == last {
            return PaintOutcome::Ignored;
        }
        self.stroke = Stroke::Active { last: index };
        self.paint(row, col)
    }

    pub fn end_stroke(&mut self) {
        self.stroke = Stroke::Idle;
    }

    /// Comparison status of a cell; None outside comparison mode
    pub fn cell_status(&self, index: usize) -> Option<CellStatus> {
        let reference = self.comparison.as_ref()?;
        Some(cell_status(self.grid.get(index)?, reference.get(index)?))
    }
}

/// Client-space bounding box of the rendered grid and the gap between
/// its cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub gap: f64,
}

/// Cell index along one axis. A point inside a gap goes to the nearer
/// neighbour, so the boundary sits at the middle of the gap.
fn axis_cell(offset: f64, extent: f64, gap: f64) -> Option<usize> {
    if offset < 0.0 || offset >= extent {
        return None;
    }
    let gaps = gap * (GRID_SIZE - 1) as f64;
    let cell = (extent - gaps) / GRID_SIZE as f64;
    if cell <= 0.0 {
        return None;
    }
    let index = ((offset + gap / 2.0) / (cell + gap)) as usize;
    Some(index.min(GRID_SIZE - 1))
}

/// Map a client point (e.g. a touch-move position) to the cell under it
pub fn cell_at(rect: &GridRect, x: f64, y: f64) -> Option<(usize, usize)> {
    let gap = rect.gap.max(0.0);
    let col = axis_cell(x - rect.left, rect.width, gap)?;
    let row = axis_cell(y - rect.top, rect.height, gap)?;
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ActionId, Color};

    fn brush(id: u32, color: &str) -> Option<Paint> {
        Some(Paint::new(Color::new(color), ActionId(id)))
    }

    fn engine() -> PaintEngine {
        let mut engine = PaintEngine::new();
        engine.set_brush(brush(1, "#ff4444"));
        engine
    }

    #[test]
    fn test_paint_twice_clears() {
        let mut engine = engine();
        assert_eq!(engine.paint(0, 1), PaintOutcome::Painted);
        assert_eq!(engine.paint(0, 1), PaintOutcome::Cleared);
        assert!(engine.grid().get(1).unwrap().paint().is_none());
    }

    #[test]
    fn test_paint_overwrites_other_action() {
        let mut engine = engine();
        engine.paint(2, 2);
        engine.set_brush(brush(2, "#44ff44"));
        assert_eq!(engine.paint(2, 2), PaintOutcome::Painted);
        let cell = engine.grid().at(2, 2).unwrap();
        assert_eq!(cell.action_id(), Some(ActionId(2)));
        assert_eq!(cell.color().unwrap().as_str(), "#44ff44");
    }

    #[test]
    fn test_same_action_other_color_overwrites() {
        let mut engine = engine();
        engine.paint(0, 0);
        engine.set_brush(brush(1, "#000000"));
        assert_eq!(engine.paint(0, 0), PaintOutcome::Painted);
    }

    #[test]
    fn test_no_brush_is_noop() {
        let mut engine = PaintEngine::new();
        assert_eq!(engine.paint(0, 0), PaintOutcome::Ignored);
        assert_eq!(engine.grid().painted_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut engine = engine();
        assert_eq!(engine.paint(13, 0), PaintOutcome::Ignored);
        assert_eq!(engine.begin_stroke(0, 13), PaintOutcome::Ignored);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_drag_paints_contiguous_cells() {
        let mut engine = engine();
        engine.begin_stroke(0, 0);
        engine.continue_stroke(0, 1);
        engine.continue_stroke(0, 2);
        engine.end_stroke();
        engine.continue_stroke(0, 3);
        assert_eq!(engine.grid().painted_count(), 3);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_repeated_move_events_on_one_cell_paint_once() {
        let mut engine = engine();
        engine.begin_stroke(0, 0);
        for _ in 0..5 {
            engine.continue_stroke(0, 1);
        }
        assert!(engine.grid().at(0, 1).unwrap().is_painted());
        // leaving and re-entering toggles again
        engine.continue_stroke(0, 2);
        engine.continue_stroke(0, 1);
        assert!(!engine.grid().at(0, 1).unwrap().is_painted());
    }

    #[test]
    fn test_continue_without_begin_is_ignored() {
        let mut engine = engine();
        assert_eq!(engine.continue_stroke(4, 4), PaintOutcome::Ignored);
    }

    #[test]
    fn test_comparison_locks_painting() {
        let mut engine = engine();
        engine.paint(0, 0);
        engine.set_comparison(Some(Grid::new()));
        assert_eq!(engine.begin_stroke(1, 1), PaintOutcome::Ignored);
        assert_eq!(engine.paint(1, 1), PaintOutcome::Ignored);
        assert!(!engine.is_dragging());
        assert_eq!(engine.grid().painted_count(), 1);
    }

    #[test]
    fn test_cell_status_only_in_comparison_mode() {
        let mut engine = engine();
        engine.paint(0, 0);
        assert_eq!(engine.cell_status(0), None);

        let mut reference = Grid::new();
        reference.set_paint(0, brush(1, "#ff4444"));
        reference.set_paint(1, brush(1, "#ff4444"));
        engine.set_comparison(Some(reference));
        assert_eq!(engine.cell_status(0), Some(CellStatus::Correct));
        assert_eq!(engine.cell_status(1), Some(CellStatus::Incorrect));
        assert_eq!(engine.cell_status(2), Some(CellStatus::Neutral));
    }

    #[test]
    fn test_cell_at_maps_points() {
        let rect = GridRect { left: 10.0, top: 20.0, width: 130.0, height: 130.0, gap: 0.0 };
        assert_eq!(cell_at(&rect, 10.0, 20.0), Some((0, 0)));
        assert_eq!(cell_at(&rect, 25.0, 20.0), Some((0, 1)));
        assert_eq!(cell_at(&rect, 139.9, 149.9), Some((12, 12)));
        assert_eq!(cell_at(&rect, 9.0, 30.0), None);
        assert_eq!(cell_at(&rect, 140.0, 30.0), None);
    }

    #[test]
    fn test_cell_at_accounts_for_gap() {
        // 13 cells of 20px with 2px gaps: cell k starts at 22k
        let rect = GridRect { left: 0.0, top: 0.0, width: 284.0, height: 284.0, gap: 2.0 };
        // gap before the last cell is 262..264; an even split calls 262.5 column 12
        assert_eq!(cell_at(&rect, 262.5, 0.0), Some((0, 11)));
        assert_eq!(cell_at(&rect, 264.5, 0.0), Some((0, 12)));
        assert_eq!(cell_at(&rect, 283.9, 283.9), Some((12, 12)));
        // inside the gap after column 5 (130..132), split at its middle
        assert_eq!(cell_at(&rect, 130.5, 0.0), Some((0, 5)));
        assert_eq!(cell_at(&rect, 131.5, 0.0), Some((0, 6)));
        assert_eq!(cell_at(&rect, 0.0, 132.0), Some((6, 0)));
    }
}
