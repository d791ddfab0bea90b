//! Cells and Grids
//!
//! A grid is exactly 169 cells in hand-matrix order. A cell is either
//! unpainted or carries both a color and an action id; the pair lives in a
//! single `Option<Paint>` so one can never be set without the other.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::action::{ActionId, Color};
use super::entity::{DomainError, DomainResult};
use super::hand::{self, HandLabel, CELL_COUNT};

/// Color + action assigned to a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Paint {
    pub color: Color,
    pub action_id: ActionId,
}

impl Paint {
    pub fn new(color: Color, action_id: ActionId) -> Self {
        Self { color, action_id }
    }
}

/// One positional slot of a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    hand: HandLabel,
    paint: Option<Paint>,
}

impl Cell {
    pub fn hand(&self) -> &HandLabel {
        &self.hand
    }

    pub fn paint(&self) -> Option<&Paint> {
        self.paint.as_ref()
    }

    pub fn color(&self) -> Option<&Color> {
        self.paint.as_ref().map(|p| &p.color)
    }

    pub fn action_id(&self) -> Option<ActionId> {
        self.paint.as_ref().map(|p| p.action_id)
    }

    pub fn is_painted(&self) -> bool {
        self.paint.is_some()
    }

    /// Same color and same action (two unpainted cells match)
    pub fn same_paint(&self, other: &Cell) -> bool {
        self.paint == other.paint
    }
}

/// The 169-cell assignment of a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Fresh grid: every label, nothing painted
    pub fn new() -> Self {
        let cells = (0..CELL_COUNT)
            .map(|i| {
                let (row, col) = hand::position(i);
                Cell {
                    hand: HandLabel::at(row, col),
                    paint: None,
                }
            })
            .collect();
        Self { cells }
    }

    /// Build from positional paints. An empty list yields a fresh grid;
    /// any length other than 0 or 169 is rejected.
    pub fn from_paints(paints: Vec<Option<Paint>>) -> DomainResult<Self> {
        if paints.is_empty() {
            return Ok(Self::new());
        }
        if paints.len() != CELL_COUNT {
            return Err(DomainError::InvalidInput(format!(
                "grid must have {} cells, got {}",
                CELL_COUNT,
                paints.len()
            )));
        }
        let mut grid = Self::new();
        for (cell, paint) in grid.cells.iter_mut().zip(paints) {
            cell.paint = paint;
        }
        Ok(grid)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= hand::GRID_SIZE || col >= hand::GRID_SIZE {
            return None;
        }
        self.cells.get(hand::index(row, col))
    }

    pub(crate) fn set_paint(&mut self, index: usize, paint: Option<Paint>) {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.paint = paint;
        }
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_painted()).count()
    }

    pub fn count_action(&self, action_id: ActionId) -> usize {
        self.cells
            .iter()
            .filter(|c| c.action_id() == Some(action_id))
            .count()
    }

    /// Clear every cell painted with `action_id`; returns how many were cleared
    pub fn clear_action(&mut self, action_id: ActionId) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if cell.action_id() == Some(action_id) {
                cell.paint = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// Give every cell of `action_id` the new color; returns how many changed
    pub fn recolor_action(&mut self, action_id: ActionId, color: &Color) -> usize {
        let mut changed = 0;
        for paint in self.cells.iter_mut().filter_map(|c| c.paint.as_mut()) {
            if paint.action_id == action_id {
                paint.color = color.clone();
                changed += 1;
            }
        }
        changed
    }

    /// Clear cells whose action is not in `known`; returns how many were cleared
    pub fn retain_actions(&mut self, known: &HashSet<ActionId>) -> usize {
        let mut cleared = 0;
        for cell in &mut self.cells {
            if let Some(id) = cell.action_id() {
                if !known.contains(&id) {
                    cell.paint = None;
                    cleared += 1;
                }
            }
        }
        cleared
    }

    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            cell.paint = None;
        }
    }
}
