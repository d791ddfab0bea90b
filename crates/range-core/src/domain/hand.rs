//! Hand Matrix
//!
//! The canonical 13x13 starting-hand grid. Saved grids are positional
//! (index = row * 13 + col), so this layout must never change.

use serde::{Deserialize, Serialize};

/// Rank order, highest first
pub const RANKS: [char; 13] = ['A', 'K', 'Q', 'J', 'T', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Rows and columns in the matrix
pub const GRID_SIZE: usize = 13;

/// Total number of cells
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Shape of a starting hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandKind {
    Pair,
    Suited,
    Offsuit,
}

/// A starting-hand label such as "AA", "AKs" or "AKo"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandLabel(String);

impl HandLabel {
    /// Label for the cell at (row, col)
    pub fn at(row: usize, col: usize) -> Self {
        let label = if row == col {
            format!("{}{}", RANKS[row], RANKS[col])
        } else if col > row {
            format!("{}{}s", RANKS[row], RANKS[col])
        } else {
            format!("{}{}o", RANKS[col], RANKS[row])
        };
        Self(label)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> HandKind {
        match self.0.chars().nth(2) {
            Some('s') => HandKind::Suited,
            Some('o') => HandKind::Offsuit,
            _ => HandKind::Pair,
        }
    }
}

impl std::fmt::Display for HandLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate the full label matrix
pub fn generate() -> [[HandLabel; GRID_SIZE]; GRID_SIZE] {
    std::array::from_fn(|row| std::array::from_fn(|col| HandLabel::at(row, col)))
}

/// Flat index of (row, col)
pub fn index(row: usize, col: usize) -> usize {
    row * GRID_SIZE + col
}

/// (row, col) of a flat index
pub fn position(index: usize) -> (usize, usize) {
    (index / GRID_SIZE, index % GRID_SIZE)
}
