//! Comparison and Scoring
//!
//! Positional diff of a user grid against a reference grid. A cell matches
//! when color and action id are both equal; two unpainted cells match.

use serde::{Deserialize, Serialize};

use crate::domain::{Cell, Grid, CELL_COUNT};

/// Per-cell comparison result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    Correct,
    Incorrect,
    /// Both sides unpainted
    Neutral,
}

/// Accuracy band used to colour the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Strong,
    Fair,
    Weak,
}

/// Outcome of checking a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub matches: usize,
    pub total: usize,
    /// Rounded percentage, 0..=100
    pub percent: u8,
}

impl ScoreReport {
    pub fn grade(&self) -> Grade {
        match self.percent {
            90.. => Grade::Strong,
            70..=89 => Grade::Fair,
            _ => Grade::Weak,
        }
    }
}

pub fn cell_status(user: &Cell, reference: &Cell) -> CellStatus {
    if !user.is_painted() && !reference.is_painted() {
        CellStatus::Neutral
    } else if user.same_paint(reference) {
        CellStatus::Correct
    } else {
        CellStatus::Incorrect
    }
}

/// Full comparison report
pub fn compare(user: &Grid, reference: &Grid) -> ScoreReport {
    let matches = user
        .cells()
        .iter()
        .zip(reference.cells())
        .filter(|(u, r)| u.same_paint(r))
        .count();
    let percent = (matches as f64 / CELL_COUNT as f64 * 100.0).round() as u8;
    ScoreReport {
        matches,
        total: CELL_COUNT,
        percent,
    }
}

/// Accuracy percentage of `user` against `reference`
pub fn score(user: &Grid, reference: &Grid) -> u8 {
    compare(user, reference).percent
}
