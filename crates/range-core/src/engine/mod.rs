//! Engines
//!
//! Stateful, synchronous building blocks of the editor and trainer:
//! painting, the action palette and scoring.

mod paint;
mod palette;
mod scoring;
mod editor;
mod trainer;

pub use paint::{cell_at, GridRect, PaintEngine, PaintOutcome};
pub use palette::ActionPalette;
pub use scoring::{cell_status, compare, score, CellStatus, Grade, ScoreReport};
pub use editor::{EditorSession, RangeEditor, SaveRequest};
pub use trainer::TrainerSession;
