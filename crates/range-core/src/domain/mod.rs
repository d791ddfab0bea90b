//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies beyond serde, chrono and uuid.

mod entity;
mod action;
mod cell;
mod folder;
mod range;
pub mod hand;

pub use entity::{Entity, DomainError, DomainResult, MoveRejection};
pub use action::{Action, ActionId, Color, DEFAULT_COLORS, MAX_ACTIONS};
pub use cell::{Cell, Grid, Paint};
pub use folder::{folder_name, Folder, FolderId};
pub use range::{check_actions, Range, RangeDraft, RangeId};
pub use hand::{HandKind, HandLabel, CELL_COUNT, GRID_SIZE, RANKS};
