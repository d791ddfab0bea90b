//! Range Trainer Core
//!
//! Platform-independent model of the range trainer: the 13x13 hand matrix,
//! painting, action palettes, scoring, the folder/range catalog with
//! drag-and-drop reparenting, and the persistence gateway it talks through.

pub mod domain;
pub mod engine;
pub mod catalog;
pub mod gateway;
pub mod library;
pub mod shell;

pub use catalog::{Catalog, CatalogChange, DragItem, DragSession, DropTarget, TreeNode, TreeRow};
pub use domain::{DomainError, DomainResult};
pub use gateway::{MemoryGateway, PersistenceGateway};
pub use library::Library;
pub use shell::{Shell, Tab};
