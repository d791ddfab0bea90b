//! Folder/Range Catalog
//!
//! In-memory tree of the library, drag-and-drop resolution and the changes
//! that keep it in step with the store.

mod tree;
mod drag;
mod change;

pub use tree::{Catalog, TreeNode, TreeRow};
pub use drag::{DragItem, DragPhase, DragSession, DropTarget, MoveIntent};
pub use change::CatalogChange;
