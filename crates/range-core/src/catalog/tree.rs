//! Catalog Tree
//!
//! Arena of folders and ranges keyed by id, with insertion order kept per
//! kind and a session-only set of expanded folders.

use std::collections::{HashMap, HashSet};

use crate::domain::{Entity, Folder, FolderId, MoveRejection, Range, RangeId};
use super::drag::{DragItem, DropTarget, MoveIntent};

/// Insert or replace; a new id goes to the end of the creation order
fn upsert<T: Entity>(nodes: &mut HashMap<T::Id, T>, order: &mut Vec<T::Id>, node: T) {
    let id = node.id();
    if !nodes.contains_key(&id) {
        order.push(id);
    }
    nodes.insert(id, node);
}

/// A node of the rendered tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeNode {
    Folder(FolderId),
    Range(RangeId),
}

/// One line of the flattened tree, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub node: TreeNode,
    pub name: String,
    pub depth: usize,
    /// Folders only
    pub expanded: bool,
    /// Folders only: has any child folder or range
    pub has_children: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    folders: HashMap<FolderId, Folder>,
    ranges: HashMap<RangeId, Range>,
    folder_order: Vec<FolderId>,
    range_order: Vec<RangeId>,
    expanded: HashSet<FolderId>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from store lists (already in creation order)
    pub fn from_parts(folders: Vec<Folder>, ranges: Vec<Range>) -> Self {
        let mut catalog = Self::new();
        catalog.replace_all(folders, ranges);
        catalog
    }

    /// Replace every node, keeping the expanded state of folders that survive
    pub(crate) fn replace_all(&mut self, folders: Vec<Folder>, ranges: Vec<Range>) {
        self.folders.clear();
        self.ranges.clear();
        self.folder_order.clear();
        self.range_order.clear();
        for folder in folders {
            self.upsert_folder(folder);
        }
        for range in ranges {
            self.upsert_range(range);
        }
        let folders = &self.folders;
        self.expanded.retain(|id| folders.contains_key(id));
    }

    pub fn folder(&self, id: FolderId) -> Option<&Folder> {
        self.folders.get(&id)
    }

    pub fn range(&self, id: RangeId) -> Option<&Range> {
        self.ranges.get(&id)
    }

    /// Folders in creation order
    pub fn folders(&self) -> impl Iterator<Item = &Folder> {
        self.folder_order.iter().filter_map(|id| self.folders.get(id))
    }

    /// Ranges in creation order
    pub fn ranges(&self) -> impl Iterator<Item = &Range> {
        self.range_order.iter().filter_map(|id| self.ranges.get(id))
    }

    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.ranges.is_empty()
    }

    /// True when the folder has no child folders and no ranges
    pub fn is_empty_folder(&self, id: FolderId) -> bool {
        !self.folders.values().any(|f| f.parent_id == Some(id))
            && !self.ranges.values().any(|r| r.folder_id == Some(id))
    }

    // ========================
    // Expand / collapse
    // ========================

    pub fn is_expanded(&self, id: FolderId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn toggle_expanded(&mut self, id: FolderId) {
        if !self.expanded.remove(&id) && self.folders.contains_key(&id) {
            self.expanded.insert(id);
        }
    }

    pub fn expand(&mut self, id: FolderId) {
        if self.folders.contains_key(&id) {
            self.expanded.insert(id);
        }
    }

    // ========================
    // Structure checks
    // ========================

    /// Parent as rendered: unknown parents count as root
    fn effective_parent(&self, folder: &Folder) -> Option<FolderId> {
        folder.parent_id.filter(|p| self.folders.contains_key(p))
    }

    /// Whether `candidate` is `ancestor` or lies somewhere below it.
    /// The upward walk is bounded by the folder count, so corrupt (cyclic)
    /// data cannot loop forever.
    pub fn is_within(&self, candidate: FolderId, ancestor: FolderId) -> bool {
        let mut current = Some(candidate);
        for _ in 0..=self.folders.len() {
            match current {
                Some(id) if id == ancestor => return true,
                Some(id) => current = self.folders.get(&id).and_then(|f| f.parent_id),
                None => return false,
            }
        }
        // walk did not reach the root: treat as inside to refuse the move
        true
    }

    /// Validate reparenting `id` under `new_parent`
    pub fn check_folder_move(
        &self,
        id: FolderId,
        new_parent: Option<FolderId>,
    ) -> Result<(), MoveRejection> {
        let folder = self.folders.get(&id).ok_or(MoveRejection::UnknownItem)?;
        if let Some(parent) = new_parent {
            if !self.folders.contains_key(&parent) {
                return Err(MoveRejection::UnknownItem);
            }
            if self.is_within(parent, id) {
                return Err(MoveRejection::Cycle);
            }
        }
        if folder.parent_id == new_parent {
            return Err(MoveRejection::NoChange);
        }
        Ok(())
    }

    /// Validate moving a range into `new_folder`
    pub fn check_range_move(
        &self,
        id: RangeId,
        new_folder: Option<FolderId>,
    ) -> Result<(), MoveRejection> {
        let range = self.ranges.get(&id).ok_or(MoveRejection::UnknownItem)?;
        if let Some(folder) = new_folder {
            if !self.folders.contains_key(&folder) {
                return Err(MoveRejection::UnknownItem);
            }
        }
        if range.folder_id == new_folder {
            return Err(MoveRejection::NoChange);
        }
        Ok(())
    }

    /// Turn a drop into a move. A folder target means that folder, a range
    /// target means the range's folder and the root zone means no folder.
    pub fn resolve_drop(
        &self,
        item: DragItem,
        target: DropTarget,
    ) -> Result<MoveIntent, MoveRejection> {
        match (item, target) {
            (DragItem::Folder(a), DropTarget::Folder(b)) if a == b => {
                return Err(MoveRejection::SelfDrop)
            }
            (DragItem::Range(a), DropTarget::Range(b)) if a == b => {
                return Err(MoveRejection::SelfDrop)
            }
            _ => {}
        }

        let destination = match target {
            DropTarget::Folder(id) => {
                self.folders.get(&id).ok_or(MoveRejection::UnknownItem)?;
                Some(id)
            }
            DropTarget::Range(id) => self
                .ranges
                .get(&id)
                .ok_or(MoveRejection::UnknownItem)?
                .folder_id
                .filter(|f| self.folders.contains_key(f)),
            DropTarget::Root => None,
        };

        match item {
            DragItem::Folder(id) => {
                self.check_folder_move(id, destination)?;
                Ok(MoveIntent::Folder {
                    id,
                    parent: destination,
                })
            }
            DragItem::Range(id) => {
                self.check_range_move(id, destination)?;
                Ok(MoveIntent::Range {
                    id,
                    folder: destination,
                })
            }
        }
    }

    // ========================
    // Rendering
    // ========================

    /// Depth-first display list: at each level folders first, then ranges,
    /// each in creation order. Collapsed folders hide their subtree.
    pub fn flatten(&self) -> Vec<TreeRow> {
        let mut child_folders: HashMap<Option<FolderId>, Vec<&Folder>> = HashMap::new();
        for folder in self.folders() {
            child_folders
                .entry(self.effective_parent(folder))
                .or_default()
                .push(folder);
        }
        let mut child_ranges: HashMap<Option<FolderId>, Vec<&Range>> = HashMap::new();
        for range in self.ranges() {
            let parent = range.folder_id.filter(|f| self.folders.contains_key(f));
            child_ranges.entry(parent).or_default().push(range);
        }

        fn collect(
            catalog: &Catalog,
            parent: Option<FolderId>,
            depth: usize,
            child_folders: &HashMap<Option<FolderId>, Vec<&Folder>>,
            child_ranges: &HashMap<Option<FolderId>, Vec<&Range>>,
            rows: &mut Vec<TreeRow>,
        ) {
            if let Some(folders) = child_folders.get(&parent) {
                for folder in folders {
                    let key = Some(folder.id);
                    let expanded = catalog.is_expanded(folder.id);
                    rows.push(TreeRow {
                        node: TreeNode::Folder(folder.id),
                        name: folder.name.clone(),
                        depth,
                        expanded,
                        has_children: child_folders.contains_key(&key)
                            || child_ranges.contains_key(&key),
                    });
                    if expanded {
                        collect(catalog, key, depth + 1, child_folders, child_ranges, rows);
                    }
                }
            }
            if let Some(ranges) = child_ranges.get(&parent) {
                for range in ranges {
                    rows.push(TreeRow {
                        node: TreeNode::Range(range.id),
                        name: range.name.clone(),
                        depth,
                        expanded: false,
                        has_children: false,
                    });
                }
            }
        }

        let mut rows = Vec::new();
        collect(self, None, 0, &child_folders, &child_ranges, &mut rows);
        rows
    }

    // ========================
    // Mutation (applied from CatalogChange)
    // ========================

    pub(crate) fn upsert_folder(&mut self, folder: Folder) {
        upsert(&mut self.folders, &mut self.folder_order, folder);
    }

    pub(crate) fn upsert_range(&mut self, range: Range) {
        upsert(&mut self.ranges, &mut self.range_order, range);
    }

    pub(crate) fn remove_folder(&mut self, id: FolderId) -> Option<Folder> {
        self.folder_order.retain(|f| *f != id);
        self.expanded.remove(&id);
        self.folders.remove(&id)
    }

    pub(crate) fn remove_range(&mut self, id: RangeId) -> Option<Range> {
        self.range_order.retain(|r| *r != id);
        self.ranges.remove(&id)
    }

    pub(crate) fn set_folder_parent(&mut self, id: FolderId, parent: Option<FolderId>) {
        if let Some(folder) = self.folders.get_mut(&id) {
            folder.parent_id = parent;
        }
    }

    pub(crate) fn set_range_folder(&mut self, id: RangeId, folder: Option<FolderId>) {
        if let Some(range) = self.ranges.get_mut(&id) {
            range.folder_id = folder;
        }
    }
}
