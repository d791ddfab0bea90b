//! Library Integration Tests
//!
//! Runs the library service against the in-memory gateway.

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, CatalogChange, DragItem, DropTarget, TreeNode};
    use crate::domain::{
        DomainError, FolderId, MoveRejection, RangeDraft, RangeId,
    };
    use crate::engine::{RangeEditor, SaveRequest};
    use crate::gateway::{MemoryGateway, PersistenceGateway};
    use crate::library::Library;

    async fn folder(
        library: &Library<'_, MemoryGateway>,
        catalog: &mut Catalog,
        name: &str,
        parent: Option<FolderId>,
    ) -> FolderId {
        let change = library
            .create_folder(catalog, name, parent)
            .await
            .expect("Failed to create folder");
        let CatalogChange::FolderCreated(folder) = &change else {
            panic!("unexpected change {:?}", change);
        };
        let id = folder.id;
        catalog.apply(change);
        id
    }

    fn draft(name: &str, folder: Option<FolderId>) -> RangeDraft {
        let mut editor = RangeEditor::new();
        editor.set_name(name);
        editor.paint(0, 0);
        let SaveRequest::Create(mut draft) = editor.save_request(None).unwrap() else {
            panic!("expected create");
        };
        draft.folder_id = folder;
        draft
    }

    async fn range(
        library: &Library<'_, MemoryGateway>,
        catalog: &mut Catalog,
        name: &str,
        folder: Option<FolderId>,
    ) -> RangeId {
        let change = library
            .save_range(SaveRequest::Create(draft(name, folder)))
            .await
            .expect("Failed to save range");
        let CatalogChange::RangeSaved(range) = &change else {
            panic!("unexpected change {:?}", change);
        };
        let id = range.id;
        catalog.apply(change);
        id
    }

    /// A -> B -> C
    async fn chain(library: &Library<'_, MemoryGateway>, catalog: &mut Catalog) -> [FolderId; 3] {
        let a = folder(library, catalog, "A", None).await;
        let b = folder(library, catalog, "B", Some(a)).await;
        let c = folder(library, catalog, "C", Some(b)).await;
        [a, b, c]
    }

    #[tokio::test]
    async fn test_create_folder_trims_name() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();

        let id = folder(&library, &mut catalog, "  Preflop ", None).await;
        assert_eq!(catalog.folder(id).unwrap().name, "Preflop");
        assert_eq!(gateway.list_folders().await.unwrap()[0].name, "Preflop");
    }

    #[tokio::test]
    async fn test_blank_folder_name_makes_no_call() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let err = library.create_folder(&Catalog::new(), "   ", None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_move_folder_into_descendant_rejected() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let [a, _, c] = chain(&library, &mut catalog).await;

        let before = catalog.clone();
        let calls = gateway.calls();
        let err = library.move_folder(&catalog, a, Some(c)).await.unwrap_err();

        assert_eq!(err, DomainError::Rejected(MoveRejection::Cycle));
        assert!(err.is_silent());
        assert_eq!(gateway.calls(), calls);
        assert_eq!(catalog, before);
    }

    #[tokio::test]
    async fn test_move_folder_to_root() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let [_, _, c] = chain(&library, &mut catalog).await;

        let change = library.move_folder(&catalog, c, None).await.unwrap();
        catalog.apply(change);
        assert_eq!(catalog.folder(c).unwrap().parent_id, None);

        let stored = gateway.list_folders().await.unwrap();
        assert_eq!(stored.iter().find(|f| f.id == c).unwrap().parent_id, None);
    }

    #[tokio::test]
    async fn test_drop_on_self_or_current_folder_is_noop() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let [a, b, _] = chain(&library, &mut catalog).await;
        let r = range(&library, &mut catalog, "UTG", Some(a)).await;

        let before = catalog.clone();
        let calls = gateway.calls();

        let cases = [
            (DragItem::Folder(b), DropTarget::Folder(b)),
            (DragItem::Range(r), DropTarget::Range(r)),
            (DragItem::Range(r), DropTarget::Folder(a)),
            (DragItem::Folder(b), DropTarget::Folder(a)),
        ];
        for (item, target) in cases {
            let err = library.drop_item(&catalog, item, target).await.unwrap_err();
            assert!(err.is_silent(), "{:?} -> {:?}: {}", item, target, err);
        }
        assert_eq!(gateway.calls(), calls);
        assert_eq!(catalog, before);
    }

    #[tokio::test]
    async fn test_drop_range_on_range_moves_into_its_folder() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let [_, b, _] = chain(&library, &mut catalog).await;
        let inside = range(&library, &mut catalog, "in B", Some(b)).await;
        let loose = range(&library, &mut catalog, "loose", None).await;

        let change = library
            .drop_item(&catalog, DragItem::Range(loose), DropTarget::Range(inside))
            .await
            .unwrap();
        catalog.apply(change);
        assert_eq!(catalog.range(loose).unwrap().folder_id, Some(b));

        let change = library
            .drop_item(&catalog, DragItem::Range(loose), DropTarget::Root)
            .await
            .unwrap();
        catalog.apply(change);
        assert_eq!(catalog.range(loose).unwrap().folder_id, None);
    }

    #[tokio::test]
    async fn test_remote_failure_leaves_catalog_unchanged() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let [a, b, c] = chain(&library, &mut catalog).await;
        let r = range(&library, &mut catalog, "UTG", Some(c)).await;

        gateway.set_failing(true);
        let before = catalog.clone();

        let results = [
            library.move_folder(&catalog, c, Some(a)).await,
            library.move_range(&catalog, r, Some(b)).await,
            library.create_folder(&catalog, "D", None).await,
            library.duplicate_range(&catalog, r).await,
            library.delete_range(&catalog, r).await,
        ];
        for result in results {
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Remote(_)));
            assert!(!err.is_silent());
        }
        assert_eq!(catalog, before);
    }

    #[tokio::test]
    async fn test_save_update_and_duplicate() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let a = folder(&library, &mut catalog, "A", None).await;
        let id = range(&library, &mut catalog, "CO", Some(a)).await;

        let mut editor = RangeEditor::open(catalog.range(id).unwrap()).unwrap();
        editor.set_name("CO open");
        editor.paint(0, 1);
        let request = editor.save_request(None).unwrap();
        let change = library.save_range(request).await.unwrap();
        catalog.apply(change);

        let saved = catalog.range(id).unwrap();
        assert_eq!(saved.name, "CO open");
        assert_eq!(saved.folder_id, Some(a));
        assert_eq!(saved.grid.painted_count(), 2);

        let change = library.duplicate_range(&catalog, id).await.unwrap();
        catalog.apply(change);
        let copy = catalog.ranges().last().unwrap();
        assert_ne!(copy.id, id);
        assert_eq!(copy.name, "CO open (Copy)");
        assert_eq!(copy.folder_id, Some(a));
        assert_eq!(copy.grid, catalog.range(id).unwrap().grid);
    }

    #[tokio::test]
    async fn test_invalid_save_makes_no_call() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let editor = RangeEditor::new();
        assert!(editor.save_request(None).is_err());

        let mut empty = draft("x", None);
        empty.grid.clear_all();
        let err = library.save_range(SaveRequest::Create(empty)).await.unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("Please paint at least one cell".into()));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn test_only_empty_folders_are_deleted() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let [a, b, c] = chain(&library, &mut catalog).await;

        assert!(matches!(
            library.delete_folder(&catalog, b).await,
            Err(DomainError::InvalidInput(_))
        ));
        let change = library.delete_folder(&catalog, c).await.unwrap();
        catalog.apply(change);
        assert!(catalog.folder(c).is_none());
        assert!(catalog.is_empty_folder(b));
        assert!(catalog.folder(a).is_some());
    }

    #[tokio::test]
    async fn test_load_round_trip_renders_tree() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut scratch = Catalog::new();
        let [a, _, _] = chain(&library, &mut scratch).await;
        range(&library, &mut scratch, "root range", None).await;

        let mut catalog = Catalog::new();
        catalog.apply(library.load().await.unwrap());
        assert_eq!(catalog.folder_count(), 3);
        assert_eq!(catalog.range_count(), 1);

        let rows = catalog.flatten();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].node, TreeNode::Folder(a));
        assert!(rows[0].has_children);
    }

    #[tokio::test]
    async fn test_snapshot_restores_with_fresh_ids() {
        let gateway = MemoryGateway::new();
        let library = Library::new(&gateway);
        let mut catalog = Catalog::new();
        let a = folder(&library, &mut catalog, "A", None).await;

        let restored = MemoryGateway::from_snapshot(gateway.snapshot());
        let library = Library::new(&restored);
        let mut catalog = Catalog::new();
        catalog.apply(library.load().await.unwrap());
        let b = folder(&library, &mut catalog, "B", None).await;
        assert_ne!(a, b);
        assert_eq!(catalog.folder_count(), 2);
    }
}
