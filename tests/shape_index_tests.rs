use chart_drawings::core::{AnchorPoint, IDLE_SHAPE, PointStore, ShapeIndex};

fn store_with(points: usize) -> (PointStore, Vec<chart_drawings::core::PointId>) {
    let mut store = PointStore::default();
    let ids = (0..points)
        .map(|i| store.append(AnchorPoint::new(i as f64 * 100.0, i as f64)))
        .collect();
    (store, ids)
}

#[test]
fn registration_tags_point_with_its_slot() {
    let (mut store, ids) = store_with(1);
    let mut shapes = ShapeIndex::default();

    shapes.register(3, "start", ids[0], &mut store);

    assert_eq!(shapes.shape_containing(ids[0], &store), 3);
    let membership = store.get(ids[0]).and_then(|p| p.membership.clone());
    assert_eq!(membership.map(|m| m.corner), Some("start".to_owned()));
}

#[test]
fn untagged_point_resolves_to_idle_shape() {
    let (store, ids) = store_with(1);
    let shapes = ShapeIndex::default();

    assert_eq!(shapes.shape_containing(ids[0], &store), IDLE_SHAPE);
}

#[test]
fn corner_re_registration_overwrites_and_untags_displaced_point() {
    let (mut store, ids) = store_with(2);
    let mut shapes = ShapeIndex::default();

    shapes.register(1, "end", ids[0], &mut store);
    shapes.register(1, "end", ids[1], &mut store);

    assert_eq!(shapes.corner_id(1, "end"), Some(ids[1]));
    assert_eq!(shapes.shape_containing(ids[1], &store), 1);
    // The displaced point lost its membership and falls back to idle.
    assert_eq!(shapes.shape_containing(ids[0], &store), IDLE_SHAPE);
    assert_eq!(shapes.slot(1).map(|slot| slot.len()), Some(1));
}

#[test]
fn erase_removes_exactly_the_target_shape() {
    let (mut store, ids) = store_with(4);
    let mut shapes = ShapeIndex::default();

    shapes.register(1, "start", ids[0], &mut store);
    shapes.register(1, "end", ids[1], &mut store);
    shapes.register(2, "start", ids[2], &mut store);
    shapes.register(2, "end", ids[3], &mut store);

    let before = store.get(ids[2]).cloned();
    let removed = shapes.erase(1, &mut store);

    assert_eq!(removed.len(), 2);
    assert!(!store.contains(ids[0]));
    assert!(!store.contains(ids[1]));
    // Shape 2 anchors are byte-for-byte unchanged.
    assert_eq!(store.get(ids[2]).cloned(), before);
    assert!(store.contains(ids[3]));
    assert_eq!(shapes.slot(2).map(|slot| slot.len()), Some(2));
}

#[test]
fn erasing_an_empty_slot_is_a_noop() {
    let (mut store, ids) = store_with(1);
    let mut shapes = ShapeIndex::default();
    shapes.register(1, "start", ids[0], &mut store);

    let len_before = store.len();
    assert!(shapes.erase(5, &mut store).is_empty());
    assert!(shapes.erase(0, &mut store).is_empty());
    assert_eq!(store.len(), len_before);

    // Erasing twice leaves everything unchanged the second time.
    assert_eq!(shapes.erase(1, &mut store).len(), 1);
    assert!(shapes.erase(1, &mut store).is_empty());
}

#[test]
fn allocation_never_reuses_erased_slots() {
    let (mut store, ids) = store_with(1);
    let mut shapes = ShapeIndex::default();

    let first = shapes.allocate();
    assert_eq!(first, 1);
    shapes.register(first, "start", ids[0], &mut store);
    shapes.erase(first, &mut store);

    let second = shapes.allocate();
    assert_eq!(second, 2);
    assert_eq!(shapes.occupied_count(), 0);
    assert_eq!(shapes.slot_count(), 3);
}

#[test]
fn time_ordered_points_sort_by_anchor_time() {
    let mut store = PointStore::default();
    let late = store.append(AnchorPoint::new(900.0, 1.0));
    let early = store.append(AnchorPoint::new(100.0, 2.0));
    let mid = store.append(AnchorPoint::new(500.0, 3.0));

    let mut shapes = ShapeIndex::default();
    shapes.register(1, "a", late, &mut store);
    shapes.register(1, "b", early, &mut store);
    shapes.register(1, "c", mid, &mut store);

    let ordered = shapes.time_ordered_points(1, &store);
    assert_eq!(ordered.to_vec(), vec![early, mid, late]);
}
