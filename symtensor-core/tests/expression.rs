use symtensor_core::{axis, Asym2, Asym3, Dense2, Error, Scalar, Slot, Sym01, Tensor};

#[test]
fn prefix_then_suffix() {
    let t = Tensor::<Sym01, i64, 3>::from_fn(|[i, j, k]| (100 * i + 10 * j + k) as i64).unwrap();
    let partial = t.bind([Slot::Bound(2), Slot::free('j'), Slot::free('k')]);
    assert!(!partial.is_resolved());
    assert_eq!(partial.free_axes().collect::<Vec<_>>(), vec![axis('j'), axis('k')]);
    assert_eq!(
        partial.free_positions().collect::<Vec<_>>(),
        vec![(1, axis('j')), (2, axis('k'))]
    );
    assert_eq!(partial.get(), None);

    let full = partial.bind(&[Slot::Bound(0), Slot::Bound(1)]).unwrap();
    assert!(full.is_resolved());
    assert_eq!(full.index(), Some([2, 0, 1]));
    assert_eq!(full.get(), Some(t.at([2, 0, 1])));
    assert_eq!(full.get(), Some(21));
}

#[test]
fn free_axes_can_be_filled_by_tag_in_any_order() {
    let t = Tensor::<Dense2, f32, 3>::from_fn(|[i, j]| (3 * i + j) as f32).unwrap();
    let e = t.bind([Slot::free('r'), Slot::free('c')]);
    let e = e.bind_axis(axis('c'), 2).unwrap();
    assert_eq!(e.free_axes().collect::<Vec<_>>(), vec![axis('r')]);
    let e = e.bind_axis(axis('r'), 1).unwrap();
    assert_eq!(e.value().unwrap(), 5.0);
}

#[test]
fn rebinding_to_a_new_tag_keeps_the_slot_open() {
    let t = Tensor::<Asym3, f64, 4>::ones().unwrap();
    let e = t
        .bind([Slot::free('a'), Slot::Bound(1), Slot::free('b')])
        .bind(&[Slot::free('x'), Slot::Bound(3)])
        .unwrap();
    assert_eq!(e.free_axes().collect::<Vec<_>>(), vec![axis('x')]);
    assert!(matches!(e.clone().bind_axis(axis('a'), 0), Err(Error::UnknownAxis(_))));
    assert_eq!(e.bind_axis(axis('x'), 0).unwrap().get(), Some(1.0));
}

#[test]
fn unresolved_reads_report_free_axes() {
    let t = Tensor::<Asym2, f64, 3>::zeros().unwrap();
    let e = t.bind([Slot::Bound(0), Slot::free('j')]);
    match e.value() {
        Err(Error::UnboundAxes(axes)) => assert_eq!(axes, vec![axis('j')]),
        other => panic!("expected unbound axes, got {other:?}"),
    }
    assert!(matches!(
        e.bind(&[]),
        Err(Error::ArityMismatch { expected: 1, got: 0 })
    ));
}

#[test]
fn degenerate_is_detected_only_on_resolution() {
    let mut t = Tensor::<Asym2, f64, 3>::zeros().unwrap();
    let e = t.bind_mut([Slot::Bound(1), Slot::free('j')]);
    let mut e = e.bind(&[Slot::Bound(1)]).unwrap();
    assert_eq!(e.get(), Some(0.0));
    assert!(matches!(e.get_mut(), Err(Error::DegenerateWrite { .. })));
    assert!(e.set(2.0).is_err());
    assert!(t.data().iter().all(|&v| v == 0.0));
}

#[test]
fn mutable_expression_writes_through() {
    let mut t = Tensor::<Asym2, f64, 3>::zeros().unwrap();
    {
        let mut e = t
            .bind_mut([Slot::free('i'), Slot::Bound(0)])
            .bind_axis(axis('i'), 2)
            .unwrap();
        assert!(matches!(e.get_mut(), Ok(_)));
        e.set(4.0).unwrap();
        let shared = e.into_shared();
        assert_eq!(shared.get(), Some(4.0));
    }
    assert_eq!(t.at([2, 0]), 4.0);
    assert_eq!(t.at([0, 2]), -4.0);

    let mut e = t.bind_mut([Slot::free('i'), Slot::free('j')]);
    assert!(matches!(e.get_mut(), Err(Error::UnboundAxes(_))));
}

#[test]
fn scalar_binds_nothing() {
    let t = Tensor::<Scalar, i32, 4>::full(9).unwrap();
    assert_eq!(t.storage_size(), 1);
    let e = t.bind([]);
    assert!(e.is_resolved());
    assert_eq!(e.get(), Some(9));
    assert_eq!(t.at([]), 9);
}
