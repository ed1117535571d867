use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use symtensor_core::{
    layout::combinatorics, Asym01Asym23, Asym3, Asym4, GroupKind, Slot, Sym01Asym23, Sym3,
    Sym4, Symmetry, Tensor,
};

const D: usize = 5;

fn random<S: Symmetry>(seed: u64) -> Tensor<S, f64, D> {
    let mut rng = StdRng::seed_from_u64(seed);
    Tensor::rand_uniform(&mut rng, -1.0, 1.0).unwrap()
}

fn transposed<const R: usize>(mut index: [usize; R], a: usize, b: usize) -> [usize; R] {
    index.swap(a, b);
    index
}

fn index3() -> impl Strategy<Value = [usize; 3]> {
    [0..D, 0..D, 0..D]
}

fn index4() -> impl Strategy<Value = [usize; 4]> {
    [0..D, 0..D, 0..D, 0..D]
}

proptest! {
    #[test]
    fn symmetric_reads_ignore_permutation(seed in any::<u64>(), index in index4(), a in 0..4usize, b in 0..4usize) {
        let t = random::<Sym4>(seed);
        prop_assert_eq!(t.at(index), t.at(transposed(index, a, b)));
    }

    #[test]
    fn antisymmetric_transposition_negates(seed in any::<u64>(), index in index4(), a in 0..4usize, b in 0..4usize) {
        prop_assume!(a != b);
        let t = random::<Asym4>(seed);
        prop_assert_eq!(t.at(transposed(index, a, b)), -t.at(index));
    }

    #[test]
    fn antisymmetric_repeats_vanish(seed in any::<u64>(), index in index3(), a in 0..3usize, b in 0..3usize) {
        prop_assume!(a != b);
        let t = random::<Asym3>(seed);
        let mut index = index;
        index[b] = index[a];
        prop_assert_eq!(t.at(index), 0.0);
        let mut t = t;
        let before = t.data().to_vec();
        prop_assert!(t.at_mut(index).is_err());
        prop_assert_eq!(t.data(), before.as_slice());
    }

    #[test]
    fn mixed_groups_follow_their_own_rules(seed in any::<u64>(), index in index4()) {
        let t = random::<Sym01Asym23>(seed);
        prop_assert_eq!(t.at(index), t.at(transposed(index, 0, 1)));
        prop_assert_eq!(t.at(index), -t.at(transposed(index, 2, 3)));

        let u = random::<Asym01Asym23>(seed);
        prop_assert_eq!(u.at(index), u.at(transposed(transposed(index, 0, 1), 2, 3)));
    }

    #[test]
    fn set_then_read(index in index3(), value in -100i64..100) {
        let mut t = Tensor::<Asym3, i64, D>::zeros().unwrap();
        match t.set(index, value) {
            Ok(()) => prop_assert_eq!(t.at(index), value),
            Err(_) => prop_assert_eq!(t.at(index), 0),
        }
    }

    #[test]
    fn encoder_round_trips(arity in 1..5usize, dim in 1..9usize, pick in any::<prop::sample::Index>()) {
        for kind in [GroupKind::Symmetric, GroupKind::Antisymmetric] {
            let size = combinatorics::group_size(kind, arity, dim).unwrap();
            if size == 0 {
                continue;
            }
            let offset = pick.index(size);
            let mut tuple = vec![0; arity];
            combinatorics::decode(kind, offset, &mut tuple);
            prop_assert!(tuple.iter().all(|&c| c < dim));
            prop_assert_eq!(combinatorics::encode(kind, &tuple), offset);
        }
    }

    #[test]
    fn bound_expression_reads_like_at(seed in any::<u64>(), index in index3(), split in 0..=3usize) {
        let t = random::<Sym3>(seed);
        let tags = ['i', 'j', 'k'];
        let mut slots = [Slot::Bound(0); 3];
        for (p, slot) in slots.iter_mut().enumerate() {
            *slot = if p < split { Slot::Bound(index[p]) } else { Slot::free(tags[p]) };
        }
        let rest: Vec<Slot> = index[split..].iter().map(|&i| Slot::Bound(i)).collect();
        let expr = t.bind(slots).bind(&rest).unwrap();
        prop_assert_eq!(expr.get(), Some(t.at(index)));
    }
}

#[test]
fn every_canonical_index_reads_its_own_slot() {
    let t = random::<Asym01Asym23>(7);
    for (offset, index) in t.canonical_indices().enumerate() {
        assert_eq!(t.at(index), t.data()[offset]);
    }
}
