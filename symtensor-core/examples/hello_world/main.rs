use symtensor_core::{Asym2, Sym2, Tensor};

fn main() {
    let mut omega = Tensor::<Asym2, f64, 3>::zeros().unwrap();
    omega.set([0, 1], 1.0).unwrap();
    omega.set([2, 1], 2.0).unwrap();
    dbg!(omega.data());
    assert_eq!(omega.at([1, 2]), -2.0);
    assert_eq!(omega.at([1, 1]), 0.0);
    dbg!(omega.to_dense());

    let metric = Tensor::<Sym2, f64, 4>::from_fn(|[i, j]| if i == j { 1.0 } else { 0.0 }).unwrap();
    dbg!(metric.storage_size());
    assert_eq!(metric.at([3, 3]), 1.0);
    assert_eq!(metric.at([0, 3]), metric.at([3, 0]));
}
