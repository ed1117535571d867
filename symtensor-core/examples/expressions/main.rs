use symtensor_core::{axis, Asym03Asym12, Slot, Tensor};

fn main() {
    let r = Tensor::<Asym03Asym12, f64, 4>::from_fn(|[a, b, c, d]| (a + 2 * b + 3 * c + 4 * d) as f64)
        .unwrap();

    // R(0, b, c, 3) with b and c still open.
    let slice = r.bind([Slot::Bound(0), Slot::free('b'), Slot::free('c'), Slot::Bound(3)]);
    println!("free axes: {:?}", slice.free_axes().collect::<Vec<_>>());

    for b in 0..4 {
        for c in 0..4 {
            let value = slice
                .clone()
                .bind_axis(axis('b'), b)
                .and_then(|e| e.bind_axis(axis('c'), c))
                .and_then(|e| e.value())
                .unwrap();
            assert_eq!(value, r.at([0, b, c, 3]));
            print!("{value:6.1}");
        }
        println!();
    }
}
