//! Symtensor stores fixed-extent tensors with index symmetries compactly.
//!
//! A tensor's index slots are split into groups, each either unconstrained,
//! symmetric (invariant under permuting its indices) or antisymmetric (negated
//! by every transposition, zero when two indices coincide). Only one element
//! per orbit is stored, so a rank-2 antisymmetric tensor over `0..D` holds
//! `D·(D-1)/2` values and a rank-3 symmetric one `D·(D+1)·(D+2)/6`.
//!
//! The dimension `D` and the partition are fixed at the type level, the same
//! way a const-generic shape is: `Tensor<Asym2, f64, 3>` is a 3×3
//! antisymmetric matrix.
//!
//! ## A quick guide
//! - Pick a [`Symmetry`] marker such as [`Sym2`] or [`Asym03Asym12`], or declare
//!   your own with [`symmetry!`].
//! - Build a [`Tensor`] with [`Tensor::zeros`], [`Tensor::from_fn`] or friends.
//! - Read with [`Tensor::at`], write with [`Tensor::at_mut`] or [`Tensor::set`].
//! - Partially apply the accessor with [`Tensor::bind`] to get a
//!   [`TensorExpression`] that remembers which slots are still free.
//!
//! ## What can you do with it?
//! ```
//! use symtensor_core::{Asym2, Error, Tensor};
//!
//! let mut t = Tensor::<Asym2, f64, 3>::zeros().unwrap();
//! assert_eq!(t.storage_size(), 3);
//!
//! *t.at_mut([0, 1]).unwrap() = 5.0;
//! assert_eq!(t.at([0, 1]), 5.0);
//! assert_eq!(t.at([1, 0]), -5.0);
//! assert_eq!(t.at([0, 0]), 0.0);
//!
//! let err = t.at_mut([2, 2]).unwrap_err();
//! assert!(matches!(err, Error::DegenerateWrite { .. }));
//! ```
//!
//! Index expressions leave slots open under a tag and fill them later:
//! ```
//! use symtensor_core::{axis, Slot, Sym3, Tensor};
//!
//! let t = Tensor::<Sym3, i64, 4>::from_fn(|[i, j, k]| (100 * i + 10 * j + k) as i64).unwrap();
//! let row = t.bind([Slot::Bound(1), Slot::free('j'), Slot::free('k')]);
//! let value = row.bind_axis(axis('k'), 0).unwrap().bind(&[Slot::Bound(3)]).unwrap();
//! assert_eq!(value.get(), Some(t.at([0, 1, 3])));
//! ```

mod dtype;
mod error;
pub mod layout;
mod symmetry;
mod tensor;

pub use dtype::DType;
pub use error::{Error, Result};
pub use layout::{Address, Layout, Sign};
pub use symmetry::{
    Asym01, Asym01Asym23, Asym03Asym12, Asym12, Asym2, Asym3, Asym4, Dense1, Dense2, Dense3,
    Dense4, GroupKind, IndexGroup, Partition, Scalar, Sym01, Sym01Asym23, Sym01Sym23, Sym12,
    Sym2, Sym3, Sym4, Symmetry,
};
pub use tensor::{axis, FreeAxis, Slot, Tensor, TensorExpression, TensorExpressionMut};
