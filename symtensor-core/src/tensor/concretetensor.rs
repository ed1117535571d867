use std::{fmt, marker::PhantomData};

use rand::Rng;

use crate::{
    layout::{Layout, Sign},
    DType, Error, Result, Symmetry, TensorExpression, TensorExpressionMut,
};

/// A tensor of rank `S::RANK` over indices `0..D` that stores one element per
/// orbit of its symmetry group.
///
/// Reads through a non-canonical index apply the permutation sign, reads of a
/// repeated antisymmetric index return zero. Only functions which build
/// storage or write through an index return `Result`s.
#[derive(Clone)]
pub struct Tensor<S: Symmetry, T: DType, const D: usize> {
    layout: Layout,
    data: Vec<T>,
    _ghost: PhantomData<S>,
}

impl<S: Symmetry, T: DType, const D: usize> Tensor<S, T, D> {
    /// Build the layout for this tensor type.
    pub fn layout_for() -> Result<Layout> {
        Layout::new(S::partition()?, D)
    }

    /// Create a tensor filled with some value.
    pub fn full(v: T) -> Result<Self> {
        let layout = Self::layout_for()?;
        let data = vec![v; layout.storage_size()];
        Ok(Self::from_parts(layout, data))
    }

    /// Create a tensor filled with zeros.
    pub fn zeros() -> Result<Self> {
        Self::full(T::ZERO)
    }

    /// Create a tensor whose every stored element is one.
    pub fn ones() -> Result<Self> {
        Self::full(T::ONE)
    }

    /// Wrap existing storage, ordered as [`Tensor::canonical_indices`].
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        let layout = Self::layout_for()?;
        if data.len() != layout.storage_size() {
            return Err(Error::StorageSize {
                expected: layout.storage_size(),
                got: data.len(),
            });
        }
        Ok(Self::from_parts(layout, data))
    }

    /// Fill storage by calling `f` once per canonical index, in storage order.
    pub fn from_fn(mut f: impl FnMut(S::Index) -> T) -> Result<Self> {
        let layout = Self::layout_for()?;
        let data = layout
            .canonical_indices()
            .map(|canonical| f(Self::to_index(&canonical)))
            .collect();
        Ok(Self::from_parts(layout, data))
    }

    /// Stored elements drawn uniformly from `[low, high)`.
    pub fn rand_uniform<R: Rng + ?Sized>(rng: &mut R, low: T, high: T) -> Result<Self> {
        let mut tensor = Self::zeros()?;
        T::fill_with_uniform(rng, &mut tensor.data, low, high)?;
        Ok(tensor)
    }

    /// Stored elements drawn from a normal distribution.
    pub fn rand_normal<R: Rng + ?Sized>(rng: &mut R, mean: T, std: T) -> Result<Self> {
        let mut tensor = Self::zeros()?;
        T::fill_with_normal(rng, &mut tensor.data, mean, std)?;
        Ok(tensor)
    }

    fn from_parts(layout: Layout, data: Vec<T>) -> Self {
        Self {
            layout,
            data,
            _ghost: PhantomData,
        }
    }

    fn to_index(slice: &[usize]) -> S::Index {
        let mut index = S::Index::default();
        index.as_mut().copy_from_slice(slice);
        index
    }

    pub fn rank(&self) -> usize {
        S::RANK
    }

    pub fn dim(&self) -> usize {
        D
    }

    /// Number of stored elements.
    pub fn storage_size(&self) -> usize {
        self.data.len()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Stored elements, one per canonical index.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Sign relating `index` to its canonical representative.
    pub fn sign(&self, index: S::Index) -> Sign {
        self.layout.sign(index.as_ref())
    }

    /// Canonical indices of the stored elements, in storage order.
    pub fn canonical_indices(&self) -> impl ExactSizeIterator<Item = S::Index> + '_ {
        self.layout
            .canonical_indices()
            .map(|canonical| Self::to_index(&canonical))
    }

    /// Read the element at `index`.
    ///
    /// A repeated index inside an antisymmetric group reads as zero, an odd
    /// permutation of the canonical index reads as the negated stored value.
    pub fn at(&self, index: S::Index) -> T {
        match self.layout.locate(index.as_ref()) {
            Some(address) => address.sign.apply(self.data[address.offset]),
            None => T::ZERO,
        }
    }

    /// Mutable access to the storage slot backing `index`.
    ///
    /// The slot is the canonical representative and the sign of `index` is
    /// not applied: writing `v` through an odd permutation makes that
    /// permutation read back as `-v`. Use [`Tensor::set`] for sign-aware
    /// writes. Fails with [`Error::DegenerateWrite`] when `index` repeats a
    /// value inside an antisymmetric group.
    pub fn at_mut(&mut self, index: S::Index) -> Result<&mut T> {
        let index = index.as_ref();
        match self.layout.locate(index) {
            Some(address) => Ok(&mut self.data[address.offset]),
            None => Err(self.degenerate(index)),
        }
    }

    /// Store `value` so that `self.at(index) == value` afterwards.
    pub fn set(&mut self, index: S::Index, value: T) -> Result<()> {
        let index = index.as_ref();
        match self.layout.locate(index) {
            Some(address) => {
                self.data[address.offset] = address.sign.apply(value);
                Ok(())
            }
            None => Err(self.degenerate(index)),
        }
    }

    fn degenerate(&self, index: &[usize]) -> Error {
        let group = self.layout.degenerate_group(index).unwrap_or_default();
        tracing::trace!(?index, group, "rejected write to a structurally zero entry");
        Error::DegenerateWrite {
            index: index.to_vec(),
            group,
        }
    }

    /// Expand into the full row-major `D^rank` array.
    pub fn to_dense(&self) -> Vec<T> {
        let rank = S::RANK;
        let total = D.pow(rank as u32);
        let mut index = S::Index::default();
        let mut out = Vec::with_capacity(total);
        for flat in 0..total {
            let mut rest = flat;
            for slot in index.as_mut().iter_mut().rev() {
                *slot = rest % D;
                rest /= D;
            }
            out.push(self.at(index));
        }
        out
    }

    /// Partially apply the accessor. Each slot is either a concrete index or
    /// a [`FreeAxis`](crate::FreeAxis) left open for a later `bind`.
    pub fn bind(&self, slots: S::Slots) -> TensorExpression<'_, S, T, D> {
        TensorExpression::new(self, slots.as_ref())
    }

    /// Like [`Tensor::bind`], but the expression can write once resolved.
    pub fn bind_mut(&mut self, slots: S::Slots) -> TensorExpressionMut<'_, S, T, D> {
        TensorExpressionMut::new(self, slots.as_ref())
    }
}

impl<S: Symmetry, T: DType, const D: usize> fmt::Debug for Tensor<S, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("rank", &S::RANK)
            .field("dim", &D)
            .field("dtype", &T::NAME)
            .field("data", &self.data)
            .finish()
    }
}

impl<S: Symmetry, T: DType, const D: usize> PartialEq for Tensor<S, T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
