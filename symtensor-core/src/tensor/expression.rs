//! Partially applied accessors.
//!
//! `tensor.bind([Slot::Bound(0), Slot::free('j')])` fixes the first slot and leaves
//! the second open under the tag `j`. The tag only identifies the slot: a
//! later `bind` or `bind_axis` supplies its value, and once no slot is free
//! the expression reads exactly like [`Tensor::at`].

use std::fmt;

use smallvec::SmallVec;

use crate::{DType, Error, Result, Symmetry, Tensor};

/// Symbolic label of an index slot left open during binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FreeAxis(char);

impl FreeAxis {
    pub const fn new(tag: char) -> Self {
        Self(tag)
    }

    pub fn tag(self) -> char {
        self.0
    }
}

/// Shorthand for [`FreeAxis::new`].
pub const fn axis(tag: char) -> FreeAxis {
    FreeAxis::new(tag)
}

impl fmt::Display for FreeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One positional binder argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Bound(usize),
    Free(FreeAxis),
}

impl Slot {
    /// A free slot tagged `tag`.
    pub const fn free(tag: char) -> Self {
        Slot::Free(FreeAxis::new(tag))
    }
}

impl From<usize> for Slot {
    fn from(index: usize) -> Self {
        Slot::Bound(index)
    }
}

impl From<FreeAxis> for Slot {
    fn from(axis: FreeAxis) -> Self {
        Slot::Free(axis)
    }
}

/// Bound values and free slots of an expression, independent of the tensor.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    index: SmallVec<[usize; 4]>,
    /// Open slots in declaration order, with their tags.
    free: SmallVec<[(usize, FreeAxis); 4]>,
}

impl Binding {
    fn new(slots: &[Slot]) -> Self {
        let mut index = SmallVec::from_elem(0, slots.len());
        let mut free = SmallVec::new();
        for (position, slot) in slots.iter().enumerate() {
            match *slot {
                Slot::Bound(value) => index[position] = value,
                Slot::Free(tag) => free.push((position, tag)),
            }
        }
        Self { index, free }
    }

    fn bind(&mut self, slots: &[Slot]) -> Result<()> {
        if slots.len() != self.free.len() {
            return Err(Error::ArityMismatch {
                expected: self.free.len(),
                got: slots.len(),
            });
        }
        let mut still_free = SmallVec::new();
        for (&(position, _), slot) in self.free.iter().zip(slots) {
            match *slot {
                Slot::Bound(value) => self.index[position] = value,
                Slot::Free(tag) => still_free.push((position, tag)),
            }
        }
        self.free = still_free;
        Ok(())
    }

    fn bind_axis(&mut self, tag: FreeAxis, value: usize) -> Result<()> {
        let Some(at) = self.free.iter().position(|&(_, t)| t == tag) else {
            return Err(Error::UnknownAxis(tag));
        };
        let (position, _) = self.free.remove(at);
        self.index[position] = value;
        Ok(())
    }

    fn resolved<I: Default + AsMut<[usize]>>(&self) -> Option<I> {
        if !self.free.is_empty() {
            return None;
        }
        let mut index = I::default();
        index.as_mut().copy_from_slice(&self.index);
        Some(index)
    }

    fn unbound(&self) -> Error {
        Error::UnboundAxes(self.free.iter().map(|&(_, tag)| tag).collect())
    }
}

/// A read-only accessor with some slots possibly still free.
///
/// Borrows its tensor and copies the bound index values.
#[derive(Clone)]
pub struct TensorExpression<'a, S: Symmetry, T: DType, const D: usize> {
    tensor: &'a Tensor<S, T, D>,
    binding: Binding,
}

impl<'a, S: Symmetry, T: DType, const D: usize> TensorExpression<'a, S, T, D> {
    pub(crate) fn new(tensor: &'a Tensor<S, T, D>, slots: &[Slot]) -> Self {
        Self {
            tensor,
            binding: Binding::new(slots),
        }
    }

    /// Supply the free slots, in the order they were left open. A
    /// [`Slot::Free`] argument keeps its slot open under the new tag.
    pub fn bind(mut self, slots: &[Slot]) -> Result<Self> {
        self.binding.bind(slots)?;
        Ok(self)
    }

    /// Fill the slot carrying `tag`.
    pub fn bind_axis(mut self, tag: FreeAxis, value: usize) -> Result<Self> {
        self.binding.bind_axis(tag, value)?;
        Ok(self)
    }

    /// Tags of the open slots, in order.
    pub fn free_axes(&self) -> impl Iterator<Item = FreeAxis> + '_ {
        self.binding.free.iter().map(|&(_, tag)| tag)
    }

    /// Tensor slot left open under each tag.
    pub fn free_positions(&self) -> impl Iterator<Item = (usize, FreeAxis)> + '_ {
        self.binding.free.iter().copied()
    }

    pub fn is_resolved(&self) -> bool {
        self.binding.free.is_empty()
    }

    /// The full index, once every slot is bound.
    pub fn index(&self) -> Option<S::Index> {
        self.binding.resolved()
    }

    /// Read the addressed element, `None` while slots are free.
    pub fn get(&self) -> Option<T> {
        self.index().map(|index| self.tensor.at(index))
    }

    /// Like [`TensorExpression::get`], failing with [`Error::UnboundAxes`].
    pub fn value(&self) -> Result<T> {
        self.get().ok_or_else(|| self.binding.unbound())
    }
}

impl<S: Symmetry, T: DType, const D: usize> fmt::Debug for TensorExpression<'_, S, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorExpression")
            .field("index", &self.binding.index)
            .field("free", &self.binding.free)
            .finish()
    }
}

/// A read-write accessor with some slots possibly still free.
pub struct TensorExpressionMut<'a, S: Symmetry, T: DType, const D: usize> {
    tensor: &'a mut Tensor<S, T, D>,
    binding: Binding,
}

impl<'a, S: Symmetry, T: DType, const D: usize> TensorExpressionMut<'a, S, T, D> {
    pub(crate) fn new(tensor: &'a mut Tensor<S, T, D>, slots: &[Slot]) -> Self {
        Self {
            tensor,
            binding: Binding::new(slots),
        }
    }

    pub fn bind(mut self, slots: &[Slot]) -> Result<Self> {
        self.binding.bind(slots)?;
        Ok(self)
    }

    pub fn bind_axis(mut self, tag: FreeAxis, value: usize) -> Result<Self> {
        self.binding.bind_axis(tag, value)?;
        Ok(self)
    }

    pub fn free_axes(&self) -> impl Iterator<Item = FreeAxis> + '_ {
        self.binding.free.iter().map(|&(_, tag)| tag)
    }

    pub fn is_resolved(&self) -> bool {
        self.binding.free.is_empty()
    }

    pub fn index(&self) -> Option<S::Index> {
        self.binding.resolved()
    }

    pub fn get(&self) -> Option<T> {
        self.index().map(|index| self.tensor.at(index))
    }

    /// The storage slot behind the resolved index, see [`Tensor::at_mut`].
    pub fn get_mut(&mut self) -> Result<&mut T> {
        let index = self.index().ok_or_else(|| self.binding.unbound())?;
        self.tensor.at_mut(index)
    }

    /// Sign-aware write through the resolved index, see [`Tensor::set`].
    pub fn set(&mut self, value: T) -> Result<()> {
        let index = self.index().ok_or_else(|| self.binding.unbound())?;
        self.tensor.set(index, value)
    }

    /// Give up the write access and keep reading.
    pub fn into_shared(self) -> TensorExpression<'a, S, T, D> {
        TensorExpression {
            tensor: self.tensor,
            binding: self.binding,
        }
    }
}

impl<S: Symmetry, T: DType, const D: usize> fmt::Debug for TensorExpressionMut<'_, S, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TensorExpressionMut")
            .field("index", &self.binding.index)
            .field("free", &self.binding.free)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_tracks_free_slots_in_order() {
        let mut b = Binding::new(&[Slot::free('i'), Slot::Bound(2), Slot::free('k')]);
        assert_eq!(b.free.as_slice(), &[(0, axis('i')), (2, axis('k'))]);

        b.bind(&[Slot::free('m'), Slot::Bound(1)]).unwrap();
        assert_eq!(b.free.as_slice(), &[(0, axis('m'))]);
        assert_eq!(b.index.as_slice(), &[0, 2, 1]);

        assert!(b.resolved::<[usize; 3]>().is_none());
        b.bind_axis(axis('m'), 3).unwrap();
        assert_eq!(b.resolved::<[usize; 3]>(), Some([3, 2, 1]));
    }

    #[test]
    fn wrong_argument_count() {
        let mut b = Binding::new(&[axis('i').into(), axis('j').into()]);
        let err = b.bind(&[Slot::Bound(0)]).unwrap_err();
        assert!(matches!(err, Error::ArityMismatch { expected: 2, got: 1 }));
        assert!(matches!(
            b.bind_axis(axis('q'), 0),
            Err(Error::UnknownAxis(tag)) if tag == axis('q')
        ));
    }
}
