//! Mapping between full multi-indices and compact storage offsets.
//!
//! Each group of a [`Partition`] is canonicalized and encoded on its own; the
//! per-group offsets are then composed mixed-radix, first group most
//! significant, and the per-group signs multiplied.

use smallvec::SmallVec;

use crate::{bail, GroupKind, IndexGroup, Partition, Result};

pub mod canonical;
pub mod combinatorics;

pub use canonical::{canonicalize, Sign};

/// Storage position of a non-vanishing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address {
    pub offset: usize,
    /// Never [`Sign::Zero`].
    pub sign: Sign,
}

#[derive(Debug, Clone)]
struct GroupLayout {
    group: IndexGroup,
    size: usize,
}

/// A validated partition together with a fixed dimension.
#[derive(Debug, Clone)]
pub struct Layout {
    rank: usize,
    dim: usize,
    groups: Vec<GroupLayout>,
    storage_size: usize,
}

impl Layout {
    pub fn new(partition: Partition, dim: usize) -> Result<Self> {
        if dim == 0 {
            bail!("dimension must be positive");
        }
        let rank = partition.rank();
        let mut storage_size: usize = 1;
        let mut groups = Vec::with_capacity(partition.groups().len());
        for group in partition.groups() {
            let Some(size) = combinatorics::group_size(group.kind(), group.arity(), dim) else {
                bail!(
                    "{} group of arity {} over dimension {} does not fit in usize",
                    group.kind(),
                    group.arity(),
                    dim
                )
            };
            let Some(total) = storage_size.checked_mul(size) else {
                bail!(
                    "storage size of rank-{} tensor over dimension {} overflows",
                    rank,
                    dim
                )
            };
            storage_size = total;
            groups.push(GroupLayout {
                group: group.clone(),
                size,
            });
        }
        tracing::debug!(rank, dim, storage_size, "built tensor layout");
        Ok(Self {
            rank,
            dim,
            groups,
            storage_size,
        })
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored elements, the product of all group sizes.
    pub fn storage_size(&self) -> usize {
        self.storage_size
    }

    pub fn groups(&self) -> impl Iterator<Item = &IndexGroup> {
        self.groups.iter().map(|g| &g.group)
    }

    /// Independent entries of each group, in partition order.
    pub fn group_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.groups.iter().map(|g| g.size)
    }

    /// Resolve a full multi-index. `None` means the entry is structurally zero.
    pub fn locate(&self, index: &[usize]) -> Option<Address> {
        debug_assert_eq!(index.len(), self.rank, "index {index:?} has wrong rank");
        debug_assert!(
            index.iter().all(|&i| i < self.dim),
            "index {index:?} out of range for dimension {}",
            self.dim
        );
        let mut offset = 0;
        let mut sign = Sign::Plus;
        let mut scratch: SmallVec<[usize; 4]> = SmallVec::new();
        for GroupLayout { group, size } in &self.groups {
            scratch.clear();
            scratch.extend(group.positions().iter().map(|&p| index[p]));
            sign = sign * canonicalize(group.kind(), &mut scratch);
            if sign.is_zero() {
                return None;
            }
            offset = offset * size + combinatorics::encode(group.kind(), &scratch);
        }
        Some(Address { offset, sign })
    }

    pub fn sign(&self, index: &[usize]) -> Sign {
        self.locate(index).map_or(Sign::Zero, |a| a.sign)
    }

    /// The first antisymmetric group holding a repeated index, if any.
    pub fn degenerate_group(&self, index: &[usize]) -> Option<usize> {
        let mut scratch: SmallVec<[usize; 4]> = SmallVec::new();
        self.groups.iter().position(|GroupLayout { group, .. }| {
            if group.kind() != GroupKind::Antisymmetric {
                return false;
            }
            scratch.clear();
            scratch.extend(group.positions().iter().map(|&p| index[p]));
            canonicalize(group.kind(), &mut scratch).is_zero()
        })
    }

    /// The canonical multi-index stored at `offset`, the one that reads with a
    /// positive sign. `None` if the offset is past the end of storage.
    pub fn canonical_index(&self, offset: usize) -> Option<SmallVec<[usize; 4]>> {
        if offset >= self.storage_size {
            return None;
        }
        let mut index: SmallVec<[usize; 4]> = SmallVec::from_elem(0, self.rank);
        let mut scratch: SmallVec<[usize; 4]> = SmallVec::new();
        let mut rest = offset;
        for GroupLayout { group, size } in self.groups.iter().rev() {
            let local = rest % size;
            rest /= size;
            scratch.clear();
            scratch.resize(group.arity(), 0);
            combinatorics::decode(group.kind(), local, &mut scratch);
            for (&p, &v) in group.positions().iter().zip(scratch.iter()) {
                index[p] = v;
            }
        }
        Some(index)
    }

    /// Canonical multi-indices of every stored element, in storage order.
    pub fn canonical_indices(&self) -> CanonicalIndices<'_> {
        CanonicalIndices {
            layout: self,
            cursor: 0,
        }
    }
}

/// Iterator returned by [`Layout::canonical_indices`].
pub struct CanonicalIndices<'a> {
    layout: &'a Layout,
    cursor: usize,
}

impl Iterator for CanonicalIndices<'_> {
    type Item = SmallVec<[usize; 4]>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.layout.canonical_index(self.cursor)?;
        self.cursor += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.layout.storage_size.saturating_sub(self.cursor);
        (left, Some(left))
    }
}

impl ExactSizeIterator for CanonicalIndices<'_> {}
