//! Partition descriptors: which index slots of a tensor share a symmetry.
//!
//! A [`Partition`] splits the `rank` slots of a tensor into ordered
//! [`IndexGroup`]s. Types implementing [`Symmetry`] carry a partition at the
//! type level, the same way a shape marker carries its extents, and are
//! usually declared with the [`symmetry!`](crate::symmetry!) macro.

use std::fmt;

use smallvec::SmallVec;

use crate::{Error, Result, Slot};

/// How the indices of one group relate to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    /// A single free index.
    Unconstrained,
    /// Invariant under any permutation of the group's indices.
    Symmetric,
    /// Negates under any transposition, vanishes on repeated indices.
    Antisymmetric,
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unconstrained => f.write_str("unconstrained"),
            Self::Symmetric => f.write_str("symmetric"),
            Self::Antisymmetric => f.write_str("antisymmetric"),
        }
    }
}

/// A set of tensor slots sharing one symmetry constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexGroup {
    kind: GroupKind,
    positions: SmallVec<[usize; 4]>,
}

impl IndexGroup {
    pub fn new(kind: GroupKind, positions: &[usize]) -> Self {
        Self {
            kind,
            positions: SmallVec::from_slice(positions),
        }
    }

    pub fn unconstrained(position: usize) -> Self {
        Self::new(GroupKind::Unconstrained, &[position])
    }

    pub fn symmetric(positions: &[usize]) -> Self {
        Self::new(GroupKind::Symmetric, positions)
    }

    pub fn antisymmetric(positions: &[usize]) -> Self {
        Self::new(GroupKind::Antisymmetric, positions)
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// Tensor slots belonging to this group, in declaration order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn arity(&self) -> usize {
        self.positions.len()
    }
}

/// An ordered list of index groups covering every slot of a tensor exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    rank: usize,
    groups: Vec<IndexGroup>,
}

impl Partition {
    /// Validate and build a partition for a tensor of the given rank.
    pub fn new(rank: usize, groups: Vec<IndexGroup>) -> Result<Self> {
        let mut seen = vec![false; rank];
        for (g, group) in groups.iter().enumerate() {
            if group.arity() == 0 {
                return Err(Error::InvalidPartition(format!("group {g} is empty")));
            }
            if group.kind == GroupKind::Unconstrained && group.arity() != 1 {
                return Err(Error::InvalidPartition(format!(
                    "unconstrained group {g} has arity {}, expected 1",
                    group.arity()
                )));
            }
            for &p in group.positions() {
                if p >= rank {
                    return Err(Error::InvalidPartition(format!(
                        "group {g} names slot {p} of a rank-{rank} tensor"
                    )));
                }
                if std::mem::replace(&mut seen[p], true) {
                    return Err(Error::InvalidPartition(format!(
                        "slot {p} belongs to more than one group"
                    )));
                }
            }
        }
        if let Some(p) = seen.iter().position(|covered| !covered) {
            return Err(Error::InvalidPartition(format!(
                "slot {p} is not covered by any group"
            )));
        }
        Ok(Self { rank, groups })
    }

    /// Every slot is its own unconstrained group.
    pub fn dense(rank: usize) -> Self {
        Self {
            rank,
            groups: (0..rank).map(IndexGroup::unconstrained).collect(),
        }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn groups(&self) -> &[IndexGroup] {
        &self.groups
    }
}

/// Type-level partition of a tensor's index slots.
pub trait Symmetry {
    const RANK: usize;
    /// A full multi-index, `[usize; RANK]`.
    type Index: Copy + fmt::Debug + AsRef<[usize]> + AsMut<[usize]> + Default;
    /// Positional binder arguments, `[Slot; RANK]`.
    type Slots: AsRef<[Slot]>;

    fn partition() -> Result<Partition>;
}

/// Declare a [`Symmetry`] marker type.
///
/// ```
/// use symtensor_core::{symmetry, Symmetry};
///
/// symmetry!(
///     /// Antisymmetric in the first pair, free in the last slot.
///     pub Wedge2Vec, 3, [Antisymmetric(0, 1), Unconstrained(2)]
/// );
///
/// assert_eq!(Wedge2Vec::partition().unwrap().groups().len(), 2);
/// ```
#[macro_export]
macro_rules! symmetry {
    ($(#[$meta:meta])* $vis:vis $name:ident, $rank:literal, [$($kind:ident($($pos:literal),+)),* $(,)?]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $crate::Symmetry for $name {
            const RANK: usize = $rank;
            type Index = [usize; $rank];
            type Slots = [$crate::Slot; $rank];

            fn partition() -> $crate::Result<$crate::Partition> {
                $crate::Partition::new(
                    $rank,
                    vec![$($crate::IndexGroup::new($crate::GroupKind::$kind, &[$($pos),+])),*],
                )
            }
        }
    };
}

symmetry!(
    /// A rank-0 tensor holding one value.
    pub Scalar, 0, []
);
symmetry!(pub Dense1, 1, [Unconstrained(0)]);

symmetry!(pub Dense2, 2, [Unconstrained(0), Unconstrained(1)]);
symmetry!(
    /// `T(i, j) = T(j, i)`
    pub Sym2, 2, [Symmetric(0, 1)]
);
symmetry!(
    /// `T(i, j) = -T(j, i)`
    pub Asym2, 2, [Antisymmetric(0, 1)]
);

symmetry!(pub Dense3, 3, [Unconstrained(0), Unconstrained(1), Unconstrained(2)]);
symmetry!(pub Sym3, 3, [Symmetric(0, 1, 2)]);
symmetry!(pub Asym3, 3, [Antisymmetric(0, 1, 2)]);
symmetry!(pub Sym01, 3, [Symmetric(0, 1), Unconstrained(2)]);
symmetry!(pub Asym01, 3, [Antisymmetric(0, 1), Unconstrained(2)]);
symmetry!(pub Sym12, 3, [Unconstrained(0), Symmetric(1, 2)]);
symmetry!(pub Asym12, 3, [Unconstrained(0), Antisymmetric(1, 2)]);

symmetry!(
    pub Dense4, 4,
    [Unconstrained(0), Unconstrained(1), Unconstrained(2), Unconstrained(3)]
);
symmetry!(pub Sym4, 4, [Symmetric(0, 1, 2, 3)]);
symmetry!(pub Asym4, 4, [Antisymmetric(0, 1, 2, 3)]);
symmetry!(pub Sym01Sym23, 4, [Symmetric(0, 1), Symmetric(2, 3)]);
symmetry!(pub Asym01Asym23, 4, [Antisymmetric(0, 1), Antisymmetric(2, 3)]);
symmetry!(
    /// Antisymmetric in the outer pair and in the inner pair.
    pub Asym03Asym12, 4, [Antisymmetric(0, 3), Antisymmetric(1, 2)]
);
symmetry!(pub Sym01Asym23, 4, [Symmetric(0, 1), Antisymmetric(2, 3)]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_uncovered_slot() {
        let err = Partition::new(3, vec![IndexGroup::symmetric(&[0, 1])]).unwrap_err();
        assert!(matches!(err, Error::InvalidPartition(_)));
    }

    #[test]
    fn rejects_overlapping_groups() {
        let groups = vec![
            IndexGroup::antisymmetric(&[0, 1]),
            IndexGroup::unconstrained(1),
        ];
        assert!(Partition::new(2, groups).is_err());
    }

    #[test]
    fn rejects_wide_unconstrained_group() {
        let groups = vec![IndexGroup::new(GroupKind::Unconstrained, &[0, 1])];
        assert!(Partition::new(2, groups).is_err());
    }

    #[test]
    fn rejects_out_of_range_slot() {
        assert!(Partition::new(1, vec![IndexGroup::unconstrained(1)]).is_err());
    }

    #[test]
    fn markers_are_valid() {
        assert_eq!(Scalar::partition().unwrap().groups().len(), 0);
        assert_eq!(Asym03Asym12::partition().unwrap().rank(), 4);
        assert_eq!(Dense4::partition().unwrap(), Partition::dense(4));
    }
}
