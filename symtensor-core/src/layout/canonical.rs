use std::{fmt, ops::Mul};

use crate::{DType, GroupKind};

/// Sign picked up while moving a multi-index into canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Plus,
    Minus,
    /// The entry is structurally zero and has no storage.
    Zero,
}

impl Sign {
    pub fn is_zero(self) -> bool {
        self == Self::Zero
    }

    pub fn flip(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
            Self::Zero => Self::Zero,
        }
    }

    /// Apply the sign to a stored value.
    pub fn apply<T: DType>(self, value: T) -> T {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
            Self::Zero => T::ZERO,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Self::Plus => 1,
            Self::Minus => -1,
            Self::Zero => 0,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        match (self, rhs) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (a, b) if a == b => Self::Plus,
            _ => Self::Minus,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.as_i8())
    }
}

/// Sort one group's indices ascending in place and return the permutation sign.
///
/// Every pair `(i, j)` with `i < j` is compared once, in a fixed order, and
/// swapped when out of order. Antisymmetric groups flip the sign on each swap
/// and return [`Sign::Zero`] as soon as two equal indices meet, leaving the
/// tuple partially sorted. Symmetric and unconstrained groups always return
/// [`Sign::Plus`].
pub fn canonicalize(kind: GroupKind, indices: &mut [usize]) -> Sign {
    let antisymmetric = kind == GroupKind::Antisymmetric;
    let mut sign = Sign::Plus;
    let k = indices.len();
    for i in 0..k {
        for j in i + 1..k {
            if antisymmetric && indices[i] == indices[j] {
                return Sign::Zero;
            }
            if indices[i] > indices[j] {
                indices.swap(i, j);
                if antisymmetric {
                    sign = sign.flip();
                }
            }
        }
    }
    sign
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_products() {
        assert_eq!(Sign::Minus * Sign::Minus, Sign::Plus);
        assert_eq!(Sign::Plus * Sign::Minus, Sign::Minus);
        assert_eq!(Sign::Minus * Sign::Zero, Sign::Zero);
        assert_eq!(Sign::Minus.to_string(), "-1");
        assert_eq!(Sign::Zero.to_string(), "+0");
    }

    #[test]
    fn antisymmetric_parity() {
        let mut t = [2, 0, 1];
        assert_eq!(canonicalize(GroupKind::Antisymmetric, &mut t), Sign::Plus);
        assert_eq!(t, [0, 1, 2]);

        let mut t = [1, 0, 2];
        assert_eq!(canonicalize(GroupKind::Antisymmetric, &mut t), Sign::Minus);
        assert_eq!(t, [0, 1, 2]);

        let mut t = [3, 2, 1, 0];
        assert_eq!(canonicalize(GroupKind::Antisymmetric, &mut t), Sign::Plus);
        assert_eq!(t, [0, 1, 2, 3]);
    }

    #[test]
    fn antisymmetric_repeat_vanishes() {
        for mut t in [[1, 1, 0], [0, 2, 0], [2, 0, 0], [3, 1, 3]] {
            assert_eq!(canonicalize(GroupKind::Antisymmetric, &mut t), Sign::Zero);
        }
    }

    #[test]
    fn symmetric_allows_repeats() {
        let mut t = [2, 0, 2];
        assert_eq!(canonicalize(GroupKind::Symmetric, &mut t), Sign::Plus);
        assert_eq!(t, [0, 2, 2]);
    }

    #[test]
    fn single_index_is_trivial() {
        let mut t = [5];
        assert_eq!(canonicalize(GroupKind::Unconstrained, &mut t), Sign::Plus);
        assert_eq!(t, [5]);
    }
}
