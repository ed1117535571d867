//! Group sizes and the combinatorial number system.
//!
//! A canonical antisymmetric tuple `c0 < c1 < … < c(k-1)` is encoded as
//! `Σ C(c_j, j + 1)`, which enumerates the k-subsets of `0..D` densely in
//! colexicographic order. Symmetric tuples `c0 ≤ c1 ≤ … ≤ c(k-1)` use the
//! multiset variant `Σ C(c_j + j, j + 1)`. Both encodings are independent of
//! `D`, which only bounds the range: `[0, C(D, k))` resp. `[0, C(D + k - 1, k))`.

use crate::GroupKind;

/// `C(n, k)`, or `None` on overflow.
///
/// Built from the running product `n·(n-1)·…/k!`; factors that would go
/// negative are floored at zero, so `C(n, k) = 0` for `k > n`.
pub fn checked_binomial(n: usize, k: usize) -> Option<usize> {
    let mut acc: usize = 1;
    for i in 0..k {
        // C(n, i + 1) = C(n, i) · (n - i) / (i + 1) is always integral.
        acc = acc.checked_mul(n.saturating_sub(i))? / (i + 1);
    }
    Some(acc)
}

/// Number of k-multisets drawn from `n` values, `C(n + k - 1, k)`.
pub fn checked_multichoose(n: usize, k: usize) -> Option<usize> {
    let mut acc: usize = 1;
    for i in 0..k {
        acc = acc.checked_mul(n + i)? / (i + 1);
    }
    Some(acc)
}

pub(crate) fn binomial(n: usize, k: usize) -> usize {
    let mut acc: usize = 1;
    for i in 0..k {
        acc = acc * n.saturating_sub(i) / (i + 1);
    }
    acc
}

pub(crate) fn multichoose(n: usize, k: usize) -> usize {
    let mut acc: usize = 1;
    for i in 0..k {
        acc = acc * (n + i) / (i + 1);
    }
    acc
}

/// Number of independent entries of a group of the given kind and arity over `dim` values.
pub fn group_size(kind: GroupKind, arity: usize, dim: usize) -> Option<usize> {
    match kind {
        GroupKind::Unconstrained => {
            debug_assert_eq!(arity, 1);
            Some(dim)
        }
        GroupKind::Antisymmetric => checked_binomial(dim, arity),
        GroupKind::Symmetric => checked_multichoose(dim, arity),
    }
}

/// Dense offset of a canonical (ascending) tuple.
pub fn encode(kind: GroupKind, canonical: &[usize]) -> usize {
    match kind {
        GroupKind::Unconstrained => canonical[0],
        GroupKind::Antisymmetric => canonical
            .iter()
            .enumerate()
            .map(|(j, &c)| binomial(c, j + 1))
            .sum(),
        GroupKind::Symmetric => canonical
            .iter()
            .enumerate()
            .map(|(j, &c)| multichoose(c, j + 1))
            .sum(),
    }
}

/// Inverse of [`encode`]: writes the canonical tuple for `offset` into `out`,
/// whose length is the group arity.
///
/// `offset` must lie inside the group's range, the result is otherwise
/// the tuple of some larger dimension.
pub fn decode(kind: GroupKind, mut offset: usize, out: &mut [usize]) {
    let term = |c: usize, m: usize| match kind {
        GroupKind::Unconstrained | GroupKind::Antisymmetric => binomial(c, m),
        GroupKind::Symmetric => multichoose(c, m),
    };
    // Greedy from the most significant entry: the largest c with term(c, m) <= offset.
    for j in (0..out.len()).rev() {
        let m = j + 1;
        let mut c = match kind {
            GroupKind::Antisymmetric => j,
            _ => 0,
        };
        while term(c + 1, m) <= offset {
            c += 1;
        }
        offset -= term(c, m);
        out[j] = c;
    }
}
