/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! FiniteSet: an immutable collection of distinct values.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use itertools::iproduct;
use serde::Deserialize;
use serde::Serialize;

use crate::error::AlgebraError;

/// Bound satisfied by every type that can be stored in a carrier.
///
/// Values are ordered so that sets compare and iterate
/// deterministically, and `Send + Sync + 'static` so that operations
/// closing over sets of them can be shared freely.
pub trait Value: Clone + Ord + Hash + Debug + Send + Sync + 'static {}

impl<T> Value for T where T: Clone + Ord + Hash + Debug + Send + Sync + 'static {}

/// A finite set of distinct values.
///
/// Equality is set equality; iteration follows the ordering of `T`,
/// which makes every traversal of the same set visit members in the
/// same order.
///
/// # Example
/// ```
/// use algebra::FiniteSet;
///
/// let a = FiniteSet::from([0, 1]);
/// let b = FiniteSet::from(['x', 'y', 'z']);
/// let ab = a.product(&b);
/// assert_eq!(ab.len(), 6);
/// assert!(ab.contains(&(1, 'y')));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Ord"))]
pub struct FiniteSet<T>(BTreeSet<T>);

impl<T: Ord> FiniteSet<T> {
    /// The empty set.
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Membership test.
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Whether every member of `self` is also a member of `other`.
    pub fn is_subset(&self, other: &FiniteSet<T>) -> bool {
        self.0.is_subset(&other.0)
    }

    /// An arbitrary member (the least one).
    pub fn pick(&self) -> Result<&T, AlgebraError> {
        self.0.first().ok_or(AlgebraError::EmptyCollection)
    }

    /// The Cartesian product `self × other`: every ordered pair `(x, y)`
    /// with `x` from `self` and `y` from `other`.
    pub fn product<U>(&self, other: &FiniteSet<U>) -> FiniteSet<(T, U)>
    where
        T: Clone,
        U: Ord + Clone,
    {
        iproduct!(self.iter(), other.iter())
            .map(|(x, y)| (x.clone(), y.clone()))
            .collect()
    }
}

impl<T: Ord> Default for FiniteSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for FiniteSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Ord> IntoIterator for FiniteSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a FiniteSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for FiniteSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord> From<BTreeSet<T>> for FiniteSet<T> {
    fn from(values: BTreeSet<T>) -> Self {
        Self(values)
    }
}

impl<T: Ord + Debug> fmt::Display for FiniteSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", value)?;
        }
        write!(f, "}}")
    }
}
