/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Element: a carrier value viewed through its group.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use crate::error::AlgebraError;
use crate::error::show;
use crate::finite_set::Value;
use crate::group::Group;

/// A member of a [`Group`], borrowed alongside the group it belongs to.
///
/// Elements are cheap views: the group owns the carrier, the element
/// only remembers which group to multiply in. Equality, ordering and
/// hashing look at the wrapped value alone, so elements of different
/// groups with equal values compare equal.
///
/// Only elements of the *same* group instance can be multiplied;
/// anything else is rejected with [`AlgebraError::ForeignElement`].
/// Direct products are built with [`Group::product`] and multiplied
/// through the product group's own elements.
pub struct Element<'g, T> {
    value: T,
    group: &'g Group<T>,
}

impl<'g, T: Value> Element<'g, T> {
    /// Wrap `value` as an element of `group`.
    ///
    /// Fails with [`AlgebraError::NotInGroup`] if `value` is not in the
    /// group's carrier.
    pub fn new(value: T, group: &'g Group<T>) -> Result<Self, AlgebraError> {
        if !group.contains(&value) {
            return Err(AlgebraError::NotInGroup {
                value: show(&value),
            });
        }
        Ok(Self::attach(value, group))
    }

    // `value` must be a member of `group`.
    pub(crate) fn attach(value: T, group: &'g Group<T>) -> Self {
        Self { value, group }
    }

    /// The wrapped value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwrap the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// The owning group.
    pub fn group(&self) -> &'g Group<T> {
        self.group
    }

    /// `self · other` in the owning group.
    pub fn multiply(&self, other: &Element<'_, T>) -> Result<Element<'g, T>, AlgebraError> {
        if !std::ptr::eq(self.group, other.group) {
            return Err(AlgebraError::ForeignElement {
                left: show(&self.value),
                right: show(&other.value),
            });
        }
        Ok(Self::attach(
            self.group.mul(&self.value, &other.value),
            self.group,
        ))
    }

    /// `self + other`: multiplication written additively, which is only
    /// allowed in abelian groups.
    pub fn add(&self, other: &Element<'_, T>) -> Result<Element<'g, T>, AlgebraError> {
        if !self.group.is_abelian() {
            return Err(AlgebraError::NotAbelian {
                left: show(&self.value),
                right: show(&other.value),
            });
        }
        self.multiply(other)
    }

    /// The inverse of this element in its group.
    pub fn inverse(&self) -> Result<Element<'g, T>, AlgebraError> {
        self.group.inverse(&self.value)
    }
}

impl<T: Clone> Clone for Element<'_, T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            group: self.group,
        }
    }
}

impl<'h, T: PartialEq> PartialEq<Element<'h, T>> for Element<'_, T> {
    fn eq(&self, other: &Element<'h, T>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Element<'_, T> {}

impl<T: Ord> PartialOrd for Element<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Element<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash> Hash for Element<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Element<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.value).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Element<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
