/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Errors raised while building or querying finite structures.

use std::fmt::Debug;

/// Everything that can go wrong when constructing a [`crate::FiniteSet`],
/// [`crate::Operation`], [`crate::Group`] or [`crate::Element`].
///
/// Offending values are carried in their `Debug` rendering so that the
/// error stays independent of the carrier type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgebraError {
    /// An operation maps a domain value outside of its codomain.
    #[error("operation maps {input} to {output}, which is outside its codomain")]
    DomainViolation {
        /// The domain member.
        input: String,
        /// What it was mapped to.
        output: String,
    },

    /// A value was applied to an operation that does not contain it.
    #[error("{value} is not in the operation's domain")]
    NotInDomain {
        /// The rejected value.
        value: String,
    },

    /// A point was not a member of the ambient set it was checked against.
    #[error("{value} is not in the set")]
    NotInSet {
        /// The rejected point.
        value: String,
    },

    /// A value is not part of the group's carrier.
    #[error("{value} is not an element of the group")]
    NotInGroup {
        /// The rejected value.
        value: String,
    },

    /// The operation handed to a group does not have the shape
    /// `carrier × carrier → carrier`.
    #[error("operation shape mismatch: {reason}")]
    ShapeMismatch {
        /// Which side of the operation is wrong.
        reason: String,
    },

    /// `a · (b · c) != (a · b) · c`.
    #[error("operation is not associative: {a} · ({b} · {c}) != ({a} · {b}) · {c}")]
    NotAssociative {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
        /// Third operand.
        c: String,
    },

    /// No two-sided identity was found in the carrier.
    #[error("carrier has no identity element")]
    NoIdentity,

    /// Some carrier member has no right inverse.
    #[error("{value} has no inverse")]
    NoInverse {
        /// The element without an inverse.
        value: String,
    },

    /// Addition requested in a non-commutative group.
    #[error("cannot add {left} and {right}: the group is not abelian")]
    NotAbelian {
        /// Left operand.
        left: String,
        /// Right operand.
        right: String,
    },

    /// `outer.compose(inner)` where `inner`'s codomain is not `outer`'s domain.
    #[error("inner operation codomain does not match outer operation domain")]
    CompositionMismatch,

    /// An element was requested from an empty set.
    #[error("collection is empty")]
    EmptyCollection,

    /// Elements owned by two different groups were combined.
    #[error("cannot multiply {left} and {right}: elements belong to different groups")]
    ForeignElement {
        /// Left operand.
        left: String,
        /// Right operand.
        right: String,
    },
}

/// Render a value for inclusion in an [`AlgebraError`].
pub(crate) fn show<T: Debug + ?Sized>(value: &T) -> String {
    format!("{:?}", value)
}
