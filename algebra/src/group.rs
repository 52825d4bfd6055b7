/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Group: a carrier and an operation that have been checked against
//! the group axioms.

use std::collections::btree_set;
use std::fmt;

use itertools::Itertools;

use crate::element::Element;
use crate::error::AlgebraError;
use crate::error::show;
use crate::finite_set::FiniteSet;
use crate::finite_set::Value;
use crate::operation::Operation;

/// A finite group.
///
/// [`Group::new`] checks, exhaustively and in this order:
///
/// 1. **Shape**: the operation is `carrier × carrier → carrier`.
/// 2. **Associativity**: `a · (b · c) == (a · b) · c` for every triple.
/// 3. **Identity**: some `e` has `e · x == x == x · e` for every `x`.
/// 4. **Inverses**: every `x` has some `y` with `x · y == e`.
///
/// The first violation is returned as an [`AlgebraError`] naming the
/// offending values. Whether the operation is commutative is computed
/// once during construction. A `Group` is never modified afterwards.
///
/// All checks are brute force (associativity is cubic in the order),
/// so callers are responsible for keeping carriers small.
///
/// # Example
/// ```
/// use algebra::FiniteSet;
/// use algebra::Group;
/// use algebra::Operation;
///
/// let z4: FiniteSet<u32> = (0..4).collect();
/// let add = Operation::new(z4.product(&z4), z4.clone(), |(a, b): &(u32, u32)| (a + b) % 4)
///     .unwrap();
/// let group = Group::new(z4, add).unwrap();
///
/// assert_eq!(group.size(), 4);
/// assert_eq!(group.identity().value(), &0);
/// assert_eq!(group.inverse(&1).unwrap().value(), &3);
/// assert!(group.is_abelian());
/// ```
#[derive(Clone)]
pub struct Group<T> {
    carrier: FiniteSet<T>,
    op: Operation<(T, T), T>,
    identity: T,
    abelian: bool,
}

impl<T: Value> Group<T> {
    /// Validate `op` against the group axioms over `carrier`.
    #[tracing::instrument(level = "debug", skip_all, fields(order = carrier.len()))]
    pub fn new(carrier: FiniteSet<T>, op: Operation<(T, T), T>) -> Result<Self, AlgebraError> {
        let validated = check_shape(&carrier, &op)
            .and_then(|()| check_associative(&carrier, &op))
            .and_then(|()| find_identity(&carrier, &op))
            .and_then(|identity| check_inverses(&carrier, &op, &identity).map(|()| identity));

        let identity = match validated {
            Ok(identity) => identity,
            Err(err) => {
                tracing::debug!(%err, "rejected group");
                return Err(err);
            }
        };

        let abelian = is_commutative(&carrier, &op);
        tracing::debug!(identity = ?identity, abelian, "validated group");

        Ok(Self {
            carrier,
            op,
            identity,
            abelian,
        })
    }

    /// The order of the group.
    pub fn size(&self) -> usize {
        self.carrier.len()
    }

    /// The underlying set.
    pub fn carrier(&self) -> &FiniteSet<T> {
        &self.carrier
    }

    /// The group operation.
    pub fn operation(&self) -> &Operation<(T, T), T> {
        &self.op
    }

    /// The identity element.
    pub fn identity(&self) -> Element<'_, T> {
        Element::attach(self.identity.clone(), self)
    }

    /// Whether `a · b == b · a` for every pair.
    pub fn is_abelian(&self) -> bool {
        self.abelian
    }

    /// Membership test on the carrier.
    pub fn contains(&self, value: &T) -> bool {
        self.carrier.contains(value)
    }

    /// The elements of the group: the identity first, then every other
    /// member in carrier order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            group: self,
            identity_pending: true,
            rest: self.carrier.iter(),
        }
    }

    /// The inverse of `value`.
    ///
    /// Fails with [`AlgebraError::NotInGroup`] if `value` is not a
    /// member of the carrier.
    pub fn inverse(&self, value: &T) -> Result<Element<'_, T>, AlgebraError> {
        if !self.contains(value) {
            return Err(AlgebraError::NotInGroup { value: show(value) });
        }
        self.inverse_of(value)
            .map(|inverse| Element::attach(inverse, self))
            .ok_or_else(|| AlgebraError::NoInverse { value: show(value) })
    }

    /// The subgroup relation `self ≤ other`.
    ///
    /// Holds when `self`'s carrier is a non-empty subset of `other`'s,
    /// `self`'s operation agrees with `other`'s on it, and `a · b⁻¹`
    /// (computed in `other`) stays inside `self` for every `a`, `b` in
    /// `self`.
    pub fn is_subgroup_of(&self, other: &Group<T>) -> bool {
        if self.carrier.is_empty() || !self.carrier.is_subset(&other.carrier) {
            return false;
        }

        let agrees = self
            .carrier
            .iter()
            .cartesian_product(self.carrier.iter())
            .all(|(a, b)| self.mul(a, b) == other.mul(a, b));
        if !agrees {
            return false;
        }

        for b in &self.carrier {
            let Some(b_inv) = other.inverse_of(b) else {
                return false;
            };
            for a in &self.carrier {
                if !self.contains(&other.mul(a, &b_inv)) {
                    return false;
                }
            }
        }
        true
    }

    /// Whether `self` is a normal subgroup of `other`: a subgroup whose
    /// left coset `H·g` equals its right coset `g·H` for every `g` in
    /// `other`.
    pub fn is_normal_subgroup_of(&self, other: &Group<T>) -> bool {
        self.is_subgroup_of(other)
            && other.carrier.iter().all(|g| {
                let left: FiniteSet<T> = self.carrier.iter().map(|h| other.mul(h, g)).collect();
                let right: FiniteSet<T> = self.carrier.iter().map(|h| other.mul(g, h)).collect();
                left == right
            })
    }

    /// The subgroup carried by `subset`, with this group's operation
    /// restricted to it.
    ///
    /// Fails with [`AlgebraError::NotInDomain`] if `subset` leaves the
    /// carrier, [`AlgebraError::DomainViolation`] if it is not closed,
    /// or with the relevant axiom error otherwise.
    pub fn restrict(&self, subset: FiniteSet<T>) -> Result<Group<T>, AlgebraError> {
        let op = self
            .op
            .restrict_to(subset.product(&subset), subset.clone())?;
        Group::new(subset, op)
    }

    /// The orbit of `point` under the action `g ↦ g · point`, kept to
    /// the members of `ambient`.
    ///
    /// Fails with [`AlgebraError::NotInSet`] if `point` is not in
    /// `ambient`, and with [`AlgebraError::NotInDomain`] if the group
    /// cannot act on it.
    pub fn orbit(&self, point: &T, ambient: &FiniteSet<T>) -> Result<FiniteSet<T>, AlgebraError> {
        if !ambient.contains(point) {
            return Err(AlgebraError::NotInSet { value: show(point) });
        }
        self.carrier
            .iter()
            .map(|g| self.op.apply(&(g.clone(), point.clone())))
            .filter_ok(|image| ambient.contains(image))
            .collect()
    }

    /// The members of the group fixing `point`: `{ g : g · point == point }`.
    ///
    /// Preconditions as for [`Group::orbit`].
    pub fn stabilizer(
        &self,
        point: &T,
        ambient: &FiniteSet<T>,
    ) -> Result<FiniteSet<T>, AlgebraError> {
        if !ambient.contains(point) {
            return Err(AlgebraError::NotInSet { value: show(point) });
        }
        let mut fixing = Vec::new();
        for g in &self.carrier {
            if self.op.apply(&(g.clone(), point.clone()))? == *point {
                fixing.push(g.clone());
            }
        }
        Ok(fixing.into_iter().collect())
    }

    /// The direct product `self × other`, with the componentwise
    /// operation `((a, b), (c, d)) ↦ (a · c, b · d)`.
    ///
    /// The result is validated from scratch like any other group.
    pub fn product<U: Value>(&self, other: &Group<U>) -> Result<Group<(T, U)>, AlgebraError> {
        let carrier = self.carrier.product(&other.carrier);
        let left = self.op.clone();
        let right = other.op.clone();
        let op = Operation::new(
            carrier.product(&carrier),
            carrier.clone(),
            move |((a, b), (c, d)): &((T, U), (T, U))| {
                (
                    left.eval(&(a.clone(), c.clone())),
                    right.eval(&(b.clone(), d.clone())),
                )
            },
        )?;
        Group::new(carrier, op)
    }

    // Both arguments must be members of the carrier.
    pub(crate) fn mul(&self, a: &T, b: &T) -> T {
        self.op.eval(&(a.clone(), b.clone()))
    }

    fn inverse_of(&self, value: &T) -> Option<T> {
        self.carrier
            .iter()
            .find(|&candidate| self.mul(value, candidate) == self.identity)
            .cloned()
    }
}

fn check_shape<T: Value>(carrier: &FiniteSet<T>, op: &Operation<(T, T), T>) -> Result<(), AlgebraError> {
    if *op.codomain() != *carrier {
        return Err(AlgebraError::ShapeMismatch {
            reason: format!(
                "codomain has {} members but is not the carrier of {} members",
                op.codomain().len(),
                carrier.len()
            ),
        });
    }
    if *op.domain() != carrier.product(carrier) {
        return Err(AlgebraError::ShapeMismatch {
            reason: format!(
                "domain has {} members but is not carrier × carrier",
                op.domain().len()
            ),
        });
    }
    Ok(())
}

fn check_associative<T: Value>(
    carrier: &FiniteSet<T>,
    op: &Operation<(T, T), T>,
) -> Result<(), AlgebraError> {
    let mul = |a: &T, b: &T| op.eval(&(a.clone(), b.clone()));
    for a in carrier {
        for b in carrier {
            let ab = mul(a, b);
            for c in carrier {
                if mul(a, &mul(b, c)) != mul(&ab, c) {
                    return Err(AlgebraError::NotAssociative {
                        a: show(a),
                        b: show(b),
                        c: show(c),
                    });
                }
            }
        }
    }
    Ok(())
}

fn find_identity<T: Value>(carrier: &FiniteSet<T>, op: &Operation<(T, T), T>) -> Result<T, AlgebraError> {
    let mul = |a: &T, b: &T| op.eval(&(a.clone(), b.clone()));
    carrier
        .iter()
        .find(|&e| carrier.iter().all(|x| mul(e, x) == *x && mul(x, e) == *x))
        .cloned()
        .ok_or(AlgebraError::NoIdentity)
}

fn check_inverses<T: Value>(
    carrier: &FiniteSet<T>,
    op: &Operation<(T, T), T>,
    identity: &T,
) -> Result<(), AlgebraError> {
    let mul = |a: &T, b: &T| op.eval(&(a.clone(), b.clone()));
    match carrier
        .iter()
        .find(|&x| !carrier.iter().any(|y| mul(x, y) == *identity))
    {
        Some(x) => Err(AlgebraError::NoInverse { value: show(x) }),
        None => Ok(()),
    }
}

fn is_commutative<T: Value>(carrier: &FiniteSet<T>, op: &Operation<(T, T), T>) -> bool {
    carrier
        .iter()
        .tuple_combinations()
        .all(|(x, y)| op.eval(&(x.clone(), y.clone())) == op.eval(&(y.clone(), x.clone())))
}

/// Iterator over the elements of a [`Group`], identity first.
pub struct Iter<'g, T> {
    group: &'g Group<T>,
    identity_pending: bool,
    rest: btree_set::Iter<'g, T>,
}

impl<'g, T: Value> Iterator for Iter<'g, T> {
    type Item = Element<'g, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let group = self.group;
        if self.identity_pending {
            self.identity_pending = false;
            return Some(group.identity());
        }
        self.rest
            .by_ref()
            .find(|&value| *value != group.identity)
            .map(|value| Element::attach(value.clone(), group))
    }
}

impl<'g, T: Value> IntoIterator for &'g Group<T> {
    type Item = Element<'g, T>;
    type IntoIter = Iter<'g, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two groups are equal when they are the same instance, or when their
/// carriers are equal and their operations agree everywhere. The
/// structural case is quadratic in the order; `Group` is intentionally
/// not `Hash`.
impl<T: Value> PartialEq for Group<T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || (self.carrier == other.carrier && self.op == other.op)
    }
}

impl<T: Value> Eq for Group<T> {}

impl<T: Value> fmt::Debug for Group<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("carrier", &self.carrier)
            .field("identity", &self.identity)
            .field("abelian", &self.abelian)
            .finish()
    }
}
