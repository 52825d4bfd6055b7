/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Serializable descriptions of groups, printed as JSON by the binary.

use algebra::AlgebraError;
use algebra::FiniteSet;
use algebra::Group;
use algebra::Value;
use serde::Serialize;

/// The order, identity, commutativity and inverse table of a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary<T> {
    pub order: usize,
    pub identity: T,
    pub abelian: bool,
    /// In iteration order, identity first.
    pub elements: Vec<ElementSummary<T>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementSummary<T> {
    pub value: T,
    pub inverse: T,
}

impl<T: Value> GroupSummary<T> {
    pub fn of(group: &Group<T>) -> Result<Self, AlgebraError> {
        let elements = group
            .iter()
            .map(|x| {
                Ok(ElementSummary {
                    inverse: x.inverse()?.into_value(),
                    value: x.into_value(),
                })
            })
            .collect::<Result<Vec<_>, AlgebraError>>()?;
        Ok(Self {
            order: group.size(),
            identity: group.identity().into_value(),
            abelian: group.is_abelian(),
            elements,
        })
    }
}

/// The orbit and stabilizer of a point under left multiplication by
/// the group on its own carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrbitSummary<T> {
    pub point: T,
    pub orbit: FiniteSet<T>,
    pub stabilizer: FiniteSet<T>,
    /// Whether `|orbit| · |stabilizer| = |G|`.
    pub orbit_stabilizer: bool,
}

impl<T: Value> OrbitSummary<T> {
    pub fn of(group: &Group<T>, point: T) -> Result<Self, AlgebraError> {
        let orbit = group.orbit(&point, group.carrier())?;
        let stabilizer = group.stabilizer(&point, group.carrier())?;
        let orbit_stabilizer = orbit.len() * stabilizer.len() == group.size();
        if !orbit_stabilizer {
            tracing::warn!(
                orbit = orbit.len(),
                stabilizer = stabilizer.len(),
                order = group.size(),
                "orbit-stabilizer law does not hold"
            );
        }
        Ok(Self {
            point,
            orbit,
            stabilizer,
            orbit_stabilizer,
        })
    }
}
