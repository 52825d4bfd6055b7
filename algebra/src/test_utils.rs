/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Small groups shared by the unit tests.

use itertools::Itertools;

use crate::AlgebraError;
use crate::FiniteSet;
use crate::Group;
use crate::Operation;

/// Integers modulo `n` under addition.
pub fn cyclic(n: u32) -> Group<u32> {
    let carrier: FiniteSet<u32> = (0..n).collect();
    let op = Operation::new(
        carrier.product(&carrier),
        carrier.clone(),
        move |(a, b): &(u32, u32)| (a + b) % n,
    )
    .unwrap();
    Group::new(carrier, op).unwrap()
}

/// `{0, 1, 2, 3}` under bitwise xor.
pub fn klein() -> Group<u32> {
    let carrier: FiniteSet<u32> = (0..4).collect();
    let op = Operation::new(
        carrier.product(&carrier),
        carrier.clone(),
        |(a, b): &(u32, u32)| a ^ b,
    )
    .unwrap();
    Group::new(carrier, op).unwrap()
}

/// Permutations of `{0, 1, 2}`, composed as `(s · t)[i] = s[t[i]]`.
pub fn symmetric3() -> Group<Vec<usize>> {
    let carrier: FiniteSet<Vec<usize>> = (0..3).permutations(3).collect();
    let op = Operation::new(
        carrier.product(&carrier),
        carrier.clone(),
        |(s, t): &(Vec<usize>, Vec<usize>)| t.iter().map(|&i| s[i]).collect(),
    )
    .unwrap();
    Group::new(carrier, op).unwrap()
}

/// Whatever `table` describes on `{0, .., N - 1}`, where
/// `table[a][b] = a · b`. Entries must be below `N`.
pub fn table_group<const N: usize>(table: [[u32; N]; N]) -> Result<Group<u32>, AlgebraError> {
    let carrier: FiniteSet<u32> = (0..N as u32).collect();
    let op = Operation::new(
        carrier.product(&carrier),
        carrier.clone(),
        move |(a, b): &(u32, u32)| table[*a as usize][*b as usize],
    )?;
    Group::new(carrier, op)
}
