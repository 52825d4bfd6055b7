/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Property-based generators for groups.
//!
//! Example usage:
//!
//! ```
//! use proptest::prelude::*;
//!
//! use crate::strategy::gen_cyclic;
//!
//! proptest! {
//!     #[test]
//!     fn test_group(group in gen_cyclic(8)) {
//!         // Use `group` as input to subgroup or orbit tests
//!     }
//! }
//! ```
//!
//! This module is only included in test builds (`#[cfg(test)]`).

use proptest::prelude::*;

use crate::Group;
use crate::test_utils::cyclic;

/// Generates a cyclic group of order between 1 and `max_order`
/// (inclusive).
pub fn gen_cyclic(max_order: u32) -> impl Strategy<Value = Group<u32>> {
    (1..=max_order).prop_map(cyclic)
}

/// Generates a pair `(group, d)` where `group` is a cyclic group of
/// order between 1 and `max_order` and `d` divides its order.
pub fn gen_cyclic_with_divisor(max_order: u32) -> impl Strategy<Value = (Group<u32>, u32)> {
    (1..=max_order)
        .prop_flat_map(|n| {
            let divisors: Vec<u32> = (1..=n).filter(|d| n % d == 0).collect();
            (Just(n), prop::sample::select(divisors))
        })
        .prop_map(|(n, d)| (cyclic(n), d))
}
