/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![deny(missing_docs)]

//! Finite groups, checked by brute force.
//!
//! This crate builds finite algebraic structures out of explicit data
//! and verifies them: a carrier set, a candidate binary operation on
//! it, and nothing else. Every axiom is checked exhaustively when a
//! structure is constructed, so a value that exists is a value that
//! is valid.
//!
//! # Quick Start
//!
//! ```rust
//! use algebra::FiniteSet;
//! use algebra::Group;
//! use algebra::Operation;
//!
//! // Integers modulo 4 under addition.
//! let z4: FiniteSet<u32> = (0..4).collect();
//! let add = Operation::new(z4.product(&z4), z4.clone(), |(a, b): &(u32, u32)| (a + b) % 4)
//!     .unwrap();
//! let group = Group::new(z4, add).unwrap();
//!
//! let one = group.iter().nth(1).unwrap();
//! assert_eq!(one.multiply(&one).unwrap().value(), &2);
//! assert_eq!(group.inverse(&1).unwrap().value(), &3);
//! ```
//!
//! # Core Concepts
//!
//! - **FiniteSet**: an immutable set of distinct values with a
//!   Cartesian product. Carriers, domains and codomains are all
//!   `FiniteSet`s.
//!
//! - **Operation**: a function between two finite sets, checked to be
//!   total when it is built. Supports image, injectivity,
//!   surjectivity, composition and restriction.
//!
//! - **Group**: a carrier together with an operation
//!   `carrier × carrier → carrier` that has passed the associativity,
//!   identity and inverse checks. Answers subgroup, normality, orbit,
//!   stabilizer and direct-product queries.
//!
//! - **Element**: a carrier value paired with a reference to its
//!   group, so that it can be multiplied (or, in abelian groups,
//!   added) to other elements of the same group.
//!
//! # Cost
//!
//! Nothing here is clever. Group construction is cubic in the order
//! (the associativity check), normality tests are cubic, and
//! structural equality of operations evaluates both functions over the
//! whole domain. The crate is meant for exploring and verifying small
//! groups.
//!
//! # Examples
//!
//! ```
//! use algebra::AlgebraError;
//! use algebra::FiniteSet;
//! use algebra::Group;
//! use algebra::Operation;
//!
//! // Subtraction modulo 3 is closed but not associative.
//! let z3: FiniteSet<u32> = (0..3).collect();
//! let sub = Operation::new(z3.product(&z3), z3.clone(), |(a, b): &(u32, u32)| (a + 3 - b) % 3)
//!     .unwrap();
//! assert!(matches!(
//!     Group::new(z3, sub),
//!     Err(AlgebraError::NotAssociative { .. })
//! ));
//! ```

mod element;
mod error;
mod finite_set;
mod group;
mod operation;

pub use element::Element;
pub use error::AlgebraError;
pub use finite_set::FiniteSet;
pub use finite_set::Value;
pub use group::Group;
pub use group::Iter;
pub use operation::Operation;

/// Property-based generators for randomized test input.
#[cfg(test)]
pub mod strategy;

#[cfg(test)]
mod test_utils;
