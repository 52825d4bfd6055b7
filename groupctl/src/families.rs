/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Standard families of finite groups.
//!
//! Each family comes as a pair of functions: `*_input` returns the raw
//! carrier and operation, and the plain-named function feeds them to
//! [`Group::new`]. Nothing here bypasses validation; a family is just a
//! convenient source of (carrier, operation) pairs.

use std::fmt;

use algebra::AlgebraError;
use algebra::FiniteSet;
use algebra::Group;
use algebra::Operation;
use algebra::Value;
use itertools::Itertools;
use serde::Serialize;

/// A permutation of `{0, .., n - 1}`, written as the image of each
/// index.
pub type Permutation = Vec<usize>;

/// The carrier and multiplication of `Z/nZ` under addition.
pub fn cyclic_input(
    n: usize,
) -> Result<(FiniteSet<usize>, Operation<(usize, usize), usize>), AlgebraError> {
    let carrier: FiniteSet<usize> = (0..n).collect();
    let op = Operation::new(
        carrier.product(&carrier),
        carrier.clone(),
        move |(a, b): &(usize, usize)| (a + b) % n,
    )?;
    Ok((carrier, op))
}

/// The cyclic group of order `n`. Fails with [`AlgebraError::NoIdentity`]
/// when `n` is zero.
#[tracing::instrument(level = "debug")]
pub fn cyclic(n: usize) -> Result<Group<usize>, AlgebraError> {
    let (carrier, op) = cyclic_input(n)?;
    Group::new(carrier, op)
}

/// The carrier and composition of the symmetric group on `n` points.
///
/// Permutations compose right to left: `(s · t)[i] = s[t[i]]`.
pub fn symmetric_input(
    n: usize,
) -> Result<
    (
        FiniteSet<Permutation>,
        Operation<(Permutation, Permutation), Permutation>,
    ),
    AlgebraError,
> {
    let carrier: FiniteSet<Permutation> = (0..n).permutations(n).collect();
    let op = Operation::new(
        carrier.product(&carrier),
        carrier.clone(),
        |(s, t): &(Permutation, Permutation)| compose(s, t),
    )?;
    Ok((carrier, op))
}

/// The symmetric group on `n` points, of order `n!`.
#[tracing::instrument(level = "debug")]
pub fn symmetric(n: usize) -> Result<Group<Permutation>, AlgebraError> {
    let (carrier, op) = symmetric_input(n)?;
    Group::new(carrier, op)
}

/// `s ∘ t`.
pub fn compose(s: &[usize], t: &[usize]) -> Permutation {
    t.iter().map(|&i| s[i]).collect()
}

/// Values the command line can name: a carrier type that can be parsed
/// from an argument and printed as JSON.
pub trait Member: Value + Serialize {
    /// Parse a member from its command-line spelling.
    fn parse_arg(arg: &str) -> anyhow::Result<Self>;
}

impl Member for usize {
    fn parse_arg(arg: &str) -> anyhow::Result<Self> {
        arg.trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("could not parse '{}' as a residue: {}", arg, e))
    }
}

impl Member for Permutation {
    /// Permutations are spelled as comma-separated images, e.g. `1,2,0`.
    fn parse_arg(arg: &str) -> anyhow::Result<Self> {
        arg.split(',')
            .map(|image| {
                image.trim().parse::<usize>().map_err(|e| {
                    anyhow::anyhow!("could not parse '{}' as a permutation: {}", arg, e)
                })
            })
            .collect()
    }
}

/// Something to do with a freshly built family member. The group's
/// carrier type differs per family, so callers hand over a visitor
/// rather than receive the group.
pub trait GroupVisitor {
    /// What the visit produces.
    type Output;

    /// Consume `group`.
    fn visit<T: Member>(self, group: Group<T>) -> anyhow::Result<Self::Output>;
}

/// A family selectable from the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// `Z/nZ` under addition.
    Cyclic,
    /// Permutations of `n` points under composition.
    Symmetric,
}

impl Family {
    /// The order of the family member of degree `n`, or `None` if it
    /// does not fit in a `usize`.
    pub fn order(self, n: usize) -> Option<usize> {
        match self {
            Family::Cyclic => Some(n),
            Family::Symmetric => (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k)),
        }
    }

    /// Build the member of degree `n` and hand it to `visitor`. Members
    /// whose order exceeds `max_order` are refused before any work is
    /// done.
    pub fn visit<V: GroupVisitor>(
        self,
        n: usize,
        max_order: usize,
        visitor: V,
    ) -> anyhow::Result<V::Output> {
        match self.order(n) {
            Some(order) if order <= max_order => {}
            Some(order) => anyhow::bail!(
                "{} group of degree {} has order {}, above the configured maximum of {}",
                self,
                n,
                order,
                max_order
            ),
            None => anyhow::bail!("{} group of degree {} is too large to build", self, n),
        }
        match self {
            Family::Cyclic => visitor.visit(cyclic(n)?),
            Family::Symmetric => visitor.visit(symmetric(n)?),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Cyclic => write!(f, "cyclic"),
            Family::Symmetric => write!(f, "symmetric"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_input_is_addition_mod_n() {
        let (carrier, op) = cyclic_input(5).unwrap();
        assert_eq!(carrier, (0..5).collect());
        assert_eq!(op.apply(&(3, 4)).unwrap(), 2);
        assert_eq!(op.domain().len(), 25);
    }

    #[test]
    fn cyclic_of_zero_has_no_identity() {
        assert_eq!(cyclic(0).unwrap_err(), AlgebraError::NoIdentity);
    }

    #[test]
    fn symmetric_input_composes_right_to_left() {
        let (carrier, op) = symmetric_input(3).unwrap();
        assert_eq!(carrier.len(), 6);
        let swap = vec![1, 0, 2];
        let rotate = vec![1, 2, 0];
        assert_eq!(op.apply(&(rotate.clone(), swap.clone())).unwrap(), vec![2, 1, 0]);
        assert_eq!(op.apply(&(swap, rotate)).unwrap(), vec![0, 2, 1]);
    }

    #[test]
    fn s3_scenario() {
        let s3 = symmetric(3).unwrap();
        assert_eq!(s3.size(), 6);
        assert_eq!(s3.identity().value(), &vec![0, 1, 2]);
        assert!(!s3.is_abelian());
        for x in &s3 {
            assert_eq!(x.multiply(&x.inverse().unwrap()).unwrap(), s3.identity());
        }
    }

    #[test]
    fn z4_scenario() {
        let z4 = cyclic(4).unwrap();
        assert_eq!(z4.size(), 4);
        assert_eq!(z4.identity().value(), &0);
        assert!(z4.is_abelian());
        let one = algebra::Element::new(1, &z4).unwrap();
        assert_eq!(one.multiply(&one).unwrap().value(), &2);
        assert_eq!(z4.inverse(&1).unwrap().value(), &3);
    }

    #[test]
    fn order() {
        assert_eq!(Family::Cyclic.order(7), Some(7));
        assert_eq!(Family::Symmetric.order(0), Some(1));
        assert_eq!(Family::Symmetric.order(5), Some(120));
        assert_eq!(Family::Symmetric.order(100), None);
    }

    struct Size;

    impl GroupVisitor for Size {
        type Output = usize;

        fn visit<T: Member>(self, group: Group<T>) -> anyhow::Result<usize> {
            Ok(group.size())
        }
    }

    #[test]
    fn visit_builds_members_within_the_limit() {
        assert_eq!(Family::Cyclic.visit(6, 6, Size).unwrap(), 6);
        assert_eq!(Family::Symmetric.visit(3, 6, Size).unwrap(), 6);
    }

    #[test]
    fn visit_refuses_members_above_the_limit() {
        let err = Family::Symmetric.visit(4, 23, Size).unwrap_err();
        assert_eq!(
            err.to_string(),
            "symmetric group of degree 4 has order 24, above the configured maximum of 23"
        );
        assert!(Family::Symmetric.visit(40, usize::MAX, Size).is_err());
    }

    #[test]
    fn parse_members() {
        assert_eq!(usize::parse_arg(" 3 ").unwrap(), 3);
        assert!(usize::parse_arg("x").is_err());
        assert_eq!(Permutation::parse_arg("1, 2,0").unwrap(), vec![1, 2, 0]);
        assert!(Permutation::parse_arg("1,,0").is_err());
    }
}
