/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Operation: a total function between two finite sets, validated on
//! construction.

use std::fmt;
use std::sync::Arc;

use crate::error::AlgebraError;
use crate::error::show;
use crate::finite_set::FiniteSet;
use crate::finite_set::Value;

type Mapping<D, C> = Arc<dyn Fn(&D) -> C + Send + Sync>;

/// A function `domain → codomain` known to be total.
///
/// Construction evaluates the mapping on every member of the domain
/// and fails unless each result lies in the codomain, so a value of
/// this type is always a well-defined function between the two sets.
/// Derived operations ([`Operation::compose`],
/// [`Operation::restrict_to`]) go through the same check.
///
/// The mapping itself is shared, so cloning an `Operation` only clones
/// the two sets.
///
/// # Example
/// ```
/// use algebra::FiniteSet;
/// use algebra::Operation;
///
/// let z3 = FiniteSet::from([0u32, 1, 2]);
/// let double = Operation::new(z3.clone(), z3.clone(), |x: &u32| (2 * x) % 3).unwrap();
/// assert_eq!(double.apply(&2).unwrap(), 1);
/// assert!(double.is_bijective());
/// ```
pub struct Operation<D, C> {
    domain: FiniteSet<D>,
    codomain: FiniteSet<C>,
    map: Mapping<D, C>,
}

impl<D: Value, C: Value> Operation<D, C> {
    /// Wrap `f` as an operation from `domain` to `codomain`.
    ///
    /// Fails with [`AlgebraError::DomainViolation`] if `f` sends some
    /// member of `domain` outside `codomain`.
    pub fn new<F>(domain: FiniteSet<D>, codomain: FiniteSet<C>, f: F) -> Result<Self, AlgebraError>
    where
        F: Fn(&D) -> C + Send + Sync + 'static,
    {
        Self::with_mapping(domain, codomain, Arc::new(f))
    }

    fn with_mapping(
        domain: FiniteSet<D>,
        codomain: FiniteSet<C>,
        map: Mapping<D, C>,
    ) -> Result<Self, AlgebraError> {
        for x in &domain {
            let y = map(x);
            if !codomain.contains(&y) {
                tracing::debug!(input = ?x, output = ?y, "operation leaves its codomain");
                return Err(AlgebraError::DomainViolation {
                    input: show(x),
                    output: show(&y),
                });
            }
        }
        Ok(Self {
            domain,
            codomain,
            map,
        })
    }

    /// The declared domain.
    pub fn domain(&self) -> &FiniteSet<D> {
        &self.domain
    }

    /// The declared codomain.
    pub fn codomain(&self) -> &FiniteSet<C> {
        &self.codomain
    }

    /// Evaluate the operation at `x`.
    pub fn apply(&self, x: &D) -> Result<C, AlgebraError> {
        if !self.domain.contains(x) {
            return Err(AlgebraError::NotInDomain { value: show(x) });
        }
        Ok(self.eval(x))
    }

    // Callers guarantee `x` is in the domain.
    pub(crate) fn eval(&self, x: &D) -> C {
        (self.map)(x)
    }

    /// `{ f(x) : x ∈ domain }`.
    pub fn image(&self) -> FiniteSet<C> {
        self.domain.iter().map(|x| self.eval(x)).collect()
    }

    /// Every member of the codomain is hit.
    pub fn is_surjective(&self) -> bool {
        self.image() == self.codomain
    }

    /// Distinct inputs have distinct outputs.
    pub fn is_injective(&self) -> bool {
        self.image().len() == self.domain.len()
    }

    /// Both injective and surjective.
    pub fn is_bijective(&self) -> bool {
        self.is_injective() && self.is_surjective()
    }

    /// `self ∘ inner`: apply `inner`, then `self`.
    ///
    /// Requires `inner`'s codomain to equal `self`'s domain; fails with
    /// [`AlgebraError::CompositionMismatch`] otherwise.
    pub fn compose<B: Value>(&self, inner: &Operation<B, D>) -> Result<Operation<B, C>, AlgebraError> {
        if self.domain != inner.codomain {
            return Err(AlgebraError::CompositionMismatch);
        }
        let outer = Arc::clone(&self.map);
        let first = Arc::clone(&inner.map);
        Operation::with_mapping(
            inner.domain.clone(),
            self.codomain.clone(),
            Arc::new(move |x: &B| outer(&first(x))),
        )
    }

    /// The same mapping declared over a smaller domain and any
    /// codomain, validated again.
    ///
    /// Fails with [`AlgebraError::NotInDomain`] if `domain` is not a
    /// subset of the current domain.
    pub fn restrict_to(
        &self,
        domain: FiniteSet<D>,
        codomain: FiniteSet<C>,
    ) -> Result<Self, AlgebraError> {
        if let Some(x) = domain.iter().find(|&x| !self.domain.contains(x)) {
            return Err(AlgebraError::NotInDomain { value: show(x) });
        }
        Self::with_mapping(domain, codomain, Arc::clone(&self.map))
    }
}

impl<T: Value> Operation<T, T> {
    /// The identity function on `set`.
    pub fn identity(set: FiniteSet<T>) -> Self {
        Self {
            domain: set.clone(),
            codomain: set,
            map: Arc::new(|x: &T| x.clone()),
        }
    }
}

impl<D, C> Clone for Operation<D, C>
where
    D: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            domain: self.domain.clone(),
            codomain: self.codomain.clone(),
            map: Arc::clone(&self.map),
        }
    }
}

/// Structural equality: equal domains, equal codomains, and agreement
/// on every member of the domain. This evaluates both mappings across
/// the whole domain; `Operation` is intentionally not `Hash`.
impl<D: Value, C: Value> PartialEq for Operation<D, C> {
    fn eq(&self, other: &Self) -> bool {
        if self.domain != other.domain || self.codomain != other.codomain {
            return false;
        }
        Arc::ptr_eq(&self.map, &other.map)
            || self.domain.iter().all(|x| self.eval(x) == other.eval(x))
    }
}

impl<D: Value, C: Value> Eq for Operation<D, C> {}

impl<D, C> fmt::Debug for Operation<D, C>
where
    D: Value,
    C: Value,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("domain", &self.domain.len())
            .field("codomain", &self.codomain.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(n: u32) -> FiniteSet<u32> {
        (0..n).collect()
    }

    #[test]
    fn construction_checks_totality() {
        let err = Operation::new(z(3), z(3), |x: &u32| x + 1).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::DomainViolation {
                input: "2".to_string(),
                output: "3".to_string(),
            }
        );
    }

    #[test]
    fn apply_outside_domain_fails() {
        let op = Operation::new(z(3), z(3), |x: &u32| *x).unwrap();
        assert_eq!(op.apply(&1), Ok(1));
        assert_eq!(
            op.apply(&7),
            Err(AlgebraError::NotInDomain {
                value: "7".to_string()
            })
        );
    }

    #[test]
    fn image_and_surjectivity() {
        let halve = Operation::new(z(4), z(4), |x: &u32| x / 2).unwrap();
        assert_eq!(halve.image(), FiniteSet::from([0, 1]));
        assert!(!halve.is_surjective());
        assert!(!halve.is_injective());
        assert!(!halve.is_bijective());

        let onto = halve.restrict_to(z(4), z(2)).unwrap();
        assert!(onto.is_surjective());
        assert!(!onto.is_injective());
    }

    #[test]
    fn injective_into_larger_codomain() {
        let embed = Operation::new(z(2), z(4), |x: &u32| x + 2).unwrap();
        assert!(embed.is_injective());
        assert!(!embed.is_surjective());
    }

    #[test]
    fn identity_is_bijective() {
        let id = Operation::identity(z(5));
        assert!(id.is_bijective());
        assert_eq!(id.apply(&4), Ok(4));
        assert_eq!(id.image(), z(5));
    }

    #[test]
    fn compose_applies_inner_first() {
        let succ = Operation::new(z(4), z(4), |x: &u32| (x + 1) % 4).unwrap();
        let double = Operation::new(z(4), z(4), |x: &u32| (2 * x) % 4).unwrap();
        let double_after_succ = double.compose(&succ).unwrap();
        assert_eq!(double_after_succ.apply(&1), Ok(0));
        assert_eq!(double_after_succ.apply(&0), Ok(2));
        let succ_after_double = succ.compose(&double).unwrap();
        assert_eq!(succ_after_double.apply(&1), Ok(3));
    }

    #[test]
    fn compose_changes_types() {
        let to_char = Operation::new(z(3), FiniteSet::from(['a', 'b', 'c']), |x: &u32| {
            (b'a' + *x as u8) as char
        })
        .unwrap();
        let is_vowel = Operation::new(
            FiniteSet::from(['a', 'b', 'c']),
            FiniteSet::from([false, true]),
            |c: &char| *c == 'a',
        )
        .unwrap();
        let composed = is_vowel.compose(&to_char).unwrap();
        assert_eq!(composed.domain(), &z(3));
        assert_eq!(composed.apply(&0), Ok(true));
        assert_eq!(composed.apply(&2), Ok(false));
    }

    #[test]
    fn compose_requires_matching_sets() {
        let a = Operation::identity(z(3));
        let b = Operation::identity(z(4));
        assert_eq!(a.compose(&b).unwrap_err(), AlgebraError::CompositionMismatch);
    }

    #[test]
    fn restrict_to_revalidates() {
        let succ = Operation::new(z(5), z(5), |x: &u32| (x + 1) % 5).unwrap();
        let err = succ.restrict_to(z(3), z(3)).unwrap_err();
        assert!(matches!(err, AlgebraError::DomainViolation { .. }));
        let ok = succ.restrict_to(z(3), z(5)).unwrap();
        assert_eq!(ok.apply(&2), Ok(3));
        assert!(ok.apply(&3).is_err());
    }

    #[test]
    fn restrict_to_cannot_grow_the_domain() {
        let succ = Operation::new(z(3), z(4), |x: &u32| x + 1).unwrap();
        assert_eq!(
            succ.restrict_to(z(4), z(5)).unwrap_err(),
            AlgebraError::NotInDomain {
                value: "3".to_string()
            }
        );
    }

    #[test]
    fn equality_is_pointwise() {
        let a = Operation::new(z(4), z(4), |x: &u32| (x + 2) % 4).unwrap();
        let b = Operation::new(z(4), z(4), |x: &u32| (x + 6) % 4).unwrap();
        let c = Operation::new(z(4), z(4), |x: &u32| (x + 1) % 4).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn equality_requires_same_sets() {
        let a = Operation::identity(z(3));
        let b = a.restrict_to(z(3), z(4)).unwrap();
        assert_ne!(a, b);
    }
}
