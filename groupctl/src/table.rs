/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Cayley tables for small groups.
//!
//! Elements are named by letter in [`Group::iter`] order, so the
//! identity is always `e`. A rendered table looks like this (for
//! `Z/2Z`):
//!
//! ```text
//! e: 0
//! x: 1
//!
//!   | e x      | 0 1
//! --+----    --+----
//! e | e x    0 | 0 1
//! x | x e    1 | 1 0
//!
//! inverses: e⁻¹ = e, x⁻¹ = x
//! ```

use std::fmt;

use algebra::AlgebraError;
use algebra::Element;
use algebra::Group;
use algebra::Value;
use itertools::Itertools;

/// Names handed out to elements, in order.
pub const LETTERS: [char; 8] = ['e', 'x', 'y', 'z', 'a', 'b', 'c', 'd'];

/// Columns separating the letter table from the value table.
const GUTTER: &str = "    ";

/// Errors raised while building a [`CayleyTable`].
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The group has more elements than there are names for, or than
    /// the caller is willing to print.
    #[error("cannot tabulate a group of order {order}: at most {limit} elements can be shown")]
    TooLarge { order: usize, limit: usize },

    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

/// A fully computed multiplication table, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CayleyTable {
    /// Debug rendering of each element, indexed like [`LETTERS`].
    values: Vec<String>,
    /// `products[i][j]` is the index of `elements[i] · elements[j]`.
    products: Vec<Vec<usize>>,
    /// `inverses[i]` is the index of the inverse of `elements[i]`.
    inverses: Vec<usize>,
}

impl CayleyTable {
    /// Tabulate `group`, refusing groups with more than `limit`
    /// elements. `limit` is capped at the number of available letters.
    pub fn new<T: Value>(group: &Group<T>, limit: usize) -> Result<Self, TableError> {
        let limit = limit.min(LETTERS.len());
        if group.size() > limit {
            return Err(TableError::TooLarge {
                order: group.size(),
                limit,
            });
        }

        let elements: Vec<Element<'_, T>> = group.iter().collect();
        let index_of = |x: &Element<'_, T>| {
            elements
                .iter()
                .position(|candidate| candidate == x)
                .ok_or_else(|| AlgebraError::NotInGroup {
                    value: format!("{:?}", x.value()),
                })
        };

        let mut products = Vec::with_capacity(elements.len());
        for x in &elements {
            let row = elements
                .iter()
                .map(|y| index_of(&x.multiply(y)?))
                .collect::<Result<Vec<_>, AlgebraError>>()?;
            products.push(row);
        }
        let inverses = elements
            .iter()
            .map(|x| index_of(&x.inverse()?))
            .collect::<Result<Vec<_>, AlgebraError>>()?;
        let values = elements
            .iter()
            .map(|x| format!("{:?}", x.value()))
            .collect();

        Ok(Self {
            values,
            products,
            inverses,
        })
    }

    /// The number of elements tabulated.
    pub fn order(&self) -> usize {
        self.values.len()
    }

    /// The letter of the product of the `i`th and `j`th elements.
    pub fn product(&self, i: usize, j: usize) -> char {
        LETTERS[self.products[i][j]]
    }

    /// The letter of the inverse of the `i`th element.
    pub fn inverse(&self, i: usize) -> char {
        LETTERS[self.inverses[i]]
    }
}

/// Lay out a square table with row and column headers, every cell
/// right-aligned to the widest entry.
fn grid(headers: &[String], cell: impl Fn(usize, usize) -> String) -> Vec<String> {
    let n = headers.len();
    let width = (0..n)
        .flat_map(|i| (0..n).map(move |j| (i, j)))
        .map(|(i, j)| cell(i, j).chars().count())
        .chain(headers.iter().map(|h| h.chars().count()))
        .max()
        .unwrap_or(0);
    let pad = |s: &str| format!("{:>width$}", s, width = width);

    let columns = headers.iter().map(|h| pad(h)).join(" ");
    let mut lines = vec![
        format!("{} | {}", pad(""), columns),
        format!(
            "{}+{}",
            "-".repeat(width + 1),
            "-".repeat(columns.chars().count() + 1)
        ),
    ];
    for (i, header) in headers.iter().enumerate() {
        let row = (0..n).map(|j| pad(&cell(i, j))).join(" ");
        lines.push(format!("{} | {}", pad(header), row));
    }
    lines
}

impl fmt::Display for CayleyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.order();
        let letters: Vec<String> = LETTERS[..n].iter().map(char::to_string).collect();

        for (letter, value) in letters.iter().zip(&self.values) {
            writeln!(f, "{}: {}", letter, value)?;
        }
        writeln!(f)?;

        let by_letter = grid(&letters, |i, j| self.product(i, j).to_string());
        let by_value = grid(&self.values, |i, j| self.values[self.products[i][j]].clone());
        let left_width = by_letter
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        for (left, right) in by_letter.iter().zip(&by_value) {
            writeln!(
                f,
                "{:<width$}{}{}",
                left,
                GUTTER,
                right,
                width = left_width
            )?;
        }
        writeln!(f)?;

        let inverses = (0..n)
            .map(|i| format!("{}⁻¹ = {}", letters[i], self.inverse(i)))
            .join(", ");
        writeln!(f, "inverses: {}", inverses)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::families::cyclic;
    use crate::families::symmetric;

    #[test]
    fn z2() {
        let table = CayleyTable::new(&cyclic(2).unwrap(), 8).unwrap();
        assert_eq!(
            table.to_string(),
            indoc! {"
                e: 0
                x: 1

                  | e x      | 0 1
                --+----    --+----
                e | e x    0 | 0 1
                x | x e    1 | 1 0

                inverses: e⁻¹ = e, x⁻¹ = x
            "}
        );
    }

    #[test]
    fn z4_letters_follow_iteration_order() {
        let table = CayleyTable::new(&cyclic(4).unwrap(), 8).unwrap();
        assert_eq!(table.order(), 4);
        // x = 1, y = 2, z = 3
        assert_eq!(table.product(1, 1), 'y');
        assert_eq!(table.product(1, 3), 'e');
        assert_eq!(table.product(2, 3), 'x');
        assert_eq!(table.inverse(1), 'z');
        assert_eq!(table.inverse(2), 'y');
        assert!(table
            .to_string()
            .ends_with("inverses: e⁻¹ = e, x⁻¹ = z, y⁻¹ = y, z⁻¹ = x\n"));
    }

    #[test]
    fn s3_pads_values() {
        let table = CayleyTable::new(&symmetric(3).unwrap(), 8).unwrap();
        let rendered = table.to_string();
        assert!(rendered.starts_with("e: [0, 1, 2]\nx: [0, 2, 1]\n"));
        // Every line of the side-by-side block has the same width.
        let block: Vec<&str> = rendered
            .lines()
            .skip(7)
            .take(8)
            .collect();
        assert_eq!(block.len(), 8);
        assert!(block.iter().map(|l| l.chars().count()).all_equal());
    }

    #[test]
    fn identity_row_and_column_are_unchanged() {
        let table = CayleyTable::new(&symmetric(3).unwrap(), 8).unwrap();
        for i in 0..table.order() {
            assert_eq!(table.product(0, i), LETTERS[i]);
            assert_eq!(table.product(i, 0), LETTERS[i]);
        }
    }

    #[test]
    fn s4_is_too_large() {
        let err = CayleyTable::new(&symmetric(4).unwrap(), 8).unwrap_err();
        assert!(matches!(err, TableError::TooLarge { order: 24, limit: 8 }));
    }

    #[test]
    fn limit_is_capped_at_the_alphabet() {
        let err = CayleyTable::new(&cyclic(9).unwrap(), 100).unwrap_err();
        assert!(matches!(err, TableError::TooLarge { order: 9, limit: 8 }));
        assert!(CayleyTable::new(&cyclic(4).unwrap(), 3).is_err());
    }
}
