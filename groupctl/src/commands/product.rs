/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

use algebra::Group;
use groupctl::config::Config;
use groupctl::families::Family;
use groupctl::families::GroupVisitor;
use groupctl::families::Member;
use groupctl::summary::GroupSummary;

#[derive(clap::Args, Debug)]
pub struct ProductCommand {
    /// The family of the left factor.
    #[arg(value_enum)]
    left: Family,

    /// The degree of the left factor.
    n: usize,

    /// The family of the right factor.
    #[arg(value_enum)]
    right: Family,

    /// The degree of the right factor.
    m: usize,
}

/// Builds the right factor once the left one is known.
struct WithLeft {
    right: Family,
    m: usize,
    max_order: usize,
}

impl GroupVisitor for WithLeft {
    type Output = String;

    fn visit<T: Member>(self, left: Group<T>) -> anyhow::Result<String> {
        // The limit bounds the product, not each factor.
        let max_order = self.max_order / left.size().max(1);
        self.right.visit(self.m, max_order, WithRight { left })
    }
}

struct WithRight<T> {
    left: Group<T>,
}

impl<T: Member> GroupVisitor for WithRight<T> {
    type Output = String;

    fn visit<U: Member>(self, right: Group<U>) -> anyhow::Result<String> {
        let product = self.left.product(&right)?;
        Ok(serde_json::to_string_pretty(&GroupSummary::of(&product)?)?)
    }
}

impl ProductCommand {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let json = self.left.visit(
            self.n,
            config.max_order,
            WithLeft {
                right: self.right,
                m: self.m,
                max_order: config.max_order,
            },
        )?;
        println!("{}", json);
        Ok(())
    }
}
