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
pub struct ShowCommand {
    /// The family the group belongs to.
    #[arg(value_enum)]
    family: Family,

    /// The degree: the modulus of a cyclic group, or the number of
    /// points a symmetric group permutes.
    n: usize,
}

struct Summarize;

impl GroupVisitor for Summarize {
    type Output = String;

    fn visit<T: Member>(self, group: Group<T>) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&GroupSummary::of(&group)?)?)
    }
}

impl ShowCommand {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let json = self.family.visit(self.n, config.max_order, Summarize)?;
        println!("{}", json);
        Ok(())
    }
}
