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
use groupctl::summary::OrbitSummary;

#[derive(clap::Args, Debug)]
pub struct OrbitCommand {
    /// The family the group belongs to.
    #[arg(value_enum)]
    family: Family,

    /// The degree of the group.
    n: usize,

    /// The element whose orbit to compute: a residue such as `3`, or a
    /// permutation such as `1,2,0`.
    point: String,
}

struct Orbit {
    point: String,
}

impl GroupVisitor for Orbit {
    type Output = String;

    fn visit<T: Member>(self, group: Group<T>) -> anyhow::Result<String> {
        let point = T::parse_arg(&self.point)?;
        Ok(serde_json::to_string_pretty(&OrbitSummary::of(&group, point)?)?)
    }
}

impl OrbitCommand {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let json = self.family.visit(
            self.n,
            config.max_order,
            Orbit { point: self.point },
        )?;
        println!("{}", json);
        Ok(())
    }
}
