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
use groupctl::table::CayleyTable;

#[derive(clap::Args, Debug)]
pub struct TableCommand {
    /// The family the group belongs to.
    #[arg(value_enum)]
    family: Family,

    /// The degree of the group.
    n: usize,
}

struct Tabulate {
    limit: usize,
}

impl GroupVisitor for Tabulate {
    type Output = CayleyTable;

    fn visit<T: Member>(self, group: Group<T>) -> anyhow::Result<CayleyTable> {
        Ok(CayleyTable::new(&group, self.limit)?)
    }
}

impl TableCommand {
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let table = self.family.visit(
            self.n,
            config.max_order,
            Tabulate {
                limit: config.table_limit,
            },
        )?;
        print!("{}", table);
        Ok(())
    }
}
