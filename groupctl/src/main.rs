/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

mod commands;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use groupctl::config::Config;
use groupctl::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

use crate::commands::orbit::OrbitCommand;
use crate::commands::product::ProductCommand;
use crate::commands::show::ShowCommand;
use crate::commands::table::TableCommand;

#[derive(Parser)]
#[command(about = "Build and inspect small finite groups")]
struct Cli {
    /// A YAML configuration file. Environment variables override its
    /// values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[clap(about = r#"Print a JSON summary of a group"#)]
    Show(ShowCommand),

    #[clap(about = r#"Print the Cayley table of a group"#)]
    Table(TableCommand),

    #[clap(about = r#"Print a JSON summary of the direct product of two groups"#)]
    Product(ProductCommand),

    #[clap(about = r#"Print the orbit and stabilizer of a group element"#)]
    Orbit(OrbitCommand),
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    init_logging();
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Show(command) => command.run(&config),
        Command::Table(command) => command.run(&config),
        Command::Product(command) => command.run(&config),
        Command::Orbit(command) => command.run(&config),
    }
}
