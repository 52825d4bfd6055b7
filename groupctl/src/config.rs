/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 * All rights reserved.
 *
 * This source code is licensed under the BSD-style license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Configuration for the `groupctl` binary.
//!
//! Values come from, in increasing priority: built-in defaults, an
//! optional YAML file, and environment variables.

use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::table::LETTERS;

/// Environment variable overriding [`Config::max_order`].
pub const MAX_ORDER_ENV: &str = "GROUPCTL_MAX_ORDER";

/// Environment variable overriding [`Config::table_limit`].
pub const TABLE_LIMIT_ENV: &str = "GROUPCTL_TABLE_LIMIT";

/// Environment variable holding the log filter, consulted when
/// `RUST_LOG` is unset. Logging is set up before the configuration is
/// read, so the filter is not part of [`Config`].
pub const LOG_ENV: &str = "GROUPCTL_LOG";

/// Limits the binary applies before doing expensive work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The largest group the binary will construct. Construction is
    /// cubic in the order.
    pub max_order: usize,
    /// The largest group that `table` will print.
    pub table_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_order: 120,
            table_limit: LETTERS.len(),
        }
    }
}

impl Config {
    /// Load `path` and then apply the process environment on top.
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, anyhow::Error> {
        let config = match path {
            Some(path) => from_yaml(path)?,
            None => Self::default(),
        };
        Ok(config.with_env(|name| std::env::var(name).ok()))
    }

    /// Override fields from `lookup`, which maps an environment variable
    /// name to its value. Values that fail to parse are logged and
    /// ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        override_from(&lookup, MAX_ORDER_ENV, &mut self.max_order);
        override_from(&lookup, TABLE_LIMIT_ENV, &mut self.table_limit);
        tracing::debug!(
            max_order = self.max_order,
            table_limit = self.table_limit,
            "loaded configuration"
        );
        self
    }
}

fn override_from<T>(lookup: &impl Fn(&str) -> Option<String>, env_var: &str, field: &mut T)
where
    T: FromStr,
    T::Err: Display,
{
    let Some(val) = lookup(env_var) else {
        return;
    };
    match val.parse() {
        Ok(parsed) => *field = parsed,
        Err(e) => {
            tracing::error!(
                "failed to override config from value \"{}\" in ${}: {}",
                val,
                env_var,
                e
            );
        }
    }
}

/// Read a configuration from a YAML file. Missing keys take their
/// default values.
pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Config, anyhow::Error> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Save a configuration to a YAML file.
pub fn to_yaml<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), anyhow::Error> {
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(path, yaml)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use indoc::indoc;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_order, 120);
        assert_eq!(config.table_limit, 8);
    }

    #[test]
    fn env_overrides_defaults() {
        let config = Config::default().with_env(env(&[
            (MAX_ORDER_ENV, "24"),
            (TABLE_LIMIT_ENV, "4"),
            ("GROUPCTL_UNRELATED", "1"),
        ]));
        assert_eq!(
            config,
            Config {
                max_order: 24,
                table_limit: 4,
            }
        );
    }

    #[test]
    fn unparseable_env_keeps_the_previous_value() {
        let config = Config::default().with_env(env(&[(MAX_ORDER_ENV, "lots")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn yaml_fills_missing_keys_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            indoc! {"
                max_order: 720
            "}
        )
        .unwrap();

        let config = from_yaml(file.path()).unwrap();
        assert_eq!(config.max_order, 720);
        assert_eq!(config.table_limit, 8);
    }

    #[test]
    fn yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("groupctl.yaml");
        let config = Config {
            max_order: 6,
            table_limit: 6,
        };
        to_yaml(&config, &path).unwrap();
        assert_eq!(from_yaml(&path).unwrap(), config);
    }

    #[test]
    fn yaml_errors_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_order: [1, 2]").unwrap();
        assert!(from_yaml(file.path()).is_err());
        assert!(from_yaml(file.path().with_extension("missing")).is_err());
    }
}
