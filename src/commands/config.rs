// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::config::{Backend, Config, GoalMode, set_setting};
use crate::utils::pretty_table;

pub fn handle(conn: &Connection, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let key = sub.get_one::<String>("key").unwrap().trim();
            let value = sub.get_one::<String>("value").unwrap();
            set_setting(conn, key, value)?;
            println!("Set {} = {}", key, if key == "rest_key" { "****" } else { value.as_str() });
        }
        Some(("show", _)) => {
            let opt = |v: &Option<String>| v.clone().unwrap_or_else(|| "(unset)".into());
            let rows: Vec<Vec<String>> = vec![
                vec![
                    "backend".into(),
                    match cfg.backend {
                        Backend::Sqlite => "sqlite".into(),
                        Backend::Rest => "rest".into(),
                    },
                ],
                vec!["rest_url".into(), opt(&cfg.rest_url)],
                vec![
                    "rest_key".into(),
                    cfg.rest_key
                        .as_ref()
                        .map(|_| "****".to_string())
                        .unwrap_or_else(|| "(unset)".into()),
                ],
                vec!["webhook_url".into(), opt(&cfg.webhook_url)],
                vec![
                    "goal_mode".into(),
                    match cfg.goal_mode {
                        GoalMode::Local => "local".into(),
                        GoalMode::Remote => "remote".into(),
                    },
                ],
            ];
            println!("{}", pretty_table(&["Key", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
