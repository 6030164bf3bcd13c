// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finboard::{cli, commands, config::Config, db, logging, store};

fn main() -> Result<()> {
    logging::init();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let cfg = Config::load(&conn)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("config", sub)) => commands::config::handle(&conn, &cfg, sub)?,
        Some(("goal", sub)) => commands::goal::handle(&cfg, sub)?,
        Some((name, sub)) => {
            let store = store::open_store(&cfg, conn)?;
            let store = &*store;
            match name {
                "tx" => commands::transactions::handle(store, sub)?,
                "activity" => commands::transactions::activity(store, sub)?,
                "report" => commands::reports::handle(store, sub)?,
                "import" => commands::importer::handle(store, sub)?,
                "export" => commands::exporter::handle(store, sub)?,
                "doctor" => commands::doctor::handle(store, &cfg)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
