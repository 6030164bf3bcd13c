// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn tx_add() -> Command {
    Command::new("add")
        .about("Record an income or expense")
        .arg(
            Arg::new("kind")
                .long("kind")
                .short('k')
                .help("income|expense (default expense)"),
        )
        .arg(Arg::new("description").long("description").short('d'))
        .arg(
            Arg::new("category")
                .long("category")
                .short('c')
                .help("Predefined or new category"),
        )
        .arg(Arg::new("account").long("account").short('a'))
        .arg(
            Arg::new("date")
                .long("date")
                .help("YYYY-MM-DD (default today)"),
        )
        .arg(Arg::new("amount").long("amount").short('m'))
        .arg(Arg::new("method").long("method").short('p').help("Payment method"))
        .arg(Arg::new("notes").long("notes"))
        .arg(
            Arg::new("receipt")
                .long("receipt")
                .help("Receipt file; only its name is stored"),
        )
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personal finance tracking, dashboard reports and savings goals")
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(tx_add())
                .subcommand(json_args(
                    Command::new("list").about("List transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                ))
                .subcommand(Command::new("options").about("Show predefined categories, accounts and methods")),
        )
        .subcommand(json_args(
            Command::new("activity").about("Latest five transactions"),
        ))
        .subcommand(
            Command::new("report")
                .about("Dashboard projections")
                .subcommand(json_args(
                    Command::new("dashboard").about("Summary cards and all projections"),
                ))
                .subcommand(json_args(
                    Command::new("categories").about("Expenses by category"),
                ))
                .subcommand(json_args(
                    Command::new("monthly").about("Income vs expense per month"),
                ))
                .subcommand(json_args(
                    Command::new("balance").about("Running balance over time"),
                ))
                .subcommand(json_args(
                    Command::new("accounts").about("Per-account breakdown"),
                )),
        )
        .subcommand(json_args(
            Command::new("goal")
                .about("Savings goal calculator")
                .after_help(
                    "A query that cannot be processed prints a message on stderr and still exits with status 0.",
                )
                .arg(
                    Arg::new("query")
                        .help("e.g. \"Quiero ahorrar 50 millones para una casa en 3 años\""),
                )
                .arg(
                    Arg::new("remote")
                        .long("remote")
                        .action(ArgAction::SetTrue)
                        .help("Ask the configured webhook instead of the local parser"),
                )
                .arg(
                    Arg::new("local")
                        .long("local")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("remote"),
                )
                .arg(
                    Arg::new("examples")
                        .long("examples")
                        .action(ArgAction::SetTrue)
                        .help("Show example queries"),
                ),
        ))
        .subcommand(
            Command::new("import")
                .about("Import data")
                .subcommand(
                    Command::new("transactions")
                        .about("Import transactions from CSV")
                        .arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("transactions")
                        .about("Export transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(Command::new("doctor").about("Check data and configuration"))
}
