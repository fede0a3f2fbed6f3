// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of a table")
}

fn offline_ok_flag() -> Arg {
    Arg::new("offline-ok")
        .long("offline-ok")
        .action(ArgAction::SetTrue)
        .help("Continue in offline demo mode without asking if the backend is unreachable")
}

fn credentials(cmd: Command) -> Command {
    cmd.arg(Arg::new("email").long("email").required(true))
        .arg(
            Arg::new("password")
                .long("password")
                .env("SMARTMONEY_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(offline_ok_flag())
}

pub fn build_cli() -> Command {
    Command::new("smartmoney")
        .about("SmartMoney: balance, transactions, subscriptions, savings and receipts from the terminal")
        .version(clap::crate_version!())
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Local state database (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .env("SMARTMONEY_API_URL")
                .help("Backend origin, e.g. http://127.0.0.1:8000"),
        )
        .subcommand(credentials(Command::new("login").about("Sign in")))
        .subcommand(
            credentials(Command::new("register").about("Create an account and sign in"))
                .arg(Arg::new("name").long("name").required(true).help("Full name")),
        )
        .subcommand(Command::new("logout").about("Forget the saved session"))
        .subcommand(Command::new("whoami").about("Show the saved session").arg(json_flag()))
        .subcommand(Command::new("demo").about("Start offline demo mode"))
        .subcommand(
            Command::new("dashboard")
                .about("Balance, recent transactions and savings goal")
                .arg(json_flag()),
        )
        .subcommand(Command::new("sync").about("Sync transactions from the linked bank"))
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["expense", "income"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("merchant").long("merchant").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .default_value("Food")
                                .help("Food, Transport, Bills, Shopping, Salary, Entertainment or Other"),
                        )
                        .arg(
                            Arg::new("other")
                                .long("other")
                                .help("Category text when --category Other"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("Recent transactions")
                        .arg(json_flag())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ),
        )
        .subcommand(Command::new("subs").about("Subscriptions").arg(json_flag()))
        .subcommand(Command::new("achievements").about("Achievements").arg(json_flag()))
        .subcommand(
            Command::new("chat").about("Ask the assistant").arg(
                Arg::new("message")
                    .required(true)
                    .num_args(1..)
                    .trailing_var_arg(true),
            ),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan a receipt and prefill a transaction")
                .arg(
                    Arg::new("file")
                        .required(true)
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("record")
                        .long("record")
                        .action(ArgAction::SetTrue)
                        .help("Record the prefilled transaction right away"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("savings")
                .about("Savings goal")
                .subcommand(Command::new("status").arg(json_flag()))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("amount").required(true))
                        .arg(
                            Arg::new("source")
                                .long("source")
                                .value_parser(["wallet", "external"])
                                .default_value("wallet"),
                        ),
                ),
        )
        .subcommand(
            Command::new("theme")
                .about("Theme preference")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set").arg(
                        Arg::new("theme")
                            .required(true)
                            .value_parser(["dark", "light"]),
                    ),
                )
                .subcommand(Command::new("toggle")),
        )
        .subcommand(
            Command::new("config")
                .about("Backend settings")
                .subcommand(Command::new("show"))
                .subcommand(Command::new("set-api-url").arg(Arg::new("url").required(true)))
                .subcommand(Command::new("reset-api-url")),
        )
}
