// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::FakeGateway;
use smartmoney::context::AppContext;
use smartmoney::error::GatewayError;
use smartmoney::savings::DEFAULT_SAVED;
use smartmoney::{cli, commands, config, db};
use std::path::PathBuf;
use std::rc::Rc;

#[test]
fn tx_add_defaults_to_expense_food() {
    let matches = cli::build_cli().get_matches_from([
        "smartmoney",
        "tx",
        "add",
        "--amount",
        "2500",
        "--merchant",
        "Uber",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("add", add_m)) = tx_m.subcommand() else {
        panic!("no add subcommand");
    };
    assert_eq!(add_m.get_one::<String>("type").unwrap(), "expense");
    assert_eq!(add_m.get_one::<String>("category").unwrap(), "Food");
}

#[test]
fn global_db_flag_applies_after_subcommand() {
    let matches = cli::build_cli().get_matches_from([
        "smartmoney",
        "savings",
        "add",
        "5000",
        "--source",
        "external",
        "--db",
        "/tmp/sm.sqlite",
    ]);
    assert_eq!(
        matches.get_one::<PathBuf>("db"),
        Some(&PathBuf::from("/tmp/sm.sqlite"))
    );
}

#[test]
fn chat_joins_words() {
    let matches =
        cli::build_cli().get_matches_from(["smartmoney", "chat", "how", "much", "on", "food?"]);
    let Some(("chat", chat_m)) = matches.subcommand() else {
        panic!("no chat subcommand");
    };
    let words: Vec<&String> = chat_m.get_many::<String>("message").unwrap().collect();
    assert_eq!(words.len(), 4);
}

#[test]
fn bad_funding_source_is_rejected() {
    let res = cli::build_cli().try_get_matches_from([
        "smartmoney",
        "savings",
        "add",
        "5000",
        "--source",
        "piggybank",
    ]);
    assert!(res.is_err());
}

#[test]
fn api_url_resolution_order() {
    let conn = db::open_in_memory().unwrap();
    assert_eq!(config::resolve_api_url(None, &conn), config::DEFAULT_API_URL);

    config::set_api_url(&conn, "https://api.smartmoney.example/").unwrap();
    assert_eq!(
        config::resolve_api_url(None, &conn),
        "https://api.smartmoney.example"
    );
    assert_eq!(
        config::resolve_api_url(Some("http://localhost:9000/"), &conn),
        "http://localhost:9000"
    );

    config::reset_api_url(&conn).unwrap();
    assert_eq!(config::resolve_api_url(None, &conn), config::DEFAULT_API_URL);
    assert!(config::set_api_url(&conn, "ftp://nope").is_err());
}

#[test]
fn savings_add_reports_a_failed_debit() {
    let fake = Rc::new(FakeGateway::new());
    let mut ctx = AppContext::new(db::open_in_memory().unwrap(), Box::new(Rc::clone(&fake)));
    ctx.login("ada@example.com", "secret", || false).unwrap();
    fake.fail_next(GatewayError::Service("Insufficient funds".into()));

    let matches = cli::build_cli().get_matches_from(["smartmoney", "savings", "add", "5000"]);
    let Some(("savings", savings_m)) = matches.subcommand() else {
        panic!("no savings subcommand");
    };
    let err = commands::savings::handle(&ctx, savings_m).unwrap_err();
    assert_eq!(err.to_string(), "Insufficient funds");
    assert_eq!(ctx.savings().saved(), DEFAULT_SAVED);
}
