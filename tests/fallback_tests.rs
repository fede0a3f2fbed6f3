// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use smartmoney::error::GatewayError;
use smartmoney::fallback::{Resolved, resolve};
use smartmoney::session::Identity;
use smartmoney::view::{ViewController, ViewState};
use std::cell::Cell;

#[test]
fn demo_short_circuits_without_calling() {
    let called = Cell::new(false);
    let out = resolve(
        &Identity::Demo,
        || vec!["mock"],
        |_| {
            called.set(true);
            Ok(vec!["live"])
        },
    )
    .unwrap();
    assert_eq!(out, Resolved::Degraded(vec!["mock"]));
    assert!(!called.get());
}

#[test]
fn network_errors_are_masked_but_service_errors_are_not() {
    let user = Identity::User("u1".into());
    let degraded = resolve(&user, || 7, |_| Err(GatewayError::Network("refused".into())));
    assert_eq!(degraded, Ok(Resolved::Degraded(7)));

    let failed = resolve(
        &user,
        || 7,
        |_| Err::<i32, _>(GatewayError::Service("Email already registered".into())),
    );
    assert_eq!(
        failed,
        Err(GatewayError::Service("Email already registered".into()))
    );

    let decode = resolve(&user, || 7, |_| Err::<i32, _>(GatewayError::Decode("eof".into())));
    assert!(decode.is_err());
}

#[test]
fn live_calls_receive_the_user_id() {
    let out = resolve(
        &Identity::User("abc".into()),
        String::new,
        |id| Ok(format!("hello {}", id)),
    );
    assert_eq!(out, Ok(Resolved::Live("hello abc".to_string())));
}

#[test]
fn placeholder_is_inert() {
    let out: Result<Resolved<i32>, _> =
        resolve(&Identity::Placeholder, || 1, |_| panic!("must not call"));
    assert_eq!(out, Ok(Resolved::Inert));
}

#[test]
fn latest_initiated_fetch_wins() {
    let mut view: ViewController<Vec<&str>> = ViewController::new();
    let first = view.begin();
    let second = view.begin();

    assert!(view.finish(second, Ok(Resolved::Live(vec!["fresh"]))));
    assert!(!view.finish(first, Ok(Resolved::Live(vec!["stale"]))));
    assert_eq!(view.state(), &ViewState::Loaded(vec!["fresh"]));
}

#[test]
fn stale_failure_does_not_clobber_fresh_data() {
    let mut view: ViewController<Vec<u8>> = ViewController::new();
    let first = view.begin();
    let second = view.begin();
    view.finish(second, Ok(Resolved::Degraded(vec![1])));
    view.finish(first, Err(GatewayError::Service("late".into())));
    assert!(view.is_offline());
    assert_eq!(view.data(), Some(&vec![1]));
}

#[test]
fn disposed_views_ignore_late_responses() {
    let mut view: ViewController<Vec<u8>> = ViewController::new();
    let ticket = view.begin();
    view.dispose();
    assert!(!view.finish(ticket, Ok(Resolved::Live(vec![9]))));
    assert!(view.is_disposed());
    assert!(view.data().is_none());
}

#[test]
fn spinner_only_without_prior_data() {
    let mut view: ViewController<Vec<u8>> = ViewController::new();
    assert_eq!(view.state(), &ViewState::Idle);
    let t = view.begin();
    assert!(view.shows_spinner());
    view.finish(t, Ok(Resolved::Live(vec![1, 2, 3])));

    view.begin();
    assert!(!view.shows_spinner());
    assert_eq!(view.data(), Some(&vec![1, 2, 3]));
}
