// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{FakeGateway, network_down};
use smartmoney::error::{ClientError, GatewayError, ValidationError};
use smartmoney::mock;
use smartmoney::models::Sender;
use smartmoney::screens::achievements::AchievementsView;
use smartmoney::screens::chat::{CONNECTION_FAILED, ChatView, Delivery};
use smartmoney::screens::dashboard::DashboardView;
use smartmoney::screens::history::HistoryView;
use smartmoney::screens::subscriptions::SubscriptionsView;
use smartmoney::session::Identity;
use smartmoney::view::ViewState;

fn user() -> Identity {
    Identity::User("user-42".into())
}

#[test]
fn demo_identity_renders_mock_data_without_calls() {
    let fake = FakeGateway::new();

    let mut dash = DashboardView::new();
    assert_eq!(
        dash.refresh(&Identity::Demo, &fake),
        &ViewState::Degraded(mock::dashboard())
    );
    let mut history = HistoryView::new();
    assert_eq!(
        history.refresh(&Identity::Demo, &fake),
        &ViewState::Degraded(mock::transactions())
    );
    let mut subs = SubscriptionsView::new();
    assert_eq!(
        subs.refresh(&Identity::Demo, &fake),
        &ViewState::Degraded(mock::subscriptions())
    );
    let mut achievements = AchievementsView::new();
    assert_eq!(
        achievements.refresh(&Identity::Demo, &fake),
        &ViewState::Degraded(mock::achievements())
    );

    assert_eq!(fake.call_count(), 0);
    assert!(dash.controller().is_offline());
    assert_eq!(dash.greeting_name(), "John");
}

#[test]
fn placeholder_identity_shows_empty_states() {
    let fake = FakeGateway::new();
    let mut history = HistoryView::new();
    history.refresh(&Identity::Placeholder, &fake);
    let mut subs = SubscriptionsView::new();
    subs.refresh(&Identity::Placeholder, &fake);

    assert!(history.transactions().is_empty());
    assert!(subs.subscriptions().is_empty());
    assert!(!subs.controller().is_offline());
    assert_eq!(fake.call_count(), 0);
}

#[test]
fn unreachable_backend_degrades_to_mock_data() {
    let fake = FakeGateway::failing_with(network_down());
    let mut dash = DashboardView::new();
    dash.refresh(&user(), &fake);
    assert!(dash.controller().is_offline());
    assert_eq!(dash.balance(), Some(mock::DEMO_BALANCE));
    assert_eq!(fake.call_count(), 1);
}

#[test]
fn service_errors_fail_the_view() {
    let fake = FakeGateway::failing_with(GatewayError::Service("User not found".into()));
    let mut subs = SubscriptionsView::new();
    subs.refresh(&user(), &fake);
    assert_eq!(subs.controller().error(), Some("User not found"));
    assert!(subs.subscriptions().is_empty());
}

#[test]
fn live_dashboard_uses_first_name() {
    let fake = FakeGateway::new();
    let mut dash = DashboardView::new();
    dash.refresh(&user(), &fake);
    assert_eq!(dash.greeting_name(), "Ada");
    assert_eq!(dash.balance(), Some(1_000));
    assert!(!dash.controller().is_offline());
}

#[test]
fn history_reads_recent_transactions_from_dashboard() {
    let fake = FakeGateway::new();
    let mut history = HistoryView::new();
    history.refresh(&user(), &fake);
    assert_eq!(history.transactions(), common::live_transactions().as_slice());
    assert_eq!(*fake.calls.borrow(), vec!["dashboard"]);
}

#[test]
fn demo_bank_sync_credits_locally() {
    let fake = FakeGateway::new();
    let mut dash = DashboardView::new();
    dash.refresh(&Identity::Demo, &fake);
    let msg = dash.sync_bank(&Identity::Demo, &fake).unwrap();
    assert_eq!(msg, mock::DEMO_SYNC_MESSAGE);
    assert_eq!(
        dash.balance(),
        Some(mock::DEMO_BALANCE + mock::DEMO_SYNC_BONUS)
    );
    assert_eq!(fake.call_count(), 0);
}

#[test]
fn bank_sync_refreshes_on_success() {
    let fake = FakeGateway::new();
    let mut dash = DashboardView::new();
    dash.refresh(&user(), &fake);
    let msg = dash.sync_bank(&user(), &fake).unwrap();
    assert!(msg.starts_with("Successfully synced 3"));
    assert_eq!(*fake.calls.borrow(), vec!["dashboard", "sync_bank", "dashboard"]);
}

#[test]
fn bank_sync_failure_is_surfaced_without_refresh() {
    let fake = FakeGateway::new();
    let mut dash = DashboardView::new();
    dash.refresh(&user(), &fake);
    fake.fail_next(GatewayError::Service("User not found".into()));
    let err = dash.sync_bank(&user(), &fake).unwrap_err();
    assert_eq!(err.to_string(), "User not found");
    assert_eq!(*fake.calls.borrow(), vec!["dashboard", "sync_bank"]);
    assert_eq!(dash.balance(), Some(1_000));
}

#[test]
fn placeholder_cannot_sync() {
    let fake = FakeGateway::new();
    let mut dash = DashboardView::new();
    assert_eq!(
        dash.sync_bank(&Identity::Placeholder, &fake).unwrap_err(),
        ClientError::Invalid(ValidationError::NoSession)
    );
}

#[test]
fn subscription_total_and_achievement_consistency() {
    let fake = FakeGateway::new();
    let mut subs = SubscriptionsView::new();
    subs.refresh(&user(), &fake);
    assert_eq!(subs.monthly_total(), 29_500);

    let mut achievements = AchievementsView::new();
    achievements.refresh(&user(), &fake);
    assert_eq!(achievements.completed_count(), 1);
    let odd: Vec<_> = achievements
        .inconsistent()
        .iter()
        .map(|a| a.title.as_str())
        .collect();
    assert_eq!(odd, vec!["Streak Master"]);
}

#[test]
fn chat_in_demo_mode_answers_offline() {
    let fake = FakeGateway::new();
    let mut chat = ChatView::new();
    chat.input = "How much did I spend?".into();
    assert_eq!(chat.send(&Identity::Demo, &fake).unwrap(), Delivery::Offline);
    assert_eq!(chat.last_reply().unwrap().text, mock::OFFLINE_CHAT_REPLY);
    assert!(chat.input.is_empty());
    assert_eq!(fake.call_count(), 0);
}

#[test]
fn chat_round_trip_and_network_notice() {
    let fake = FakeGateway::new();
    let mut chat = ChatView::new();
    chat.input = "Hi".into();
    assert_eq!(chat.send(&user(), &fake).unwrap(), Delivery::Answered);
    assert_eq!(chat.last_reply().unwrap().text, "You asked: Hi");

    fake.fail_next(network_down());
    chat.input = "Still there?".into();
    assert_eq!(chat.send(&user(), &fake).unwrap(), Delivery::Offline);
    assert_eq!(chat.last_reply().unwrap().text, CONNECTION_FAILED);
    // greeting + 2 exchanges
    assert_eq!(chat.messages().len(), 5);
}

#[test]
fn chat_service_error_restores_the_input() {
    let fake = FakeGateway::failing_with(GatewayError::Service("quota exceeded".into()));
    let mut chat = ChatView::new();
    chat.input = "Budget tips?".into();
    assert!(chat.send(&user(), &fake).is_err());
    assert_eq!(chat.input, "Budget tips?");
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(chat.messages()[0].sender, Sender::Assistant);
}

#[test]
fn blank_chat_message_is_refused() {
    let fake = FakeGateway::new();
    let mut chat = ChatView::new();
    chat.input = "   ".into();
    assert_eq!(
        chat.send(&user(), &fake).unwrap_err(),
        ClientError::Invalid(ValidationError::EmptyMessage)
    );
    assert_eq!(fake.call_count(), 0);
}
