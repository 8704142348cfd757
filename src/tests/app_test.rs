//! Tests for application state: key handling, timers, and whole flows

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, ChatSender, LoginField};
use crate::navigation::Screen;
use crate::settings::Settings;
use crate::stocks::Horizon;
use crate::theme::ThemeMode;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app() -> App {
    App::new(&Settings::default())
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// An instant far enough in the future that every scheduled delay is due
fn later() -> Instant {
    Instant::now() + Duration::from_secs(10)
}

fn logged_in() -> App {
    let mut app = app();
    type_str(&mut app, "alice");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "secret");
    app.handle_key(key(KeyCode::Enter));
    app.tick(later());
    app
}

// ============================================================================
// LOGIN
// ============================================================================

#[test]
fn test_login_fields_take_typed_input() {
    let mut app = app();
    type_str(&mut app, "alice");
    assert_eq!(app.login.username, "alice");
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.login.focus, LoginField::Password);
    type_str(&mut app, "pw");
    assert_eq!(app.login.password, "pw");
}

#[test]
fn test_login_transition_is_delayed() {
    let mut app = app();
    type_str(&mut app, "alice");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "pw");
    app.handle_key(key(KeyCode::Enter));
    // still on the login screen until the simulated round-trip completes
    assert!(app.login.submitting);
    assert_eq!(app.screen, Screen::Login);
    app.tick(later());
    assert_eq!(app.screen, Screen::MarketSelection);
    assert_eq!(app.user_name, "alice");
}

#[test]
fn test_login_refuses_empty_fields_silently() {
    let mut app = app();
    type_str(&mut app, "alice");
    // password empty
    app.handle_key(key(KeyCode::Enter));
    assert!(!app.login.submitting);
    app.tick(later());
    assert_eq!(app.screen, Screen::Login);
}

// ============================================================================
// NAVIGATION FLOWS
// ============================================================================

#[test]
fn test_back_from_history_returns_to_stock_detail() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter)); // select first market
    assert_eq!(app.screen, Screen::StockList);
    app.handle_key(key(KeyCode::Enter)); // select first stock
    assert_eq!(app.screen, Screen::StockDetail);
    app.show_history();
    app.go_back();
    assert_eq!(app.screen, Screen::StockDetail);
}

#[test]
fn test_back_from_about_without_stock_returns_to_stock_list() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.show_about();
    app.go_back();
    assert_eq!(app.screen, Screen::StockList);
}

#[test]
fn test_back_from_history_without_context_returns_home() {
    let mut app = logged_in();
    app.show_history();
    app.go_back();
    assert_eq!(app.screen, Screen::MarketSelection);
}

#[test]
fn test_back_from_detail_clears_selected_stock() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    assert!(app.selected_stock.is_some());
    app.go_back();
    assert_eq!(app.screen, Screen::StockList);
    assert!(app.selected_stock.is_none());
}

#[test]
fn test_go_home_clears_selections() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.go_home();
    assert_eq!(app.screen, Screen::MarketSelection);
    assert!(app.selected_country.is_none());
    assert!(app.selected_stock.is_none());
}

#[test]
fn test_logout_clears_everything() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.logout();
    assert_eq!(app.screen, Screen::Login);
    assert!(app.user_name.is_empty());
    assert!(app.selected_country.is_none());
    assert!(app.selected_stock.is_none());
}

// ============================================================================
// STOCK LIST CONTROLS
// ============================================================================

#[test]
fn test_search_focus_routes_typed_text_to_query() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('/')));
    assert!(app.list.search_focused);
    type_str(&mut app, "apple");
    assert_eq!(app.list.search, "apple");
    assert_eq!(app.visible_stocks().len(), 1);
    app.handle_key(key(KeyCode::Esc));
    assert!(!app.list.search_focused);
}

#[test]
fn test_tab_toggles_list_horizon() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.list.horizon, Horizon::Daily);
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.list.horizon, Horizon::Hourly);
    // hourly confidence sort puts NVDA first, TSLA second
    assert_eq!(app.visible_stocks()[1].ticker, "TSLA");
}

#[test]
fn test_sort_and_filter_keys_cycle() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    let sort_before = app.list.sort;
    app.handle_key(key(KeyCode::Char('s')));
    assert_ne!(app.list.sort, sort_before);
    let filter_before = app.list.filter;
    app.handle_key(key(KeyCode::Char('f')));
    assert_ne!(app.list.filter, filter_before);
}

// ============================================================================
// DETAIL VIEW: ALERTS AND REFRESH
// ============================================================================

#[test]
fn test_alert_dialog_save_and_toggle_off() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    let ticker = app.selected_stock.as_ref().unwrap().ticker;

    app.handle_key(key(KeyCode::Char('a')));
    assert!(app.detail.dialog.is_some());
    app.handle_key(key(KeyCode::Right)); // 70 -> 75
    app.handle_key(key(KeyCode::Tab)); // daily -> hourly
    app.handle_key(key(KeyCode::Enter));
    assert!(app.detail.dialog.is_none());

    let alert = app.registry.active_alert_for(ticker).unwrap();
    assert_eq!(alert.threshold, 75);
    assert_eq!(alert.horizon, Horizon::Hourly);
    assert_eq!(app.active_toasts().len(), 1);

    // pressing 'a' again removes the existing alert instead of opening the dialog
    app.handle_key(key(KeyCode::Char('a')));
    assert!(app.detail.dialog.is_none());
    assert!(app.registry.alerts().is_empty());
}

#[test]
fn test_alert_dialog_escape_cancels() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('a')));
    app.handle_key(key(KeyCode::Esc));
    assert!(app.detail.dialog.is_none());
    assert!(app.registry.alerts().is_empty());
}

#[test]
fn test_refresh_completes_on_tick() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('r')));
    assert!(app.detail.refreshing);
    app.tick(later());
    assert!(!app.detail.refreshing);
}

#[test]
fn test_toasts_expire_after_display() {
    let mut app = logged_in();
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Enter));
    app.handle_key(key(KeyCode::Char('a')));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.active_toasts().len(), 1);
    app.tick(later());
    assert!(app.active_toasts().is_empty());
    // the notification stays in the feed, just marked read
    assert_eq!(app.registry.notifications().len(), 1);
}

// ============================================================================
// CHAT OVERLAY
// ============================================================================

#[test]
fn test_chat_welcome_sequence_arrives_staggered() {
    let mut app = logged_in();
    app.toggle_chat();
    assert!(app.chat.open);
    assert!(app.chat.typing);
    assert!(app.chat.messages.is_empty());
    app.tick(later());
    assert_eq!(app.chat.messages.len(), 4);
    assert!(!app.chat.typing);
}

#[test]
fn test_chat_reply_is_keyword_matched() {
    let mut app = logged_in();
    app.toggle_chat();
    app.tick(later());
    type_str(&mut app, "what is confidence?");
    app.handle_key(key(KeyCode::Enter));
    assert!(app.chat.typing);
    app.tick(later());
    let last = app.chat.messages.last().unwrap();
    assert_eq!(last.sender, ChatSender::Bot);
    assert!(last.text.contains("Confidence levels"));
}

#[test]
fn test_chat_faq_enter_on_empty_input_asks_selected_question() {
    let mut app = logged_in();
    app.toggle_chat();
    app.tick(later());
    let before = app.chat.messages.len();
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    app.tick(later());
    // question plus answer
    assert_eq!(app.chat.messages.len(), before + 2);
    assert_eq!(app.chat.messages[before].sender, ChatSender::User);
}

#[test]
fn test_logout_resets_chat_session() {
    let mut app = logged_in();
    app.toggle_chat();
    app.logout();
    assert!(!app.chat.open);
    assert!(!app.chat.opened_once);
    assert!(app.chat.messages.is_empty());
    // welcome replies scheduled before logout never arrive
    app.tick(later());
    assert!(app.chat.messages.is_empty());

    // the next session starts fresh, welcome sequence included
    type_str(&mut app, "bob");
    app.handle_key(key(KeyCode::Tab));
    type_str(&mut app, "pw");
    app.handle_key(key(KeyCode::Enter));
    app.tick(later());
    app.toggle_chat();
    app.tick(later());
    assert_eq!(app.chat.messages.len(), 4);
}

#[test]
fn test_chat_second_open_skips_welcome() {
    let mut app = logged_in();
    app.toggle_chat();
    app.tick(later());
    app.toggle_chat(); // close
    app.toggle_chat(); // reopen
    app.tick(later());
    assert_eq!(app.chat.messages.len(), 4);
}

// ============================================================================
// THEME
// ============================================================================

#[test]
fn test_theme_mode_flips_in_memory() {
    // persistence is covered by the settings tests; no config IO here
    let mut app = app();
    assert_eq!(app.theme_mode, ThemeMode::Dark);
    app.theme_mode = app.theme_mode.toggled();
    assert_eq!(app.theme_mode, ThemeMode::Light);
    assert_eq!(app.theme_mode.toggled(), ThemeMode::Dark);
}

#[test]
fn test_app_honors_saved_theme_preference() {
    let app = App::new(&Settings {
        theme: ThemeMode::Light,
    });
    assert_eq!(app.theme_mode, ThemeMode::Light);
}
