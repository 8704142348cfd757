//! Root application state
//!
//! Single owner of every piece of mutable state: the current screen, the
//! selected market and stock, the alert registry, the chat overlay, and the
//! tick-driven queue of simulated delays. Views receive `&App` and render;
//! all mutation funnels through `handle_key` and `tick`.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, info};
use uuid::Uuid;

use crate::alerts::{AlertRegistry, Severity};
use crate::chat::{self, Faq, FAQS, WELCOME_MESSAGES};
use crate::keyboard::{global_action, KeyboardAction};
use crate::market::{self, Country};
use crate::navigation::{back_target, Screen};
use crate::settings::Settings;
use crate::stocks::{self, Horizon, PredictionFilter, SortKey, Stock};
use crate::theme::{Theme, ThemeMode};

/// Simulated login round-trip
const LOGIN_DELAY: Duration = Duration::from_millis(1000);
/// Simulated refresh round-trip on the detail view
const REFRESH_DELAY: Duration = Duration::from_millis(1500);
/// Simulated bot typing time per reply
const CHAT_REPLY_DELAY: Duration = Duration::from_millis(1000);
/// Gap between staggered welcome messages
const WELCOME_STAGGER: Duration = Duration::from_millis(400);
/// How long a toast stays on screen before it counts as read
const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Focused field on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

/// Login screen state
#[derive(Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub submitting: bool,
}

/// Market-selection screen state
#[derive(Debug, Default)]
pub struct MarketState {
    pub search: String,
    pub search_focused: bool,
    pub selected: usize,
}

/// Stock-list screen state
#[derive(Debug, Default)]
pub struct StockListState {
    pub search: String,
    pub search_focused: bool,
    pub sort: SortKey,
    pub filter: PredictionFilter,
    pub horizon: Horizon,
    pub selected: usize,
}

/// Alert dialog state on the detail view
#[derive(Debug, Clone, Copy)]
pub struct AlertDialog {
    pub horizon: Horizon,
    pub threshold: u8,
}

impl Default for AlertDialog {
    fn default() -> Self {
        Self {
            horizon: Horizon::Daily,
            threshold: 70,
        }
    }
}

/// Stock-detail screen state
#[derive(Debug, Default)]
pub struct DetailState {
    pub refreshing: bool,
    pub dialog: Option<AlertDialog>,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

/// One chat bubble
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

/// Chat overlay state
#[derive(Debug, Default)]
pub struct ChatState {
    pub open: bool,
    pub opened_once: bool,
    pub input: String,
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
    pub selected_faq: usize,
}

/// A state update postponed by a simulated delay
#[derive(Debug, Clone)]
enum PendingKind {
    LoginComplete,
    RefreshComplete,
    ChatReply(String),
    ExpireToast(Uuid),
}

#[derive(Debug)]
struct PendingAction {
    kind: PendingKind,
    fires_at: Instant,
}

/// Main application state
pub struct App {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub user_name: String,
    pub selected_country: Option<Country>,
    pub selected_stock: Option<Stock>,

    pub login: LoginForm,
    pub market: MarketState,
    pub list: StockListState,
    pub detail: DetailState,
    pub chat: ChatState,

    pub registry: AlertRegistry,
    countries: Vec<Country>,
    stocks: Vec<Stock>,
    pending: Vec<PendingAction>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            screen: Screen::Login,
            theme_mode: settings.theme,
            user_name: String::new(),
            selected_country: None,
            selected_stock: None,
            login: LoginForm::default(),
            market: MarketState::default(),
            list: StockListState::default(),
            detail: DetailState::default(),
            chat: ChatState::default(),
            registry: AlertRegistry::new(),
            countries: market::countries(),
            stocks: stocks::catalog(),
            pending: Vec::new(),
            should_quit: false,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }

    /// Countries matching the market-selection search box
    pub fn visible_countries(&self) -> Vec<Country> {
        market::search(&self.countries, &self.market.search)
    }

    /// Stocks after the list view's filter + sort pipeline
    pub fn visible_stocks(&self) -> Vec<Stock> {
        stocks::filter_and_sort(
            &self.stocks,
            &self.list.search,
            self.list.filter,
            self.list.sort,
            self.list.horizon,
        )
    }

    /// Notifications currently showing as toasts
    pub fn active_toasts(&self) -> Vec<&crate::alerts::Notification> {
        self.registry
            .notifications()
            .iter()
            .filter(|n| !n.read)
            .collect()
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.chat.open {
            self.handle_chat_key(key);
            return;
        }
        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::MarketSelection => self.handle_market_key(key),
            Screen::StockList => self.handle_stock_list_key(key),
            Screen::StockDetail => self.handle_detail_key(key),
            Screen::History | Screen::About => self.handle_global(key),
        }
    }

    fn handle_global(&mut self, key: KeyEvent) {
        let Some(action) = global_action(key) else {
            return;
        };
        match action {
            KeyboardAction::GoHome => self.go_home(),
            KeyboardAction::ShowHistory => self.show_history(),
            KeyboardAction::ShowAbout => self.show_about(),
            KeyboardAction::ToggleTheme => self.toggle_theme(),
            KeyboardAction::ToggleChat => self.toggle_chat(),
            KeyboardAction::Logout => self.logout(),
            KeyboardAction::Quit => self.should_quit = true,
            KeyboardAction::Back => self.go_back(),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.login.submitting {
            return;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.login.focus = match self.login.focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Backspace => {
                match self.login.focus {
                    LoginField::Username => self.login.username.pop(),
                    LoginField::Password => self.login.password.pop(),
                };
            }
            KeyCode::Char(c) => match self.login.focus {
                LoginField::Username => self.login.username.push(c),
                LoginField::Password => self.login.password.push(c),
            },
            _ => {}
        }
    }

    fn handle_market_key(&mut self, key: KeyEvent) {
        if self.market.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.market.search_focused = false,
                KeyCode::Backspace => {
                    self.market.search.pop();
                    self.market.selected = 0;
                }
                KeyCode::Char(c) => {
                    self.market.search.push(c);
                    self.market.selected = 0;
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('/') => self.market.search_focused = true,
            KeyCode::Up => self.market.selected = self.market.selected.saturating_sub(1),
            KeyCode::Down => {
                let len = self.visible_countries().len();
                if len > 0 && self.market.selected + 1 < len {
                    self.market.selected += 1;
                }
            }
            KeyCode::Enter => {
                let countries = self.visible_countries();
                if let Some(country) = countries.get(self.market.selected) {
                    self.select_country(country.clone());
                }
            }
            _ => self.handle_global(key),
        }
    }

    fn handle_stock_list_key(&mut self, key: KeyEvent) {
        if self.list.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.list.search_focused = false,
                KeyCode::Backspace => {
                    self.list.search.pop();
                    self.list.selected = 0;
                }
                KeyCode::Char(c) => {
                    self.list.search.push(c);
                    self.list.selected = 0;
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('/') => self.list.search_focused = true,
            KeyCode::Char('s') => {
                self.list.sort = self.list.sort.next();
                self.list.selected = 0;
            }
            KeyCode::Char('f') => {
                self.list.filter = self.list.filter.next();
                self.list.selected = 0;
            }
            KeyCode::Tab => self.list.horizon = self.list.horizon.toggled(),
            KeyCode::Up => self.list.selected = self.list.selected.saturating_sub(1),
            KeyCode::Down => {
                let len = self.visible_stocks().len();
                if len > 0 && self.list.selected + 1 < len {
                    self.list.selected += 1;
                }
            }
            KeyCode::Enter => {
                let visible = self.visible_stocks();
                if let Some(stock) = visible.get(self.list.selected) {
                    self.select_stock(stock.clone());
                }
            }
            _ => self.handle_global(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        if let Some(mut dialog) = self.detail.dialog {
            match key.code {
                KeyCode::Esc => self.detail.dialog = None,
                KeyCode::Enter => self.save_alert(dialog),
                KeyCode::Tab | KeyCode::Char('h') => {
                    dialog.horizon = dialog.horizon.toggled();
                    self.detail.dialog = Some(dialog);
                }
                KeyCode::Left => {
                    dialog.threshold = dialog.threshold.saturating_sub(5).max(1);
                    self.detail.dialog = Some(dialog);
                }
                KeyCode::Right => {
                    dialog.threshold = (dialog.threshold + 5).min(100);
                    self.detail.dialog = Some(dialog);
                }
                _ => {}
            }
            return;
        }
        match key.code {
            KeyCode::Char('r') => self.refresh_detail(),
            KeyCode::Char('a') => self.toggle_alert(),
            _ => self.handle_global(key),
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.chat.open = false,
            KeyCode::Enter => {
                if self.chat.input.trim().is_empty() {
                    let faq = FAQS[self.chat.selected_faq.min(FAQS.len() - 1)];
                    self.ask_faq(faq);
                } else {
                    let question = std::mem::take(&mut self.chat.input);
                    self.send_chat_message(question);
                }
            }
            KeyCode::Up => self.chat.selected_faq = self.chat.selected_faq.saturating_sub(1),
            KeyCode::Down => {
                if self.chat.selected_faq + 1 < FAQS.len() {
                    self.chat.selected_faq += 1;
                }
            }
            KeyCode::Backspace => {
                self.chat.input.pop();
            }
            KeyCode::Char(c) => self.chat.input.push(c),
            _ => {}
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Demo credential check: both fields non-empty, nothing else
    fn submit_login(&mut self) {
        if self.login.username.is_empty() || self.login.password.is_empty() {
            debug!("login refused: empty credential field");
            return;
        }
        self.login.submitting = true;
        self.schedule(PendingKind::LoginComplete, LOGIN_DELAY);
    }

    pub fn select_country(&mut self, country: Country) {
        info!(code = country.code, "market selected");
        self.selected_country = Some(country);
        self.list = StockListState::default();
        self.screen = Screen::StockList;
    }

    pub fn select_stock(&mut self, stock: Stock) {
        info!(ticker = stock.ticker, "stock selected");
        self.selected_stock = Some(stock);
        self.detail = DetailState::default();
        self.screen = Screen::StockDetail;
    }

    pub fn show_history(&mut self) {
        self.screen = Screen::History;
    }

    pub fn show_about(&mut self) {
        self.screen = Screen::About;
    }

    pub fn go_home(&mut self) {
        self.selected_stock = None;
        self.selected_country = None;
        self.screen = Screen::MarketSelection;
    }

    pub fn logout(&mut self) {
        info!("logout");
        self.user_name.clear();
        self.selected_country = None;
        self.selected_stock = None;
        self.login = LoginForm::default();
        // the chat session ends with the login session
        self.chat = ChatState::default();
        self.pending
            .retain(|p| !matches!(p.kind, PendingKind::ChatReply(_)));
        self.screen = Screen::Login;
    }

    /// Screen-specific back navigation
    pub fn go_back(&mut self) {
        match self.screen {
            Screen::Login => self.should_quit = true,
            Screen::MarketSelection => {}
            Screen::StockList => {
                self.selected_country = None;
                self.screen = Screen::MarketSelection;
            }
            Screen::StockDetail => {
                self.selected_stock = None;
                self.screen = Screen::StockList;
            }
            Screen::History | Screen::About => {
                self.screen = back_target(
                    self.selected_stock.is_some(),
                    self.selected_country.is_some(),
                );
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
        let settings = Settings {
            theme: self.theme_mode,
        };
        if let Err(e) = settings.save() {
            debug!(error = %e, "could not persist theme preference");
        }
    }

    // =========================================================================
    // Detail view actions
    // =========================================================================

    fn refresh_detail(&mut self) {
        if self.detail.refreshing {
            return;
        }
        self.detail.refreshing = true;
        self.schedule(PendingKind::RefreshComplete, REFRESH_DELAY);
    }

    /// Remove the active alert for the current stock, or open the dialog to
    /// create one. The one-alert-per-ticker convention lives here, not in
    /// the registry.
    fn toggle_alert(&mut self) {
        let Some(ticker) = self.selected_stock.as_ref().map(|s| s.ticker.to_string()) else {
            return;
        };
        if let Some(existing) = self.registry.active_alert_for(&ticker) {
            let id = existing.id;
            self.registry.remove(id);
            self.push_toast(
                "Alert removed successfully - You will no longer receive SMS/Email notifications",
                Severity::Success,
            );
        } else {
            self.detail.dialog = Some(AlertDialog::default());
        }
    }

    fn save_alert(&mut self, dialog: AlertDialog) {
        let Some(ticker) = self.selected_stock.as_ref().map(|s| s.ticker.to_string()) else {
            return;
        };
        self.registry.add(&ticker, dialog.horizon, dialog.threshold);
        self.detail.dialog = None;
        self.push_toast(
            "Alert set successfully! You will receive SMS/Email notifications when conditions are met.",
            Severity::Success,
        );
    }

    // =========================================================================
    // Chat overlay
    // =========================================================================

    pub fn toggle_chat(&mut self) {
        self.chat.open = !self.chat.open;
        if self.chat.open && !self.chat.opened_once {
            self.chat.opened_once = true;
            self.chat.typing = true;
            for (i, message) in WELCOME_MESSAGES.iter().enumerate() {
                self.schedule(
                    PendingKind::ChatReply(message.to_string()),
                    WELCOME_STAGGER * (i as u32 + 1),
                );
            }
        }
    }

    fn ask_faq(&mut self, faq: Faq) {
        self.chat.messages.push(ChatMessage {
            sender: ChatSender::User,
            text: faq.question.to_string(),
        });
        self.chat.typing = true;
        self.schedule(
            PendingKind::ChatReply(faq.answer.to_string()),
            CHAT_REPLY_DELAY,
        );
    }

    fn send_chat_message(&mut self, question: String) {
        let reply = chat::smart_response(&question);
        self.chat.messages.push(ChatMessage {
            sender: ChatSender::User,
            text: question,
        });
        self.chat.typing = true;
        self.schedule(PendingKind::ChatReply(reply.to_string()), CHAT_REPLY_DELAY);
    }

    // =========================================================================
    // Timers
    // =========================================================================

    fn push_toast(&mut self, message: &str, severity: Severity) {
        let id = self.registry.notify(message, severity);
        self.schedule(PendingKind::ExpireToast(id), TOAST_LIFETIME);
    }

    fn schedule(&mut self, kind: PendingKind, delay: Duration) {
        self.pending.push(PendingAction {
            kind,
            fires_at: Instant::now() + delay,
        });
    }

    /// Complete every simulated delay that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        let mut due: Vec<PendingAction> = Vec::new();
        self.pending.retain_mut(|action| {
            if action.fires_at <= now {
                due.push(PendingAction {
                    kind: action.kind.clone(),
                    fires_at: action.fires_at,
                });
                false
            } else {
                true
            }
        });
        due.sort_by_key(|a| a.fires_at);

        for action in due {
            match action.kind {
                PendingKind::LoginComplete => {
                    self.user_name = self.login.username.clone();
                    self.login.submitting = false;
                    self.screen = Screen::MarketSelection;
                    info!(user = %self.user_name, "login complete");
                }
                PendingKind::RefreshComplete => {
                    self.detail.refreshing = false;
                }
                PendingKind::ChatReply(text) => {
                    self.chat.messages.push(ChatMessage {
                        sender: ChatSender::Bot,
                        text,
                    });
                    self.chat.typing = self
                        .pending
                        .iter()
                        .any(|p| matches!(p.kind, PendingKind::ChatReply(_)));
                }
                PendingKind::ExpireToast(id) => {
                    self.registry.mark_read(id);
                }
            }
        }
    }
}
