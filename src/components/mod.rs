//! Screen rendering
//!
//! One module per screen plus the shared chrome (header, toasts, chat
//! overlay). Everything renders from `&App`; no module here mutates state.

mod about;
mod chatbot;
mod header;
mod history_view;
mod login;
mod market_selection;
mod stock_detail;
mod stock_list;
mod toasts;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::keyboard;
use crate::navigation::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );

    if app.screen == Screen::Login {
        login::render(frame, app, frame.area());
        toasts::render(frame, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(5),    // body
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    header::render(frame, app, chunks[0]);

    match app.screen {
        Screen::Login => unreachable!("login handled above"),
        Screen::MarketSelection => market_selection::render(frame, app, chunks[1]),
        Screen::StockList => stock_list::render(frame, app, chunks[1]),
        Screen::StockDetail => stock_detail::render(frame, app, chunks[1]),
        Screen::History => history_view::render(frame, app, chunks[1]),
        Screen::About => about::render(frame, app, chunks[1]),
    }

    let hints = Paragraph::new(keyboard::hint_line())
        .style(Style::default().fg(theme.text_muted));
    frame.render_widget(hints, chunks[2]);

    if app.chat.open {
        chatbot::render(frame, app);
    }
    toasts::render(frame, app);
}

/// A fixed-size rect centered in `area`, clamped to fit
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
