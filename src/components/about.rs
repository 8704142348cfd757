//! Static about screen

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "TrendCast",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Stock Prediction Platform",
            Style::default().fg(theme.text_muted),
        )),
        Line::default(),
        Line::from(Span::styled(
            "TrendCast turns market signals into simple BUY, SELL, and HOLD calls with a confidence score for each, on both daily and hourly horizons.",
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "This is a demonstration build: every price, prediction, and history entry is fixture data, currency conversion uses a static table, and no order ever reaches a market.",
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Predictions are not financial advice. Always do your own research.",
            Style::default().fg(theme.warning),
        )),
    ];

    let about = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .style(Style::default().bg(theme.panel_bg)),
        );
    frame.render_widget(about, area);
}
