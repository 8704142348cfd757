//! Top chrome bar: brand, current screen, user, market, unread count

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::theme::ThemeMode;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let mut spans = vec![
        Span::styled(
            " TrendCast ",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(theme.border)),
        Span::styled(app.screen.title(), Style::default().fg(theme.text)),
    ];

    if let Some(country) = &app.selected_country {
        spans.push(Span::styled("  ", Style::default()));
        spans.push(Span::styled(
            format!("{} {}", country.flag, country.name),
            Style::default().fg(theme.text_secondary),
        ));
    }

    let unread = app.registry.unread_count();
    if unread > 0 {
        spans.push(Span::styled(
            format!("  🔔 {unread}"),
            Style::default().fg(theme.warning),
        ));
    }

    let mode = match app.theme_mode {
        ThemeMode::Dark => "dark",
        ThemeMode::Light => "light",
    };
    spans.push(Span::styled(
        format!("  [{mode}]"),
        Style::default().fg(theme.text_muted),
    ));

    if !app.user_name.is_empty() {
        spans.push(Span::styled(
            format!("  {} ▾", app.user_name),
            Style::default().fg(theme.text_secondary),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel_bg)),
    );
    frame.render_widget(header, area);
}
