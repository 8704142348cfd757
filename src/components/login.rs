//! Login screen

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, LoginField};
use crate::components::centered_rect;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let panel = centered_rect(48, 13, area);

    let block = Block::default()
        .title(" TrendCast ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tagline
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // spacer
            Constraint::Length(1), // status
        ])
        .split(inner);

    let tagline = Paragraph::new("Stock Prediction Platform")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text_muted));
    frame.render_widget(tagline, rows[0]);

    render_field(
        frame,
        rows[1],
        app,
        "Username",
        &app.login.username,
        app.login.focus == LoginField::Username,
        false,
    );
    render_field(
        frame,
        rows[2],
        app,
        "Password",
        &app.login.password,
        app.login.focus == LoginField::Password,
        true,
    );

    let status = if app.login.submitting {
        Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(theme.accent).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            "Tab switch field   Enter sign in   Esc quit",
            Style::default().fg(theme.text_muted),
        ))
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[4]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    label: &str,
    value: &str,
    focused: bool,
    mask: bool,
) {
    let theme = app.theme();
    let border = if focused { theme.accent } else { theme.border };
    let shown = if mask {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▏" } else { "" };
    let field = Paragraph::new(format!("{shown}{cursor}"))
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(field, area);
}
