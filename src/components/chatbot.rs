//! Chat overlay: FAQ list, transcript, input line

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, ChatSender};
use crate::chat::FAQS;
use crate::components::centered_rect;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let area = centered_rect(
        frame.area().width.saturating_sub(8).min(90),
        frame.area().height.saturating_sub(4).min(28),
        frame.area(),
    );
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" TrendCast Assistant ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(30)])
        .split(inner);

    render_faq_list(frame, app, cols[0]);
    render_transcript(frame, app, cols[1]);
}

fn render_faq_list(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let theme = app.theme();
    let items: Vec<ListItem> = FAQS
        .iter()
        .enumerate()
        .map(|(i, faq)| {
            let style = if i == app.chat.selected_faq {
                Style::default().fg(theme.text).bg(theme.highlight_bg)
            } else {
                Style::default().fg(theme.text_secondary)
            };
            ListItem::new(faq.question).style(style)
        })
        .collect();
    let list = List::new(items).block(
        Block::default()
            .title(" FAQ (↑/↓, Enter) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(list, area);
}

fn render_transcript(frame: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let theme = app.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for message in &app.chat.messages {
        let (prefix, color) = match message.sender {
            ChatSender::User => ("you  ", theme.accent),
            ChatSender::Bot => ("bot  ", theme.positive),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(message.text.clone(), Style::default().fg(theme.text)),
        ]));
        lines.push(Line::default());
    }
    if app.chat.typing {
        lines.push(Line::from(Span::styled(
            "bot is typing...",
            Style::default().fg(theme.text_muted).add_modifier(Modifier::ITALIC),
        )));
    }

    // keep the tail of the transcript in view
    let visible = rows[0].height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible);
    let transcript = Paragraph::new(lines.split_off(skip.min(lines.len())))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(transcript, rows[0]);

    let input = Paragraph::new(format!("{}▏", app.chat.input))
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .title("Ask anything (Enter to send, Esc to close)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent)),
        );
    frame.render_widget(input, rows[1]);
}
