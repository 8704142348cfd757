//! Prediction history screen: accuracy summary and outcome table

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::history;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let entries = history::entries();
    let rate = history::accuracy_rate(&entries);
    let correct = history::correct_count(&entries);
    let total = entries.len().min(history::ACCURACY_WINDOW);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(area);

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Last 30 predictions: ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                format!("{rate}% accurate"),
                Style::default().fg(theme.positive).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{correct} correct out of {total} total predictions"),
            Style::default().fg(theme.text_muted),
        )),
    ])
    .block(
        Block::default()
            .title(" Accuracy ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel_bg)),
    );
    frame.render_widget(summary, chunks[0]);

    let header = Row::new(
        ["Ticker", "", "Signal", "Horizon", "Predicted", "Actual", "Date", "Outcome", ""].map(
            |h| {
                Cell::from(h).style(
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::BOLD),
                )
            },
        ),
    );

    let rows: Vec<Row> = entries
        .iter()
        .map(|entry| {
            let outcome_color = if entry.correct {
                theme.positive
            } else {
                theme.negative
            };
            let verdict = if entry.correct { "✓" } else { "✗" };
            Row::new(vec![
                Cell::from(entry.ticker).style(
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Cell::from(entry.flag),
                Cell::from(entry.prediction.label())
                    .style(Style::default().fg(theme.prediction_color(entry.prediction))),
                Cell::from(entry.horizon.label())
                    .style(Style::default().fg(theme.text_secondary)),
                Cell::from(format!("${:.2}", entry.predicted_price))
                    .style(Style::default().fg(theme.text_secondary)),
                Cell::from(format!("${:.2}", entry.actual_price))
                    .style(Style::default().fg(theme.text_secondary)),
                Cell::from(format!("{} {}", entry.date, entry.time))
                    .style(Style::default().fg(theme.text_muted)),
                Cell::from(entry.outcome).style(Style::default().fg(outcome_color)),
                Cell::from(verdict).style(Style::default().fg(outcome_color)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(17),
            Constraint::Min(16),
            Constraint::Length(2),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(" Past Predictions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(table, chunks[1]);
}
