//! Market-selection screen: searchable country table

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::market::MarketTrend;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let search_border = if app.market.search_focused {
        theme.accent
    } else {
        theme.border
    };
    let cursor = if app.market.search_focused { "▏" } else { "" };
    let search = Paragraph::new(format!("{}{cursor}", app.market.search))
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .title("Search markets (/)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(search_border)),
        );
    frame.render_widget(search, chunks[0]);

    let countries = app.visible_countries();
    let header = Row::new(["", "Market", "Trend", "Performance", "Listings"].map(|h| {
        Cell::from(h).style(
            Style::default()
                .fg(theme.text_muted)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let rows: Vec<Row> = countries
        .iter()
        .enumerate()
        .map(|(i, country)| {
            let trend_color = match country.trend {
                MarketTrend::Up => theme.positive,
                MarketTrend::Down => theme.negative,
                MarketTrend::Neutral => theme.text_muted,
            };
            let row = Row::new(vec![
                Cell::from(country.flag),
                Cell::from(format!("{} ({})", country.name, country.code))
                    .style(Style::default().fg(theme.text)),
                Cell::from(country.trend.glyph()).style(Style::default().fg(trend_color)),
                Cell::from(country.performance).style(Style::default().fg(trend_color)),
                Cell::from(format!("{}", country.markets))
                    .style(Style::default().fg(theme.text_secondary)),
            ]);
            if i == app.market.selected {
                row.style(Style::default().bg(theme.highlight_bg))
            } else {
                row
            }
        })
        .collect();

    let title = format!(" Markets ({}) ", countries.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(24),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(table, chunks[1]);

    if countries.is_empty() {
        let empty = Paragraph::new("No markets match your search")
            .style(Style::default().fg(theme.text_muted));
        let inner = Rect::new(chunks[1].x + 2, chunks[1].y + 2, chunks[1].width.saturating_sub(4), 1);
        frame.render_widget(empty, inner);
    }
}
