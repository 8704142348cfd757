//! Stock list screen: search, sort/filter controls, prediction table

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::app::App;
use crate::currency;
use crate::metrics::{self, confidence_tier};
use crate::stocks::Horizon;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search + controls
            Constraint::Length(2), // horizon banner
            Constraint::Min(3),    // table
        ])
        .split(area);

    render_controls(frame, app, chunks[0]);
    render_banner(frame, app, chunks[1]);
    render_table(frame, app, chunks[2]);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(area);

    let search_border = if app.list.search_focused {
        theme.accent
    } else {
        theme.border
    };
    let cursor = if app.list.search_focused { "▏" } else { "" };
    let search = Paragraph::new(format!("{}{cursor}", app.list.search))
        .style(Style::default().fg(theme.text))
        .block(
            Block::default()
                .title("Search (/)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(search_border)),
        );
    frame.render_widget(search, cols[0]);

    let controls = Paragraph::new(Line::from(vec![
        Span::styled("sort(s) ", Style::default().fg(theme.text_muted)),
        Span::styled(app.list.sort.label(), Style::default().fg(theme.accent)),
        Span::styled("  filter(f) ", Style::default().fg(theme.text_muted)),
        Span::styled(app.list.filter.label(), Style::default().fg(theme.accent)),
        Span::styled("  ⇥ ", Style::default().fg(theme.text_muted)),
        Span::styled(
            app.list.horizon.label(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(controls, cols[1]);
}

fn render_banner(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let text = match app.list.horizon {
        Horizon::Daily => "📈 Daily predictions analyze long-term trends and market movements - perfect for swing trading and investment decisions.",
        Horizon::Hourly => "⚡ Hourly predictions focus on short-term price fluctuations - ideal for day trading and quick opportunities.",
    };
    let banner = Paragraph::new(text).style(Style::default().fg(theme.info));
    frame.render_widget(banner, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let country_code = app
        .selected_country
        .as_ref()
        .map(|c| c.code)
        .unwrap_or("US");
    let stocks = app.visible_stocks();

    let header = Row::new(
        ["Ticker", "Name", "Price", "Change", "Signal", "Confidence", "Volume", "Sector"].map(
            |h| {
                Cell::from(h).style(
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::BOLD),
                )
            },
        ),
    );

    let rows: Vec<Row> = stocks
        .iter()
        .enumerate()
        .map(|(i, stock)| {
            let change_color = if stock.change >= 0.0 {
                theme.positive
            } else {
                theme.negative
            };
            let confidence = stock.confidence_for(app.list.horizon);
            let tier_color = theme.tier_color(confidence_tier(confidence));
            let ring = metrics::ring_geometry(confidence);
            let row = Row::new(vec![
                Cell::from(stock.ticker).style(
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Cell::from(stock.name).style(Style::default().fg(theme.text_secondary)),
                Cell::from(currency::format_price(stock.price, country_code))
                    .style(Style::default().fg(theme.text)),
                Cell::from(metrics::format_change(stock.change, stock.change_percent))
                    .style(Style::default().fg(change_color)),
                Cell::from(stock.prediction.label())
                    .style(Style::default().fg(theme.prediction_color(stock.prediction))),
                Cell::from(format!("{} {confidence}%", confidence_meter(ring.proportion())))
                    .style(Style::default().fg(tier_color)),
                Cell::from(metrics::format_volume(stock.volume))
                    .style(Style::default().fg(theme.text_secondary)),
                Cell::from(stock.sector).style(Style::default().fg(theme.text_muted)),
            ]);
            if i == app.list.selected {
                row.style(Style::default().bg(theme.highlight_bg))
            } else {
                row
            }
        })
        .collect();

    let title = format!(" Stocks ({}) ", stocks.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(18),
            Constraint::Length(12),
            Constraint::Length(18),
            Constraint::Length(6),
            Constraint::Length(14),
            Constraint::Length(8),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
    );
    frame.render_widget(table, area);

    if stocks.is_empty() {
        let empty = Paragraph::new("No stocks found matching your criteria")
            .style(Style::default().fg(theme.text_muted));
        let inner = Rect::new(area.x + 2, area.y + 2, area.width.saturating_sub(4), 1);
        frame.render_widget(empty, inner);
    }
}

/// Eight-step bar standing in for the circular confidence ring
fn confidence_meter(proportion: f64) -> String {
    const STEPS: usize = 8;
    let filled = (proportion * STEPS as f64).round() as usize;
    let mut out = String::with_capacity(STEPS * 3);
    for i in 0..STEPS {
        out.push(if i < filled { '●' } else { '○' });
    }
    out
}
