//! Stock detail screen: prediction and price panels plus the alert dialog

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AlertDialog, App};
use crate::components::centered_rect;
use crate::currency;
use crate::metrics::{self, confidence_tier};
use crate::stocks::{Stock, PREDICTION_REASONS};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(stock) = &app.selected_stock else {
        return;
    };
    let country_code = app
        .selected_country
        .as_ref()
        .map(|c| c.code)
        .unwrap_or("US");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    render_title(frame, app, stock, country_code, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_prediction_panel(frame, app, stock, panels[0]);
    render_alert_panel(frame, app, stock, panels[1]);

    if let Some(dialog) = app.detail.dialog {
        render_alert_dialog(frame, app, dialog);
    }
}

fn render_title(frame: &mut Frame, app: &App, stock: &Stock, country_code: &str, area: Rect) {
    let theme = app.theme();
    let change_color = if stock.change >= 0.0 {
        theme.positive
    } else {
        theme.negative
    };
    let refresh = if app.detail.refreshing {
        Span::styled("  ⟳ refreshing...", Style::default().fg(theme.accent))
    } else {
        Span::styled("  (r to refresh)", Style::default().fg(theme.text_muted))
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                stock.ticker,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", stock.sector),
                Style::default().fg(theme.text_muted),
            ),
            Span::styled(
                format!("  {}", stock.name),
                Style::default().fg(theme.text_secondary),
            ),
        ]),
        Line::from(vec![
            Span::styled(
                currency::format_price(stock.price, country_code),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", metrics::format_change(stock.change, stock.change_percent)),
                Style::default().fg(change_color),
            ),
            refresh,
        ]),
    ];
    let title = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.panel_bg)),
    );
    frame.render_widget(title, area);
}

fn render_prediction_panel(frame: &mut Frame, app: &App, stock: &Stock, area: Rect) {
    let theme = app.theme();
    let prediction_color = theme.prediction_color(stock.prediction);
    let block = Block::default()
        .title(" Prediction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(prediction_color))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // signal
            Constraint::Length(3), // confidence gauge
            Constraint::Length(1), // tier label
            Constraint::Min(3),    // reasons
        ])
        .split(inner);

    let signal = Paragraph::new(vec![
        Line::from(Span::styled(
            stock.prediction.label(),
            Style::default()
                .fg(prediction_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            stock.prediction.summary(),
            Style::default().fg(theme.text_secondary),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(signal, rows[0]);

    let confidence = stock.confidence;
    let tier = confidence_tier(confidence);
    let ring = metrics::ring_geometry(confidence);
    let gauge = Gauge::default()
        .block(Block::default().title("Daily confidence"))
        .gauge_style(Style::default().fg(theme.tier_color(tier)))
        .ratio(ring.proportion())
        .label(format!("{confidence}%"));
    frame.render_widget(gauge, rows[1]);

    let tier_line = Paragraph::new(tier.label())
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.tier_color(tier)));
    frame.render_widget(tier_line, rows[2]);

    let reasons: Vec<Line> = PREDICTION_REASONS
        .iter()
        .map(|r| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(theme.accent)),
                Span::styled(*r, Style::default().fg(theme.text_secondary)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(reasons).wrap(Wrap { trim: true }), rows[3]);
}

fn render_alert_panel(frame: &mut Frame, app: &App, stock: &Stock, area: Rect) {
    let theme = app.theme();
    let block = Block::default()
        .title(" Alerts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hourly = stock.hourly_confidence;
    let hourly_tier = confidence_tier(hourly);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Hourly confidence: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("{hourly}%"),
                Style::default().fg(theme.tier_color(hourly_tier)),
            ),
        ]),
        Line::default(),
    ];

    match app.registry.active_alert_for(stock.ticker) {
        Some(alert) => {
            lines.push(Line::from(Span::styled(
                format!(
                    "✓ Alert active: {} updates, ≥{}% confidence",
                    alert.horizon.label().to_lowercase(),
                    alert.threshold
                ),
                Style::default().fg(theme.positive),
            )));
            lines.push(Line::from(Span::styled(
                "You'll receive SMS/Email notifications when conditions are met",
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press 'a' to remove this alert",
                Style::default().fg(theme.text_secondary),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No alert configured for this stock",
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Press 'a' to set an alert",
                Style::default().fg(theme.text_secondary),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_alert_dialog(frame: &mut Frame, app: &App, dialog: AlertDialog) {
    let theme = app.theme();
    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Set Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.panel_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let horizon = Paragraph::new(Line::from(vec![
        Span::styled("Horizon (Tab): ", Style::default().fg(theme.text_muted)),
        Span::styled(
            dialog.horizon.label(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(horizon, rows[0]);

    let threshold_label = Paragraph::new(Line::from(vec![
        Span::styled("Confidence threshold (←/→): ", Style::default().fg(theme.text_muted)),
        Span::styled(
            format!("≥{}%", dialog.threshold),
            Style::default().fg(theme.text),
        ),
    ]));
    frame.render_widget(threshold_label, rows[1]);

    let tier = confidence_tier(dialog.threshold);
    let slider = Gauge::default()
        .gauge_style(Style::default().fg(theme.tier_color(tier)))
        .ratio(f64::from(dialog.threshold) / 100.0)
        .label(format!("{}%", dialog.threshold));
    frame.render_widget(slider, rows[2]);

    let hint = Paragraph::new("Enter save   Esc cancel")
        .style(Style::default().fg(theme.text_muted));
    frame.render_widget(hint, rows[3]);
}
