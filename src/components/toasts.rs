//! Toast overlay for unread notifications, stacked bottom-right

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::alerts::Severity;
use crate::app::App;

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 4;
const MAX_VISIBLE: usize = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let screen = frame.area();
    if screen.width < TOAST_WIDTH + 2 || screen.height < TOAST_HEIGHT + 2 {
        return;
    }

    for (i, toast) in app.active_toasts().iter().take(MAX_VISIBLE).enumerate() {
        let y_offset = (i as u16 + 1) * (TOAST_HEIGHT + 1);
        if y_offset + 1 > screen.height {
            break;
        }
        let area = Rect::new(
            screen.width - TOAST_WIDTH - 2,
            screen.height - y_offset,
            TOAST_WIDTH,
            TOAST_HEIGHT,
        );
        let (glyph, color) = match toast.severity {
            Severity::Success => ("✓", theme.positive),
            Severity::Warning => ("!", theme.warning),
            Severity::Info => ("i", theme.info),
        };
        frame.render_widget(Clear, area);
        let widget = Paragraph::new(toast.message.clone())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.text))
            .block(
                Block::default()
                    .title(format!(" {glyph} "))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color))
                    .style(Style::default().bg(theme.panel_bg)),
            );
        frame.render_widget(widget, area);
    }
}
