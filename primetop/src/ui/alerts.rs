//! System alerts panel: the bounded feed, newest first.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::stats::{Alert, AlertKind};

fn kind_marker(kind: AlertKind) -> (&'static str, Color) {
    match kind {
        AlertKind::Warning => ("!", Color::Yellow),
        AlertKind::Success => ("✔", Color::Green),
        AlertKind::Error => ("✖", Color::Red),
    }
}

pub fn draw_alerts(f: &mut ratatui::Frame<'_>, area: Rect, alerts: &[Alert]) {
    let items: Vec<ListItem> = if alerts.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "no alerts",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        alerts
            .iter()
            .map(|a| {
                let (marker, color) = kind_marker(a.kind);
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {marker} "), Style::default().fg(color)),
                    Span::raw(a.message.clone()),
                    Span::styled(
                        format!("  {}", a.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("System Alerts"));
    f.render_widget(list, area);
}
