//! Snapshot pipeline counters.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::stats::ClusterStats;

pub fn draw_snapshots(f: &mut ratatui::Frame<'_>, area: Rect, s: &ClusterStats) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let processed = Paragraph::new(Line::from(Span::styled(
        s.snapshots_processed.to_string(),
        Style::default().fg(Color::Green),
    )))
    .block(Block::default().borders(Borders::ALL).title("Snapshots Processed"));
    f.render_widget(processed, cols[0]);

    let failed_color = if s.snapshots_failed > 0 { Color::Red } else { Color::DarkGray };
    let failed = Paragraph::new(Line::from(Span::styled(
        s.snapshots_failed.to_string(),
        Style::default().fg(failed_color),
    )))
    .block(Block::default().borders(Borders::ALL).title("Snapshots Failed"));
    f.render_widget(failed, cols[1]);
}
