//! Overall progress gauge with assigned/queued breakdown.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::stats::ClusterStats;

pub fn draw_progress(f: &mut ratatui::Frame<'_>, area: Rect, s: &ClusterStats) {
    let block = Block::default().borders(Borders::ALL).title("Overall Progress");
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    // Gauge fill saturates at 100%; the label always shows the real value.
    let ratio = (s.progress / 100.0).clamp(0.0, 1.0);
    let g = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{:.1}%", s.progress));
    f.render_widget(g, rows[0]);

    if rows.len() > 1 && rows[1].height > 0 {
        let text = format!(
            "{} of {} jobs completed — {} assigned, {} queued",
            s.completed_jobs, s.total_jobs, s.assigned_jobs, s.queued_jobs
        );
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Gray)),
            rows[1],
        );
    }
}
