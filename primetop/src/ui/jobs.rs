//! Stat cards row: totals at a glance.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::stats::ClusterStats;
use crate::ui::util::group_digits;

fn card(value: String, color: Color, title: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color),
    )))
    .block(Block::default().borders(Borders::ALL).title(title))
}

pub fn draw_stat_cards(f: &mut ratatui::Frame<'_>, area: Rect, s: &ClusterStats) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    f.render_widget(
        card(s.total_jobs.to_string(), Color::Blue, "Total Jobs"),
        cols[0],
    );
    f.render_widget(
        card(s.completed_jobs.to_string(), Color::Green, "Completed"),
        cols[1],
    );
    f.render_widget(
        card(s.active_workers.to_string(), Color::Magenta, "Active Workers"),
        cols[2],
    );
    f.render_widget(
        card(group_digits(s.total_primes), Color::Yellow, "Primes Found"),
        cols[3],
    );
}
