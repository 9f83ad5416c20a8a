//! Worker status grid: one line per live worker, plus the dead count.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::stats::ClusterStats;
use crate::ui::util::truncate_middle;

pub fn draw_workers(f: &mut ratatui::Frame<'_>, area: Rect, s: &ClusterStats) {
    let mut items: Vec<ListItem> = s
        .workers
        .iter()
        .map(|w| {
            let id = truncate_middle(&w.id, area.width.saturating_sub(14) as usize);
            ListItem::new(Line::from(vec![
                Span::styled(" ● ", Style::default().fg(Color::Green)),
                Span::raw(id),
                Span::styled(
                    format!("  {}", w.status.label()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    if s.dead_workers > 0 {
        items.push(ListItem::new(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(Color::Red)),
            Span::styled(
                format!("{} dead", s.dead_workers),
                Style::default().fg(Color::Red),
            ),
        ])));
    }

    if items.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            "no workers reported",
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Worker Status"));
    f.render_widget(list, area);
}
