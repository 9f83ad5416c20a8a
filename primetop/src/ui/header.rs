//! Top header with coordinator endpoint and last-update time.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::stats::Dashboard;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, dash: &Dashboard, endpoint: &str) {
    let title = if dash.has_data() {
        format!(
            "primetop — coordinator: {} | updated {}  (press 'q' to quit)",
            endpoint,
            dash.stats.last_update.format("%H:%M:%S")
        )
    } else {
        format!("primetop — connecting to {endpoint}... (press 'q' to quit)")
    };
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
