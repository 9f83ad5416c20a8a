//! App state and main loop: input handling, applying poll results, and drawing.

use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use reqwest::Client;
use tokio::time::sleep;

use crate::poller::{PollOutcome, Poller, POLL_PERIOD};
use crate::stats::Dashboard;
use crate::ui::{
    alerts::draw_alerts, header::draw_header, jobs::draw_stat_cards, progress::draw_progress,
    snapshots::draw_snapshots, workers::draw_workers,
};

pub struct App {
    pub dashboard: Dashboard,

    // Sequence number of the last poll outcome applied; anything at or
    // below this is a stale result from a superseded poll.
    last_applied_seq: u64,

    should_quit: bool,
    endpoint_label: String,
}

impl App {
    pub fn new(endpoint_label: String) -> Self {
        Self {
            dashboard: Dashboard::new(),
            last_applied_seq: 0,
            should_quit: false,
            endpoint_label,
        }
    }

    pub async fn run(&mut self, status_url: &str) -> Result<()> {
        let client = Client::builder().timeout(Duration::from_secs(5)).build()?;
        let mut poller = Poller::spawn(client, status_url.to_string(), POLL_PERIOD);

        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal, &mut poller).await;

        // Teardown: the poll timer dies with the poller handle.
        poller.shutdown();
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        poller: &mut Poller,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if matches!(
                        k.code,
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
                    ) {
                        self.should_quit = true;
                    }
                }
            }
            if self.should_quit {
                break;
            }

            while let Some(outcome) = poller.try_recv() {
                self.offer(outcome);
            }

            // Draw
            terminal.draw(|f| self.draw(f))?;

            // UI tick rate; polling runs on its own cadence
            sleep(Duration::from_millis(250)).await;
        }

        Ok(())
    }

    /// Apply a poll outcome unless it is stale. Outcomes are applied in
    /// the order their polls were issued, not the order responses arrive;
    /// a response outrun by a later poll is dropped rather than rewinding
    /// the comparison baseline. Returns whether the outcome was applied.
    pub fn offer(&mut self, outcome: PollOutcome) -> bool {
        if outcome.seq <= self.last_applied_seq {
            return false;
        }
        self.last_applied_seq = outcome.seq;
        self.dashboard.apply(outcome.result);
        true
    }

    pub fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // header
                Constraint::Length(7), // alerts: feed cap + borders
                Constraint::Length(3), // stat cards
                Constraint::Length(4), // progress
                Constraint::Min(6),    // workers
                Constraint::Length(3), // snapshot counters
            ])
            .split(area);

        draw_header(f, rows[0], &self.dashboard, &self.endpoint_label);
        draw_alerts(f, rows[1], &self.dashboard.alerts);
        draw_stat_cards(f, rows[2], &self.dashboard.stats);
        draw_progress(f, rows[3], &self.dashboard.stats);
        draw_workers(f, rows[4], &self.dashboard.stats);
        draw_snapshots(f, rows[5], &self.dashboard.stats);
    }
}
