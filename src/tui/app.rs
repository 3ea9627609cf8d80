use anyhow::Result;
use chrono::{Datelike, Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::sync::mpsc;
use std::thread;

use crate::api::{CalendarClient, FetchError};
use crate::config::{AppConfig, CITIES};
use crate::models::{Countdown, MonthlySchedule};
use crate::prayer_times::scheduler;
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{countdown, header, monthly, statusbar, today};
use crate::utils::hijri::today_hijri_string;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    CityPicker,
    Help,
}

pub struct App {
    pub view: View,
    pub config: AppConfig,
    pub should_quit: bool,

    // Current snapshot; replaced wholesale, never mutated in place.
    pub monthly: Option<MonthlySchedule>,
    pub countdown: Option<Countdown>,
    pub loading: bool,
    pub fetch_error: Option<String>,

    pub hijri_str: String,
    pub table_offset: usize,
    pub picker_idx: usize,

    // Bumped on every fetch; responses carrying an older value are stale
    // (rapid city switching) and get dropped.
    generation: u64,
    events_tx: mpsc::Sender<Event>,
}

impl App {
    pub fn new(config: AppConfig, events_tx: mpsc::Sender<Event>) -> Self {
        let hijri_str = today_hijri_string(config.hijri_offset);
        App {
            view: View::Dashboard,
            config,
            should_quit: false,
            monthly: None,
            countdown: None,
            loading: false,
            fetch_error: None,
            hijri_str,
            table_offset: 0,
            picker_idx: 0,
            generation: 0,
            events_tx,
        }
    }

    /// Kick off a fetch of the current month for the configured city on a
    /// worker thread. The result comes back through the event channel.
    pub fn request_month(&mut self) {
        self.generation += 1;
        self.loading = true;
        self.fetch_error = None;

        let generation = self.generation;
        let city = self.config.schedule.city.clone();
        let country = self.config.schedule.country.clone();
        let method = self.config.schedule.method;
        let now = Local::now().date_naive();
        let (month, year) = (now.month(), now.year());
        let tx = self.events_tx.clone();

        thread::spawn(move || {
            let result = CalendarClient::new()
                .and_then(|client| client.fetch_month(&city, &country, method, month, year));
            // A closed receiver just means the app is shutting down.
            let _ = tx.send(Event::Schedule { generation, result });
        });
    }

    pub fn on_schedule(&mut self, generation: u64, result: Result<MonthlySchedule, FetchError>) {
        if generation != self.generation {
            log::debug!("dropping stale fetch response (generation {generation})");
            return;
        }
        self.loading = false;
        match result {
            Ok(monthly) => {
                let today = Local::now().date_naive();
                // Scroll so today's row sits near the top of the table.
                self.table_offset = monthly
                    .days
                    .iter()
                    .position(|d| d.date == today)
                    .map(|i| i.saturating_sub(2))
                    .unwrap_or(0);
                self.monthly = Some(monthly);
                self.recompute_countdown(Local::now().naive_local());
            }
            Err(err) => {
                log::error!("fetching prayer times failed: {err}");
                self.fetch_error = Some(err.to_string());
            }
        }
    }

    /// Once-per-second refresh. No I/O; a full rescan of at most seven keys.
    pub fn tick(&mut self) {
        let now = Local::now().naive_local();
        self.recompute_countdown(now);

        // The wall clock rolled into a month we have no data for. Fetch it
        // once; after an error, retry stays manual.
        if let Some(m) = &self.monthly {
            if (m.month, m.year) != (now.date().month(), now.date().year())
                && !self.loading
                && self.fetch_error.is_none()
            {
                self.request_month();
            }
        }
    }

    fn recompute_countdown(&mut self, now: NaiveDateTime) {
        let Some(monthly) = &self.monthly else { return };
        // A date outside the fetched month keeps the previous value.
        if let Some(day) = monthly.day_for(now.date()) {
            self.countdown = Some(scheduler::next_prayer(&day.timings, now));
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::CityPicker => self.handle_picker_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') => {
                self.picker_idx = CITIES
                    .iter()
                    .position(|c| *c == self.config.schedule.city)
                    .unwrap_or(0);
                self.view = View::CityPicker;
            }
            KeyCode::Char('r') => {
                self.request_month();
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.table_offset = self.table_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self
                    .monthly
                    .as_ref()
                    .map(|m| m.days.len().saturating_sub(1))
                    .unwrap_or(0);
                if self.table_offset < max {
                    self.table_offset += 1;
                }
            }
            _ => {}
        }
    }

    fn handle_picker_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.view = View::Dashboard;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.picker_idx = self.picker_idx.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.picker_idx < CITIES.len() - 1 {
                    self.picker_idx += 1;
                }
            }
            KeyCode::Enter => {
                self.config.schedule.city = CITIES[self.picker_idx].to_string();
                if let Err(err) = self.config.save() {
                    log::warn!("could not persist config: {err:#}");
                }
                self.view = View::Dashboard;
                self.request_month();
            }
            _ => {}
        }
    }

    // Any key dismisses the help overlay.
    fn handle_help_key(&mut self, _key: crossterm::event::KeyEvent) {
        self.view = View::Dashboard;
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);

        match self.view {
            View::CityPicker => self.draw_city_picker(frame),
            View::Help => self.draw_help_overlay(frame),
            View::Dashboard => {}
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Length(8), // countdown
                Constraint::Length(4), // today strip
                Constraint::Min(0),    // monthly table
                Constraint::Length(1), // status bar
            ])
            .split(area);

        let city = &self.config.schedule.city;
        header::render(frame, chunks[0], city, &self.hijri_str);
        countdown::render(frame, chunks[1], self.countdown.as_ref(), city, self.loading);

        let now = Local::now().date_naive();
        let today_schedule = self.monthly.as_ref().and_then(|m| m.day_for(now));
        today::render(
            frame,
            chunks[2],
            today_schedule,
            self.countdown.map(|c| c.prayer),
        );

        monthly::render(frame, chunks[3], self.monthly.as_ref(), now, self.table_offset);
        statusbar::render(frame, chunks[4], self.loading, self.fetch_error.as_deref());
    }

    fn draw_city_picker(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 3,
            y: area.height / 6,
            width: area.width / 3,
            height: (CITIES.len() as u16 + 4).min(area.height),
        };

        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = CITIES
            .iter()
            .enumerate()
            .map(|(i, city)| {
                let selected = i == self.picker_idx;
                let marker = if *city == self.config.schedule.city { "●" } else { " " };
                let style = if selected {
                    theme::gold().add_modifier(Modifier::BOLD)
                } else {
                    theme::dim()
                };
                ListItem::new(Line::from(Span::styled(
                    format!("  {} {}", marker, city),
                    style,
                )))
            })
            .collect();

        let block = Block::default()
            .title(Span::styled(" Pilih Kota ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(List::new(items).block(block), popup_area);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: (area.height / 2).min(14),
        };

        frame.render_widget(Clear, popup_area);

        let entries = [
            ("[c]", "Ganti kota"),
            ("[r]", "Muat ulang jadwal"),
            ("[↑ ↓] / [j k]", "Gulir tabel bulanan"),
            ("[?]", "Bantuan"),
            ("[Esc] / [q]", "Keluar"),
        ];

        let mut lines = vec![
            Line::from(Span::styled(
                "  Tombol",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for (key, label) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<15}", key), theme::gold()),
                Span::styled(label, theme::dim()),
            ]));
        }

        let block = Block::default()
            .title(Span::styled(" Bantuan ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let events = EventHandler::new(config.tick_ms);
    let mut app = App::new(config, events.sender());
    app.request_month();

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick();
            }
            Event::Schedule { generation, result } => {
                app.on_schedule(generation, result);
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DaySchedule, PrayerKey};
    use std::collections::BTreeMap;

    fn test_app() -> App {
        let (tx, _rx) = mpsc::channel();
        App::new(AppConfig::default(), tx)
    }

    fn month_with_today() -> MonthlySchedule {
        let today = Local::now().date_naive();
        let timings: BTreeMap<PrayerKey, String> = PrayerKey::DAILY_ORDER
            .into_iter()
            .map(|k| (k, "23:59".to_string()))
            .collect();
        MonthlySchedule {
            city: "Bandung".into(),
            month: today.month(),
            year: today.year(),
            days: vec![DaySchedule {
                date: today,
                weekday_en: "Sunday".into(),
                timings,
            }],
            parse_fallbacks: 0,
        }
    }

    #[test]
    fn stale_fetch_response_is_dropped() {
        let mut app = test_app();
        // Generation 2 is the latest request; a response for generation 1
        // arrives late and must not be applied.
        app.generation = 2;
        app.loading = true;

        app.on_schedule(1, Ok(month_with_today()));
        assert!(app.monthly.is_none());
        assert!(app.loading);
    }

    #[test]
    fn matching_response_installs_schedule_and_countdown() {
        let mut app = test_app();
        app.generation = 3;
        app.loading = true;

        app.on_schedule(3, Ok(month_with_today()));
        assert!(!app.loading);
        assert!(app.monthly.is_some());
        assert!(app.countdown.is_some());
    }

    #[test]
    fn fetch_error_sets_visible_state_and_keeps_schedule() {
        let mut app = test_app();
        app.generation = 1;
        app.on_schedule(1, Ok(month_with_today()));

        app.generation = 2;
        app.on_schedule(
            2,
            Err(FetchError::EmptyMonth {
                city: "Bandung".into(),
                month: 8,
                year: 2026,
            }),
        );
        assert!(app.fetch_error.is_some());
        // Previous schedule stays on screen.
        assert!(app.monthly.is_some());
    }

    #[test]
    fn countdown_survives_missing_today_entry() {
        let mut app = test_app();
        app.generation = 1;
        let mut month = month_with_today();
        app.on_schedule(1, Ok(month.clone()));
        let before = app.countdown;

        // Replace with a month that has no entry for today; the tick must
        // leave the prior countdown untouched.
        month.days.clear();
        app.monthly = Some(month);
        app.tick();
        assert_eq!(app.countdown, before);
    }
}
