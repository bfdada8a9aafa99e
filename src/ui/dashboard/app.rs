use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::media::{MediaCommand, MediaState};
use crate::core::runtime::{AppEvent, AppRuntime};
use crate::core::tasks::TaskKind;
use crate::core::telemetry::SystemSnapshot;
use crate::core::ConfigStore;
use crate::platform::{HardwareInfo, VolumeControl};

use super::event_handler::{map_key, UiEvent};
use super::render::render_ui;

const VOLUME_STEP: f32 = 0.05;

/// Dashboard pages, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Optimize,
    Notes,
    Calendar,
    Settings,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Optimize,
        Page::Notes,
        Page::Calendar,
        Page::Settings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Optimize => "Optimize",
            Page::Notes => "Notes",
            Page::Calendar => "Calendar",
            Page::Settings => "Settings",
        }
    }

    fn index(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    fn next(&self) -> Page {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    fn prev(&self) -> Page {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Inline status line for one optimization action
#[derive(Debug, Clone, Default)]
pub struct ActionStatus {
    pub message: String,
    pub in_flight: bool,
    pub failed: bool,
}

/// Presentation state owned by the UI loop
pub struct DashboardApp {
    pub runtime: AppRuntime,
    pub config: ConfigStore,
    pub hardware: HardwareInfo,
    pub volume_control: Option<Box<dyn VolumeControl>>,

    pub snapshot: SystemSnapshot,
    pub media: Option<MediaState>,
    pub volume: Option<f32>,
    pub page: Page,
    pub temp_status: ActionStatus,
    pub dns_status: ActionStatus,
    pub calendar_cursor: NaiveDate,
    pub show_welcome: bool,
    pub show_help: bool,
    pub should_quit: bool,
}

impl DashboardApp {
    pub fn new(
        runtime: AppRuntime,
        mut config: ConfigStore,
        hardware: HardwareInfo,
        volume_control: Option<Box<dyn VolumeControl>>,
    ) -> Self {
        // First launch: greet once and remember it. The original's
        // multi-step onboarding dialog is intentionally reduced to this.
        let show_welcome = !config.get().onboarding_complete;
        if show_welcome {
            let username = std::env::var("USER")
                .or_else(|_| std::env::var("USERNAME"))
                .unwrap_or_default();
            config.mutate(|c| {
                c.onboarding_complete = true;
                if c.username.is_empty() {
                    c.username = username;
                }
            });
        }

        let volume = volume_control.as_ref().and_then(|v| v.get());

        Self {
            runtime,
            config,
            hardware,
            volume_control,
            snapshot: SystemSnapshot::default(),
            media: None,
            volume,
            page: Page::Dashboard,
            temp_status: ActionStatus::default(),
            dns_status: ActionStatus::default(),
            calendar_cursor: chrono::Local::now().date_naive(),
            show_welcome,
            show_help: false,
            should_quit: false,
        }
    }

    /// Apply an event coming from the background runtime.
    pub fn apply_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Telemetry(snapshot) => self.snapshot = snapshot,
            AppEvent::Media(state) => self.media = Some(state),
            AppEvent::Task { kind, outcome } => {
                let status = self.status_for(kind);
                status.in_flight = false;
                status.failed = !outcome.is_success();
                status.message = outcome.message;
            }
        }
    }

    fn status_for(&mut self, kind: TaskKind) -> &mut ActionStatus {
        match kind {
            TaskKind::TempPurge => &mut self.temp_status,
            TaskKind::DnsFlush => &mut self.dns_status,
        }
    }

    /// One in-flight task per action button; a second press is ignored
    /// until the outcome lands.
    fn start_task(&mut self, kind: TaskKind) {
        let status = self.status_for(kind);
        if status.in_flight {
            return;
        }
        status.in_flight = true;
        status.failed = false;
        status.message = format!("{} running...", kind.label());
        self.runtime.submit(kind);
    }

    fn nudge_volume(&mut self, delta: f32) {
        if let Some(control) = &self.volume_control {
            let current = self.volume.or_else(|| control.get()).unwrap_or(0.5);
            let next = (current + delta).clamp(0.0, 1.0);
            control.set(next);
            self.volume = Some(next);
        }
    }

    pub fn handle_ui_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Quit => self.should_quit = true,
            UiEvent::ToggleHelp => self.show_help = !self.show_help,
            UiEvent::NextPage => self.page = self.page.next(),
            UiEvent::PrevPage => self.page = self.page.prev(),
            UiEvent::GoPage(page) => self.page = page,
            UiEvent::RunTempPurge => self.start_task(TaskKind::TempPurge),
            UiEvent::RunDnsFlush => self.start_task(TaskKind::DnsFlush),
            UiEvent::ToggleTheme => {
                self.config.mutate(|c| c.theme = c.theme.toggled());
            }
            UiEvent::MediaPlayPause => self.runtime.media_command(MediaCommand::PlayPause),
            UiEvent::MediaNext => self.runtime.media_command(MediaCommand::Next),
            UiEvent::MediaPrev => self.runtime.media_command(MediaCommand::Previous),
            UiEvent::VolumeUp => self.nudge_volume(VOLUME_STEP),
            UiEvent::VolumeDown => self.nudge_volume(-VOLUME_STEP),
            UiEvent::Input(c) => self.edit_text(|s| s.push(c)),
            UiEvent::Newline => self.edit_text(|s| s.push('\n')),
            UiEvent::Backspace => self.edit_text(|s| {
                s.pop();
            }),
            UiEvent::CursorLeft => self.move_calendar(|d| d.pred_opt()),
            UiEvent::CursorRight => self.move_calendar(|d| d.succ_opt()),
            UiEvent::CursorUp => self.move_calendar(|d| d.checked_sub_days(Days::new(7))),
            UiEvent::CursorDown => self.move_calendar(|d| d.checked_add_days(Days::new(7))),
            UiEvent::None => {}
        }
    }

    /// Route text edits to the field backing the active page; both are
    /// persisted on every change, like the original auto-save.
    fn edit_text<F>(&mut self, f: F)
    where
        F: FnOnce(&mut String),
    {
        match self.page {
            Page::Notes => self.config.mutate(|c| f(&mut c.user_notes)),
            Page::Calendar => {
                let key = self.calendar_key();
                self.config.mutate(|c| {
                    let note = c.calendar_events.entry(key.clone()).or_default();
                    f(note);
                    if note.is_empty() {
                        c.calendar_events.remove(&key);
                    }
                });
            }
            _ => {}
        }
    }

    fn move_calendar<F>(&mut self, f: F)
    where
        F: FnOnce(NaiveDate) -> Option<NaiveDate>,
    {
        if self.page == Page::Calendar {
            if let Some(next) = f(self.calendar_cursor) {
                self.calendar_cursor = next;
            }
        }
    }

    pub fn calendar_key(&self) -> String {
        self.calendar_cursor.format("%Y-%m-%d").to_string()
    }

    pub fn calendar_note(&self) -> &str {
        self.config
            .get()
            .calendar_events
            .get(&self.calendar_key())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Run the dashboard TUI until the user quits.
pub fn run_dashboard(
    runtime: AppRuntime,
    config: ConfigStore,
    hardware: HardwareInfo,
    volume_control: Option<Box<dyn VolumeControl>>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = DashboardApp::new(runtime, config, hardware, volume_control);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    app.runtime.shutdown();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DashboardApp,
) -> Result<()> {
    loop {
        // Drain everything the workers produced since the last frame
        while let Some(event) = app.runtime.try_next_event() {
            app.apply_app_event(event);
        }

        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(Duration::from_millis(100)).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let ui_event = map_key(app.page, key);
                    app.handle_ui_event(ui_event);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
