use chrono::{Datelike, NaiveDate, Weekday};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
};

use crate::ui::formatters::format_size;

use super::app::{ActionStatus, DashboardApp, Page};
use super::widgets::{palette, usage_gauge, Palette};

/// Main render function
pub fn render_ui(frame: &mut Frame, app: &DashboardApp) {
    let area = frame.area();
    let pal = palette(app.config.get().theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with page tabs
            Constraint::Min(0),    // Active page
            Constraint::Length(3), // Media bar
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], app, &pal);

    match app.page {
        Page::Dashboard => render_dashboard(frame, chunks[1], app, &pal),
        Page::Optimize => render_optimize(frame, chunks[1], app, &pal),
        Page::Notes => render_notes(frame, chunks[1], app, &pal),
        Page::Calendar => render_calendar(frame, chunks[1], app, &pal),
        Page::Settings => render_settings(frame, chunks[1], app, &pal),
    }

    render_media_bar(frame, chunks[2], app, &pal);
    render_hints(frame, chunks[3], app, &pal);

    if app.show_help {
        render_help_overlay(frame, area, &pal);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, p)| Line::from(format!(" {} {} ", i + 1, p.title())))
        .collect();

    let selected = Page::ALL.iter().position(|p| *p == app.page).unwrap_or(0);

    let title = if app.show_welcome && !app.config.get().username.is_empty() {
        format!(" systune - welcome, {} ", app.config.get().username)
    } else {
        " systune ".to_string()
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(pal.border)),
        )
        .style(Style::default().fg(pal.dimmed))
        .highlight_style(
            Style::default()
                .fg(pal.highlight_fg)
                .bg(pal.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn render_dashboard(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let cpu = usage_gauge(
        app.snapshot.cpu_percent,
        format!("CPU {:.1}%", app.snapshot.cpu_percent),
    )
    .block(card(" CPU Usage ", pal));
    frame.render_widget(cpu, rows[0]);

    let ram = usage_gauge(
        app.snapshot.ram_percent,
        format!("RAM {:.1}%", app.snapshot.ram_percent),
    )
    .block(card(" RAM Usage ", pal));
    frame.render_widget(ram, rows[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_hardware_card(frame, bottom[0], app, pal);
    render_processes_card(frame, bottom[1], app, pal);
}

fn render_hardware_card(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let hw = &app.hardware;
    let lines = vec![
        Line::from(vec![
            Span::styled("CPU  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(hw.cpu_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("GPU  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(hw.gpu_name.clone()),
        ]),
        Line::from(vec![
            Span::styled("RAM  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_size(hw.ram_total_bytes)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(pal.text))
        .wrap(Wrap { trim: true })
        .block(card(" Components ", pal));

    frame.render_widget(paragraph, area);
}

fn render_processes_card(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let header = Row::new(vec![
        Cell::from("Process").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Memory").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .height(1);

    let rows: Vec<Row> = app
        .snapshot
        .top_processes
        .iter()
        .map(|(name, bytes)| {
            Row::new(vec![
                Cell::from(name.clone()),
                Cell::from(format_size(*bytes)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(65), Constraint::Length(12)])
        .header(header)
        .style(Style::default().fg(pal.text))
        .block(card(" Top RAM Processes ", pal));

    frame.render_widget(table, area);
}

fn render_optimize(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    render_action_card(
        frame,
        rows[0],
        " Clean Temporary Files [t] ",
        "Deletes everything under the OS temp directory. Entries in use are skipped.",
        &app.temp_status,
        pal,
    );
    render_action_card(
        frame,
        rows[1],
        " Flush DNS Cache [d] ",
        "Clears the OS resolver cache where the platform supports it.",
        &app.dns_status,
        pal,
    );
}

fn render_action_card(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    description: &str,
    status: &ActionStatus,
    pal: &Palette,
) {
    let status_line = if status.message.is_empty() {
        Line::from(Span::styled("Ready.", Style::default().fg(pal.dimmed)))
    } else {
        let color = if status.in_flight {
            pal.dimmed
        } else if status.failed {
            Color::Red
        } else {
            Color::Green
        };
        Line::from(Span::styled(status.message.clone(), Style::default().fg(color)))
    };

    let paragraph = Paragraph::new(vec![Line::from(description.to_string()), status_line])
        .style(Style::default().fg(pal.text))
        .wrap(Wrap { trim: true })
        .block(card(title, pal));

    frame.render_widget(paragraph, area);
}

fn render_notes(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let notes = &app.config.get().user_notes;

    let body = if notes.is_empty() {
        Text::from(Span::styled(
            "Type your notes here... they save automatically.",
            Style::default().fg(pal.dimmed),
        ))
    } else {
        Text::from(format!("{}▌", notes))
    };

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(pal.text))
        .wrap(Wrap { trim: false })
        .block(card(" Notes ", pal));

    frame.render_widget(paragraph, area);
}

fn render_calendar(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    let month_title = format!(" {} ", app.calendar_cursor.format("%B %Y"));
    let grid = Paragraph::new(month_grid(
        app.calendar_cursor,
        &app.config.get().calendar_events,
        pal,
    ))
    .style(Style::default().fg(pal.text))
    .block(card(&month_title, pal));
    frame.render_widget(grid, cols[0]);

    let note = app.calendar_note();
    let note_title = format!(" Note for {} ", app.calendar_key());
    let body = if note.is_empty() {
        Text::from(Span::styled(
            "Type a note for the selected date...",
            Style::default().fg(pal.dimmed),
        ))
    } else {
        Text::from(format!("{}▌", note))
    };

    let paragraph = Paragraph::new(body)
        .style(Style::default().fg(pal.text))
        .wrap(Wrap { trim: false })
        .block(card(&note_title, pal));
    frame.render_widget(paragraph, cols[1]);
}

/// Build the month view: one line of weekday headers, then one line per
/// week. The selected day is reversed; days with a note use the accent
/// color.
fn month_grid(
    cursor: NaiveDate,
    events: &std::collections::BTreeMap<String, String>,
    pal: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        "Mo Tu We Th Fr Sa Su",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let first = cursor.with_day(1).unwrap_or(cursor);
    let lead = first.weekday().num_days_from_monday() as usize;

    let mut spans: Vec<Span> = vec![Span::raw("   ".repeat(lead))];
    let mut day = first;

    loop {
        let key = day.format("%Y-%m-%d").to_string();
        let has_note = events.get(&key).map(|n| !n.is_empty()).unwrap_or(false);

        let mut style = Style::default();
        if has_note {
            style = style.fg(pal.accent).add_modifier(Modifier::BOLD);
        }
        if day == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        spans.push(Span::styled(format!("{:2}", day.day()), style));
        spans.push(Span::raw(" "));

        if day.weekday() == Weekday::Sun {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }

        day = match day.succ_opt() {
            Some(next) if next.month() == cursor.month() => next,
            _ => break,
        };
    }

    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    lines
}

fn render_settings(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let cfg = app.config.get();

    let available = |present: bool| {
        if present {
            Span::styled("available", Style::default().fg(Color::Green))
        } else {
            Span::styled("not available", Style::default().fg(pal.dimmed))
        }
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("Theme      ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("{:?}  (press t to toggle)", cfg.theme)),
        ]),
        Line::from(vec![
            Span::styled("User       ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(if cfg.username.is_empty() {
                "-".to_string()
            } else {
                cfg.username.clone()
            }),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Media      ", Style::default().add_modifier(Modifier::BOLD)),
            available(app.runtime.media_available()),
        ]),
        Line::from(vec![
            Span::styled("Volume     ", Style::default().add_modifier(Modifier::BOLD)),
            available(app.volume_control.is_some()),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(pal.text))
        .block(card(" Settings ", pal));

    frame.render_widget(paragraph, area);
}

fn render_media_bar(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let volume_str = match app.volume {
        Some(v) => format!("vol {:.0}%", v * 100.0),
        None => "vol n/a".to_string(),
    };

    let line = if !app.runtime.media_available() {
        Line::from(vec![
            Span::styled("media not available", Style::default().fg(pal.dimmed)),
            Span::raw("   "),
            Span::raw(volume_str),
        ])
    } else {
        match &app.media {
            Some(state) if !state.title.is_empty() || !state.artist.is_empty() => {
                let icon = if state.is_playing { "▶" } else { "⏸" };
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", icon, state.title),
                        Style::default().fg(pal.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", state.artist),
                        Style::default().fg(pal.text),
                    ),
                    Span::raw("   "),
                    Span::raw(volume_str),
                ])
            }
            _ => Line::from(vec![
                Span::styled("nothing playing", Style::default().fg(pal.dimmed)),
                Span::raw("   "),
                Span::raw(volume_str),
            ]),
        }
    };

    let paragraph = Paragraph::new(line).block(card(" Media ", pal));
    frame.render_widget(paragraph, area);
}

fn render_hints(frame: &mut Frame, area: Rect, app: &DashboardApp, pal: &Palette) {
    let hints = match app.page {
        Page::Optimize => "Tab pages │ t temp clean │ d dns flush │ space play/pause │ +/- volume │ q quit",
        Page::Notes | Page::Calendar => "Tab pages │ type to edit │ arrows move date │ Esc quit",
        Page::Settings => "Tab pages │ t toggle theme │ q quit",
        _ => "Tab pages │ 1-5 jump │ space play/pause │ n/p track │ +/- volume │ ? help │ q quit",
    };

    let paragraph = Paragraph::new(Line::from(hints)).style(Style::default().fg(pal.dimmed));
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, pal: &Palette) {
    let help_text = r#"
    systune - Help

    Keyboard Shortcuts:
    ─────────────────────────────────────
    q / Esc     Quit the application
    ? / h       Toggle this help screen
    Tab         Next page
    Shift+Tab   Previous page
    1-5         Jump to page
    t           Temp clean (Optimize) / theme (Settings)
    d           DNS flush (Optimize)
    space n p   Media play-pause / next / previous
    + / -       Volume up / down

    Press ? again to close this help
    "#;

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.accent))
        .style(Style::default().bg(Color::DarkGray));

    let paragraph = Paragraph::new(help_text).block(block);

    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(paragraph, popup_area);
}

fn card<'a>(title: &str, pal: &Palette) -> Block<'a> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(pal.border))
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
