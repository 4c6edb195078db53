// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use fnboard_app::{
    AppCommand, AppEvent, AppState, BRAND_LABEL, DashboardConfig, FilterStore, FunctionRecord,
    LinkTarget, NavLink, NavMenu, OwnerFilter, OwnerFilterController, OwnerMenuEntry,
    RenderResult, brand_link, nav_links, owner_initials, render_listing,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use time::OffsetDateTime;

const FILTER_MARK_ACTIVE: &str = "▼";
const OWNER_MARK_ACTIVE: &str = "✓";
const STATUS_CLEAR_AFTER: Duration = Duration::from_secs(4);
const TABLE_COLUMNS: [&str; 8] = [
    "Owner",
    "",
    "Name",
    "Repository",
    "SHA",
    "Deployed",
    "Invocations",
    "Replicas",
];

pub trait AppRuntime {
    fn load_functions(&mut self) -> Result<Vec<FunctionRecord>>;
    fn spawn_function_load(&mut self, request_id: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let result = self
            .load_functions()
            .map_err(|error| format!("{error:#}"));
        tx.send(InternalEvent::FunctionsLoaded { request_id, result })
            .map_err(|_| anyhow::anyhow!("function load channel closed"))?;
        Ok(())
    }
    fn open_external(&mut self, href: &str) -> Result<()>;
}

/// Injected deployment flags plus the persisted owner filter.
#[derive(Debug)]
pub struct Dashboard<S> {
    pub config: DashboardConfig,
    pub filter: OwnerFilterController<S>,
}

impl<S: FilterStore> Dashboard<S> {
    /// Restores the owner filter against the location the app starts at.
    pub fn initialize(config: DashboardConfig, store: S, state: &AppState) -> Result<Self> {
        let context = state.context_id().unwrap_or_default();
        let filter = OwnerFilterController::initialize(store, context, config.known_org_ids())
            .context("restore owner filter")?;
        Ok(Self { config, filter })
    }
}

#[derive(Debug)]
pub enum InternalEvent {
    ClearStatus {
        token: u64,
    },
    FunctionsLoaded {
        request_id: u64,
        result: std::result::Result<Vec<FunctionRecord>, String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct OwnerMenuUiState {
    visible: bool,
    cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct ViewData {
    functions: Vec<FunctionRecord>,
    loading: bool,
    load_request: u64,
    selected_row: usize,
    owner_menu: OwnerMenuUiState,
    help_visible: bool,
    status_token: u64,
}

pub fn run_app<R: AppRuntime, S: FilterStore>(
    state: &mut AppState,
    dashboard: &mut Dashboard<S>,
    runtime: &mut R,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData::default();
    let (internal_tx, internal_rx) = mpsc::channel();

    start_function_load(state, runtime, &mut view_data, &internal_tx);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, dashboard, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if has_event {
            match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(
                        state,
                        dashboard,
                        runtime,
                        &mut view_data,
                        &internal_tx,
                        key,
                    ) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn start_function_load<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    view_data.loading = true;
    view_data.load_request = view_data.load_request.saturating_add(1);
    tracing::debug!(request_id = view_data.load_request, "loading functions");

    if let Err(error) = runtime.spawn_function_load(view_data.load_request, internal_tx.clone()) {
        view_data.loading = false;
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("load failed: {error:#}"),
        );
    }
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
            InternalEvent::FunctionsLoaded { request_id, result } => {
                handle_functions_loaded(state, view_data, tx, request_id, result);
            }
        }
    }
}

fn handle_functions_loaded(
    state: &mut AppState,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
    request_id: u64,
    result: std::result::Result<Vec<FunctionRecord>, String>,
) {
    if request_id != view_data.load_request {
        return;
    }
    view_data.loading = false;

    match result {
        Ok(functions) => {
            tracing::info!(count = functions.len(), "functions loaded");
            let message = match functions.len() {
                1 => "1 function".to_owned(),
                count => format!("{count} functions"),
            };
            view_data.functions = functions;
            view_data.selected_row = 0;
            view_data.owner_menu = OwnerMenuUiState::default();
            emit_status(state, view_data, tx, message);
        }
        Err(error) => {
            tracing::warn!(%error, "function load failed");
            emit_status(
                state,
                view_data,
                tx,
                format!("load failed: {error}; check [functions].path or run with --demo"),
            );
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(STATUS_CLEAR_AFTER);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token);
}

fn listing<'a>(filter: &OwnerFilter, view_data: &'a ViewData) -> RenderResult<'a> {
    render_listing(&view_data.functions, view_data.loading, |owner| {
        filter.matches(owner)
    })
}

fn handle_key_event<R: AppRuntime, S: FilterStore>(
    state: &mut AppState,
    dashboard: &mut Dashboard<S>,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if view_data.help_visible {
        view_data.help_visible = false;
        return false;
    }

    if view_data.owner_menu.visible {
        handle_owner_menu_key(state, dashboard, view_data, internal_tx, key);
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('?') => view_data.help_visible = true,
        KeyCode::Char('j') | KeyCode::Down => {
            move_selection(dashboard.filter.filter(), view_data, 1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            move_selection(dashboard.filter.filter(), view_data, -1);
        }
        KeyCode::Char('g') | KeyCode::Home => view_data.selected_row = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let len = listing(dashboard.filter.filter(), view_data).rows().len();
            view_data.selected_row = len.saturating_sub(1);
        }
        KeyCode::Enter => activate_selected_row(state, dashboard, view_data),
        KeyCode::Char('o') => open_owner_menu(state, dashboard, view_data, internal_tx),
        KeyCode::Char('x') => {
            if dashboard.filter.filter().is_active() {
                let result = dashboard.filter.clear_filter();
                after_filter_change(state, dashboard, view_data, internal_tx, result);
            } else {
                emit_status(state, view_data, internal_tx, "no owner filter to clear");
            }
        }
        KeyCode::Char('m') => {
            state.dispatch(AppCommand::ToggleMenu);
        }
        KeyCode::Char('0') => {
            follow_link(state, runtime, view_data, internal_tx, &brand_link());
        }
        KeyCode::Char(digit @ '1'..='9') if state.menu.is_expanded() => {
            let index = digit
                .to_digit(10)
                .map(|value| value as usize - 1)
                .unwrap_or_default();
            activate_nav_link(state, dashboard, runtime, view_data, internal_tx, index);
        }
        KeyCode::Char('r') => start_function_load(state, runtime, view_data, internal_tx),
        KeyCode::Esc => {
            if let Some(home) = detail_parent(state) {
                navigate(state, home);
            } else {
                state.dispatch(AppCommand::ClearStatus);
            }
        }
        _ => {}
    }

    false
}

fn move_selection(filter: &OwnerFilter, view_data: &mut ViewData, delta: isize) {
    let len = listing(filter, view_data).rows().len();
    if len == 0 {
        view_data.selected_row = 0;
        return;
    }
    let next = (view_data.selected_row as isize + delta).clamp(0, len as isize - 1);
    view_data.selected_row = next as usize;
}

fn activate_selected_row<S: FilterStore>(
    state: &mut AppState,
    dashboard: &Dashboard<S>,
    view_data: &ViewData,
) {
    let target = {
        let rows = listing(dashboard.filter.filter(), view_data);
        let Some(row) = rows.rows().get(view_data.selected_row) else {
            return;
        };
        let context = state
            .context_id()
            .unwrap_or(row.record.git_owner.as_str());
        row.record.route(context)
    };
    navigate(state, target);
}

fn navigate(state: &mut AppState, target: String) {
    for event in state.dispatch(AppCommand::Navigate(target)) {
        if let AppEvent::LocationChanged(location) = event {
            tracing::debug!(%location, "navigated");
        }
    }
}

/// The dashboard root when the location points below it.
fn detail_parent(state: &AppState) -> Option<String> {
    let mut segments = state.location.split('/').filter(|segment| !segment.is_empty());
    let context = segments.next()?;
    segments.next()?;
    Some(format!("/{context}"))
}

fn detail_record<'a>(state: &AppState, functions: &'a [FunctionRecord]) -> Option<&'a FunctionRecord> {
    let mut segments = state.location.split('/').filter(|segment| !segment.is_empty());
    segments.next()?;
    let name = segments.next()?;
    functions.iter().find(|record| record.name == name)
}

fn activate_nav_link<R: AppRuntime, S: FilterStore>(
    state: &mut AppState,
    dashboard: &Dashboard<S>,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    index: usize,
) {
    let links = nav_links(&dashboard.config, &state.location);
    let Some(link) = links.get(index) else {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("no menu link {}", index + 1),
        );
        return;
    };

    follow_link(state, runtime, view_data, internal_tx, link);
}

fn follow_link<R: AppRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    link: &NavLink,
) {
    match &link.target {
        LinkTarget::Route(to) => navigate(state, to.clone()),
        LinkTarget::External(href) => {
            let message = match runtime.open_external(href) {
                Ok(()) => format!("opened {}", link.label),
                Err(error) => format!("open {} failed: {error:#}", link.label),
            };
            emit_status(state, view_data, internal_tx, message);
        }
    }
}

fn open_owner_menu<S: FilterStore>(
    state: &mut AppState,
    dashboard: &Dashboard<S>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let entries = dashboard.filter.owner_menu(&view_data.functions);
    if entries.is_empty() {
        emit_status(state, view_data, internal_tx, "no owners to filter by");
        return;
    }

    let cursor = entries
        .iter()
        .position(|entry| matches!(entry, OwnerMenuEntry::Owner { active: true, .. }))
        .unwrap_or(0);
    view_data.owner_menu = OwnerMenuUiState {
        visible: true,
        cursor,
    };
}

fn handle_owner_menu_key<S: FilterStore>(
    state: &mut AppState,
    dashboard: &mut Dashboard<S>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let entries = dashboard.filter.owner_menu(&view_data.functions);
    let last = entries.len().saturating_sub(1);
    let menu = &mut view_data.owner_menu;

    match key.code {
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('q') => menu.visible = false,
        KeyCode::Char('j') | KeyCode::Down => menu.cursor = (menu.cursor + 1).min(last),
        KeyCode::Char('k') | KeyCode::Up => menu.cursor = menu.cursor.saturating_sub(1),
        KeyCode::Char('g') | KeyCode::Home => menu.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => menu.cursor = last,
        KeyCode::Enter => {
            menu.visible = false;
            let Some(entry) = entries.into_iter().nth(menu.cursor) else {
                return;
            };
            let result = match entry {
                OwnerMenuEntry::Owner { name, .. } => dashboard.filter.set_filter(name),
                OwnerMenuEntry::Clear => dashboard.filter.clear_filter(),
            };
            after_filter_change(state, dashboard, view_data, internal_tx, result);
        }
        _ => {}
    }
}

fn after_filter_change<S: FilterStore>(
    state: &mut AppState,
    dashboard: &Dashboard<S>,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    result: Result<()>,
) {
    view_data.selected_row = 0;
    let filter = dashboard.filter.filter();
    let message = match result {
        Ok(()) if filter.is_active() => format!("owner: {}", filter.as_str()),
        Ok(()) => "owner filter cleared".to_owned(),
        Err(error) => {
            tracing::warn!(error = %format!("{error:#}"), "owner filter not persisted");
            format!("filter not saved: {error:#}")
        }
    };
    emit_status(state, view_data, internal_tx, message);
}

fn render<S: FilterStore>(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    dashboard: &Dashboard<S>,
    view_data: &ViewData,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let nav_items = nav_bar_items(state, &dashboard.config);
    let mut spans = Vec::with_capacity(nav_items.len() * 2);
    for (index, (label, active)) in nav_items.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let style = if active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
    }
    let nav = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(format!("{BRAND_LABEL} (0)"))
                .borders(Borders::ALL),
        );
    frame.render_widget(nav, layout[0]);

    let now = OffsetDateTime::now_utc();
    render_function_table(frame, layout[1], dashboard.filter.filter(), view_data, now);

    let status = Paragraph::new(status_text(state))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout[2]);

    if let Some(record) = detail_record(state, &view_data.functions) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);
        let detail = Paragraph::new(detail_text(record, now)).block(
            Block::default()
                .title(record.name.as_str())
                .borders(Borders::ALL),
        );
        frame.render_widget(detail, area);
    }

    if view_data.owner_menu.visible {
        let entries = dashboard.filter.owner_menu(&view_data.functions);
        let area = centered_rect(40, 50, frame.area());
        frame.render_widget(Clear, area);
        let menu = Paragraph::new(owner_menu_text(&entries, view_data.owner_menu.cursor)).block(
            Block::default()
                .title("owner")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(menu, area);
    }

    if view_data.help_visible {
        let area = centered_rect(70, 50, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn render_function_table(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    filter: &OwnerFilter,
    view_data: &ViewData,
    now: OffsetDateTime,
) {
    let rows = listing(filter, view_data);
    let title = table_title(&rows, view_data.functions.len());

    if let Some(text) = placeholder_text(&rows, filter) {
        let placeholder = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(TABLE_COLUMNS.iter().enumerate().map(|(index, label)| {
        Cell::from(header_label(index, label, filter)).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));
    let body = rows
        .rows()
        .iter()
        .map(|row| Row::new(row_cells(row.record, now).map(Cell::from)));
    let widths = [
        Constraint::Length(18),
        Constraint::Length(3),
        Constraint::Min(12),
        Constraint::Min(12),
        Constraint::Length(8),
        Constraint::Length(16),
        Constraint::Length(12),
        Constraint::Length(9),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(Block::default().borders(Borders::ALL).title(title));
    let mut table_state = TableState::default().with_selected(Some(view_data.selected_row));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn nav_bar_items(state: &AppState, config: &DashboardConfig) -> Vec<(String, bool)> {
    match state.menu {
        NavMenu::Collapsed => vec![
            (state.location.clone(), false),
            ("m menu".to_owned(), false),
        ],
        NavMenu::Expanded => {
            let mut items = nav_links(config, &state.location)
                .into_iter()
                .enumerate()
                .map(|(index, link)| (format!("{} {}", index + 1, link.label), link.active))
                .collect::<Vec<_>>();
            items.push(("m close".to_owned(), false));
            items
        }
    }
}

fn table_title(rows: &RenderResult<'_>, total: usize) -> String {
    match rows {
        RenderResult::Rows(visible) => format!("functions {}/{total}", visible.len()),
        RenderResult::Loading | RenderResult::Empty => "functions".to_owned(),
    }
}

fn header_label(index: usize, label: &str, filter: &OwnerFilter) -> String {
    if index == 0 && filter.is_active() {
        format!("{label} {FILTER_MARK_ACTIVE} {}", filter.as_str())
    } else {
        label.to_owned()
    }
}

fn placeholder_text(rows: &RenderResult<'_>, filter: &OwnerFilter) -> Option<String> {
    match rows {
        RenderResult::Loading => Some("loading functions...".to_owned()),
        RenderResult::Empty => Some("No functions available.".to_owned()),
        RenderResult::Rows(visible) if visible.is_empty() => Some(format!(
            "No functions owned by {}. Press x to clear the owner filter.",
            filter.as_str()
        )),
        RenderResult::Rows(_) => None,
    }
}

fn row_cells(record: &FunctionRecord, now: OffsetDateTime) -> [String; 8] {
    [
        record.git_owner.clone(),
        owner_initials(&record.git_owner),
        record.name.clone(),
        record.git_repo.clone(),
        record.short_sha.clone(),
        format_deployed(record.deployed_at, now),
        format_count(record.invocation_count),
        format!("{}/{}", record.available_replicas, record.replicas),
    ]
}

fn detail_text(record: &FunctionRecord, now: OffsetDateTime) -> String {
    [
        format!("owner: {}", record.git_owner),
        format!("repository: {}", record.git_repo),
        format!("sha: {}", record.short_sha),
        format!("deployed: {}", format_deployed(record.deployed_at, now)),
        format!("invocations: {}", format_count(record.invocation_count)),
        format!(
            "replicas: {}/{}",
            record.available_replicas, record.replicas
        ),
        String::new(),
        "esc back".to_owned(),
    ]
    .join("\n")
}

fn owner_menu_text(entries: &[OwnerMenuEntry], cursor: usize) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    for (index, entry) in entries.iter().enumerate() {
        let pointer = if index == cursor { "> " } else { "  " };
        match entry {
            OwnerMenuEntry::Owner { name, active } => {
                let mark = if *active {
                    format!(" {OWNER_MARK_ACTIVE}")
                } else {
                    String::new()
                };
                lines.push(format!("{pointer}{name}{mark}"));
            }
            OwnerMenuEntry::Clear => {
                lines.push("  ──────".to_owned());
                lines.push(format!("{pointer}{}", entry.label()));
            }
        }
    }
    lines.join("\n")
}

fn format_deployed(deployed_at: Option<OffsetDateTime>, now: OffsetDateTime) -> String {
    let Some(deployed_at) = deployed_at else {
        return "-".to_owned();
    };

    let elapsed = now - deployed_at;
    if elapsed.is_negative() {
        return "just now".to_owned();
    }

    match elapsed.whole_minutes() {
        0 => "just now".to_owned(),
        minutes @ 1..=59 => ago(minutes, "minute"),
        60..=1_439 => ago(elapsed.whole_hours(), "hour"),
        1_440..=43_199 => ago(elapsed.whole_days(), "day"),
        _ => deployed_at.date().to_string(),
    }
}

fn ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

fn status_text(state: &AppState) -> String {
    let default = "j/k move | enter open | o owner | x clear | m menu | r reload | ? help | q quit";
    match &state.status_line {
        Some(status) => format!("{status} | {default}"),
        None => default.to_owned(),
    }
}

fn help_overlay_text() -> &'static str {
    "global: q or ctrl+c quit | ? help | r reload functions\n\
table: j/k up/down | g/G first/last | enter open function | esc back\n\
owner: o open owner menu | x clear owner filter\n\
owner menu: j/k move | enter select | esc close\n\
menu: m expand/collapse | 1-9 follow link while expanded | 0 OpenFaaS Cloud docs"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
