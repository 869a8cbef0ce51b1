// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use rolodex_app::{
    AppCommand, AppEvent, AppState, Card, CardElement, CardRegion, EmployeeIndex, Focus,
    LoadState, NavDirection, OverlayInstance, OverlayKey, Point, RawBatch, Region,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const CARD_WIDTH: u16 = 36;
const CARD_HEIGHT: u16 = 5;
const IMAGE_WIDTH: u16 = 6;
const SUBMIT_WIDTH: u16 = 12;
const BUTTON_WIDTH: u16 = 8;
const CLOSE_WIDTH: u16 = 3;
const NO_RESULTS_TEXT: &str = "No results found";

/// Source of employee batches. `spawn_fetch` runs inline by default;
/// runtimes that talk to the network override it with a worker thread.
pub trait DirectoryRuntime {
    fn fetch_batch(&mut self) -> Result<RawBatch>;
    fn spawn_fetch(&mut self, request_id: u64, tx: Sender<InternalEvent>) -> Result<()> {
        let event = InternalEvent::fetch_result(request_id, self.fetch_batch());
        tx.send(event)
            .map_err(|_| anyhow!("fetch event channel closed"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    pub show_help_hint: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            show_help_hint: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
    BatchLoaded { request_id: u64, batch: RawBatch },
    BatchFailed { request_id: u64, error: String },
}

impl InternalEvent {
    pub fn fetch_result(request_id: u64, result: Result<RawBatch>) -> Self {
        match result {
            Ok(batch) => Self::BatchLoaded { request_id, batch },
            Err(error) => Self::BatchFailed {
                request_id,
                error: format!("{error:#}"),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OverlayLayout {
    area: Rect,
    previous: Rect,
    next: Rect,
    close: Rect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ScreenLayout {
    header: Rect,
    search_input: Rect,
    submit: Rect,
    gallery: Rect,
    status: Rect,
    columns: usize,
    rows: usize,
    scroll_row: usize,
    cards: Vec<CardRegion>,
    overlay: Option<OverlayLayout>,
}

#[derive(Debug, Clone, Default)]
struct ViewData {
    options: UiOptions,
    status_token: u64,
    fetch_request: u64,
    fetch_in_flight: bool,
    scroll_row: usize,
    layout: ScreenLayout,
}

pub fn run_app<R: DirectoryRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    options: UiOptions,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        options,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();

    start_fetch(state, runtime, &mut view_data, &internal_tx);

    let mut result = Ok(());
    loop {
        process_internal_events(state, &mut view_data, &internal_tx, &internal_rx);

        let mut frame_layout = None;
        let drawn = terminal.draw(|frame| {
            let layout = compute_layout(frame.area(), state, view_data.scroll_row);
            render(frame, state, &view_data, &layout);
            frame_layout = Some(layout);
        });
        if let Err(error) = drawn {
            result = Err(error).context("draw frame");
            break;
        }
        if let Some(layout) = frame_layout {
            sync_layout(state, &mut view_data, layout);
        }

        let has_event = match event::poll(Duration::from_millis(120)).context("poll event") {
            Ok(has_event) => has_event,
            Err(error) => {
                result = Err(error);
                break;
            }
        };
        if !has_event {
            continue;
        }
        match event::read().context("read event") {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                if handle_key_event(state, runtime, &mut view_data, &internal_tx, key) {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => {
                handle_mouse_event(state, &mut view_data, &internal_tx, mouse);
            }
            Ok(_) => {}
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen
    )
    .context("leave alternate screen")?;
    result
}

/// Stores the frame's layout and rebinds the card hit regions so clicks
/// resolve against what was actually drawn.
fn sync_layout(state: &mut AppState, view_data: &mut ViewData, layout: ScreenLayout) {
    view_data.scroll_row = layout.scroll_row;
    state.dispatch(AppCommand::BindCardRegions(layout.cards.clone()));
    view_data.layout = layout;
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
            InternalEvent::BatchLoaded { request_id, batch }
                if request_id == view_data.fetch_request =>
            {
                view_data.fetch_in_flight = false;
                view_data.scroll_row = 0;
                dispatch_command(state, view_data, tx, AppCommand::InstallBatch(batch));
            }
            InternalEvent::BatchFailed { request_id, error }
                if request_id == view_data.fetch_request =>
            {
                view_data.fetch_in_flight = false;
                tracing::warn!(%error, "employee fetch failed");
                dispatch_command(state, view_data, tx, AppCommand::FetchFailed(error));
            }
            InternalEvent::BatchLoaded { request_id, .. }
            | InternalEvent::BatchFailed { request_id, .. } => {
                tracing::debug!(request_id, "dropping stale fetch result");
            }
        }
    }
}

fn start_fetch<R: DirectoryRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    tx: &Sender<InternalEvent>,
) {
    if view_data.fetch_in_flight {
        emit_status(state, view_data, tx, "fetch already in progress");
        return;
    }
    view_data.fetch_request = view_data.fetch_request.saturating_add(1);
    view_data.fetch_in_flight = true;
    dispatch_command(state, view_data, tx, AppCommand::BeginFetch);

    if let Err(error) = runtime.spawn_fetch(view_data.fetch_request, tx.clone()) {
        view_data.fetch_in_flight = false;
        dispatch_command(
            state,
            view_data,
            tx,
            AppCommand::FetchFailed(format!("{error:#}")),
        );
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_secs(4));
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn dispatch_command(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    command: AppCommand,
) -> Vec<AppEvent> {
    let events = state.dispatch(command);
    if events
        .iter()
        .any(|event| matches!(event, AppEvent::StatusUpdated(_)))
    {
        view_data.status_token = view_data.status_token.saturating_add(1);
        schedule_status_clear(internal_tx, view_data.status_token);
    }
    events
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    dispatch_command(
        state,
        view_data,
        internal_tx,
        AppCommand::SetStatus(message.into()),
    );
}

fn handle_key_event<R: DirectoryRuntime>(
    state: &mut AppState,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('q') {
        return true;
    }
    if ctrl && key.code == KeyCode::Char('r') {
        start_fetch(state, runtime, view_data, internal_tx);
        return false;
    }

    if state.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            dispatch_command(state, view_data, internal_tx, AppCommand::ToggleHelp);
        }
        return false;
    }

    // Overlay keys are global: they reach the overlay whatever has focus.
    if let Some(overlay_key) = overlay_key_for(key) {
        let was_open = state.overlay_open();
        dispatch_command(
            state,
            view_data,
            internal_tx,
            AppCommand::OverlayKey(overlay_key),
        );
        if !was_open && overlay_key == OverlayKey::Escape && state.focus == Focus::Search {
            dispatch_command(state, view_data, internal_tx, AppCommand::FocusGallery);
        }
        return false;
    }

    match key.code {
        KeyCode::Tab => {
            dispatch_command(state, view_data, internal_tx, AppCommand::MoveCursor(1));
            return false;
        }
        KeyCode::BackTab => {
            dispatch_command(state, view_data, internal_tx, AppCommand::MoveCursor(-1));
            return false;
        }
        _ => {}
    }

    if state.focus == Focus::Search {
        match key.code {
            KeyCode::Enter => {
                dispatch_command(state, view_data, internal_tx, AppCommand::SubmitQuery);
            }
            KeyCode::Backspace => {
                dispatch_command(state, view_data, internal_tx, AppCommand::DeleteQueryChar);
            }
            KeyCode::Char(ch) if !ctrl => {
                dispatch_command(
                    state,
                    view_data,
                    internal_tx,
                    AppCommand::InsertQueryChar(ch),
                );
            }
            _ => {}
        }
        return false;
    }

    let row_step = view_data.layout.columns.max(1) as isize;
    match key.code {
        KeyCode::Char('/') => {
            dispatch_command(state, view_data, internal_tx, AppCommand::FocusSearch);
        }
        KeyCode::Char('?') => {
            dispatch_command(state, view_data, internal_tx, AppCommand::ToggleHelp);
        }
        KeyCode::Enter => {
            dispatch_command(state, view_data, internal_tx, AppCommand::ActivateCursor);
        }
        KeyCode::Down if !state.overlay_open() => {
            dispatch_command(
                state,
                view_data,
                internal_tx,
                AppCommand::MoveCursor(row_step),
            );
        }
        KeyCode::Up if !state.overlay_open() => {
            dispatch_command(
                state,
                view_data,
                internal_tx,
                AppCommand::MoveCursor(-row_step),
            );
        }
        _ => {}
    }
    false
}

fn overlay_key_for(key: KeyEvent) -> Option<OverlayKey> {
    match key.code {
        KeyCode::Esc => Some(OverlayKey::Escape),
        KeyCode::Left => Some(OverlayKey::Left),
        KeyCode::Right => Some(OverlayKey::Right),
        _ => None,
    }
}

fn handle_mouse_event(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    mouse: MouseEvent,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || state.help_visible {
        return;
    }
    let point = Point::new(mouse.column, mouse.row);

    // The overlay covers the page, so only its buttons react while it is up.
    if let Some(overlay) = view_data.layout.overlay {
        let command = if contains(overlay.close, point) {
            Some(AppCommand::CloseDetail)
        } else if contains(overlay.previous, point) {
            Some(AppCommand::Navigate(NavDirection::Previous))
        } else if contains(overlay.next, point) {
            Some(AppCommand::Navigate(NavDirection::Next))
        } else {
            None
        };
        if let Some(command) = command {
            dispatch_command(state, view_data, internal_tx, command);
        }
        return;
    }

    if contains(view_data.layout.submit, point) {
        dispatch_command(state, view_data, internal_tx, AppCommand::SubmitQuery);
        return;
    }
    if contains(view_data.layout.search_input, point) {
        dispatch_command(state, view_data, internal_tx, AppCommand::FocusSearch);
        return;
    }
    if contains(view_data.layout.gallery, point) {
        dispatch_command(state, view_data, internal_tx, AppCommand::FocusGallery);
        dispatch_command(state, view_data, internal_tx, AppCommand::ActivateAt(point));
    }
}

fn contains(rect: Rect, point: Point) -> bool {
    region(rect).contains(point)
}

fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

fn rect(region: Region) -> Rect {
    Rect::new(region.x, region.y, region.width, region.height)
}

fn compute_layout(area: Rect, state: &AppState, scroll_row: usize) -> ScreenLayout {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(3),
        ])
        .split(area);
    let search = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SUBMIT_WIDTH)])
        .split(sections[1]);

    let gallery = sections[2];
    let inner = Block::default().borders(Borders::ALL).inner(gallery);
    let columns = usize::from((inner.width / CARD_WIDTH).max(1));
    let rows = usize::from((inner.height / CARD_HEIGHT).max(1));
    let card_width = inner.width.min(CARD_WIDTH);
    let card_height = inner.height.min(CARD_HEIGHT);

    let visible = state
        .directory
        .as_ref()
        .map(|directory| {
            directory
                .gallery()
                .visible_cards()
                .map(|card| card.index)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let total_rows = visible.len().div_ceil(columns);
    let mut scroll_row = scroll_row.min(total_rows.saturating_sub(rows));
    if let Some(position) = state
        .cursor
        .and_then(|cursor| visible.iter().position(|index| *index == cursor))
    {
        let cursor_row = position / columns;
        if cursor_row < scroll_row {
            scroll_row = cursor_row;
        } else if cursor_row >= scroll_row + rows {
            scroll_row = cursor_row + 1 - rows;
        }
    }

    let cards = visible
        .iter()
        .enumerate()
        .filter_map(|(position, index)| {
            let row = position / columns;
            if row < scroll_row || row >= scroll_row + rows {
                return None;
            }
            let column = (position % columns) as u16;
            let x = inner.x + column * CARD_WIDTH;
            let y = inner.y + (row - scroll_row) as u16 * CARD_HEIGHT;
            Some(card_region(
                *index,
                Rect::new(x, y, card_width, card_height),
            ))
        })
        .collect();

    let overlay = state.overlay_open().then(|| overlay_layout(area));

    ScreenLayout {
        header: sections[0],
        search_input: search[0],
        submit: search[1],
        gallery,
        status: sections[3],
        columns,
        rows,
        scroll_row,
        cards,
        overlay,
    }
}

fn card_region(index: EmployeeIndex, bounds: Rect) -> CardRegion {
    let inner = Block::default().borders(Borders::ALL).inner(bounds);
    let image = Rect::new(inner.x, inner.y, IMAGE_WIDTH.min(inner.width), inner.height);
    let text_x = inner.x.saturating_add(image.width).saturating_add(1);
    let text_width = inner.width.saturating_sub(image.width + 1);
    let line = |offset: u16| {
        Region::new(
            text_x,
            inner.y + offset,
            text_width,
            u16::from(offset < inner.height),
        )
    };

    CardRegion {
        index,
        bounds: region(bounds),
        elements: vec![
            (CardElement::Image, region(image)),
            (CardElement::Name, line(0)),
            (CardElement::Email, line(1)),
            (CardElement::Location, line(2)),
        ],
    }
}

fn overlay_layout(area: Rect) -> OverlayLayout {
    let popup = centered_rect(60, 70, area);
    let inner = Block::default().borders(Borders::ALL).inner(popup);
    let button_row = inner.bottom().saturating_sub(1);
    let button_width = BUTTON_WIDTH.min(inner.width);
    OverlayLayout {
        area: popup,
        previous: Rect::new(inner.x, button_row, button_width, 1),
        next: Rect::new(
            inner.right().saturating_sub(button_width),
            button_row,
            button_width,
            1,
        ),
        close: Rect::new(
            popup.right().saturating_sub(CLOSE_WIDTH + 1),
            popup.y,
            CLOSE_WIDTH.min(popup.width),
            1,
        ),
    }
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    view_data: &ViewData,
    layout: &ScreenLayout,
) {
    let header_style = if state.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    let header = Paragraph::new(header_text(state))
        .style(header_style)
        .block(
            Block::default()
                .title("Employee Directory")
                .borders(Borders::ALL),
        );
    frame.render_widget(header, layout.header);

    let search_style = if state.focus == Focus::Search {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let input = Paragraph::new(state.query.as_str()).block(
        Block::default()
            .title("search")
            .borders(Borders::ALL)
            .border_style(search_style),
    );
    frame.render_widget(input, layout.search_input);
    let submit = Paragraph::new("search")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(submit, layout.submit);

    render_gallery(frame, state, layout);

    let status = Paragraph::new(status_text(state, view_data))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    if let (Some(overlay), Some(instance)) = (
        layout.overlay,
        state
            .directory
            .as_ref()
            .and_then(|directory| directory.overlay().instance()),
    ) {
        render_overlay(frame, overlay, instance);
    }

    if state.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn header_text(state: &AppState) -> String {
    if let Some(message) = &state.error_message {
        return message.clone();
    }
    match (&state.load, state.directory.as_ref()) {
        (LoadState::Loading, _) => "loading employees...".to_owned(),
        (_, Some(directory)) => format!("{} employees", directory.size()),
        _ => "no employees loaded".to_owned(),
    }
}

fn render_gallery(frame: &mut ratatui::Frame<'_>, state: &AppState, layout: &ScreenLayout) {
    let Some(directory) = state.directory.as_ref() else {
        let placeholder = if state.load == LoadState::Loading {
            "loading employees..."
        } else {
            ""
        };
        let body = Paragraph::new(placeholder)
            .alignment(Alignment::Center)
            .block(Block::default().title("gallery").borders(Borders::ALL));
        frame.render_widget(body, layout.gallery);
        return;
    };

    let gallery = directory.gallery();
    let title = format!(
        "gallery ({} of {})",
        gallery.visible_count(),
        gallery.len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(layout.gallery);
    frame.render_widget(block, layout.gallery);

    if directory.no_results_shown() {
        let indicator = Paragraph::new(NO_RESULTS_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(indicator, inner);
        return;
    }

    for region in &layout.cards {
        if let Some(card) = gallery.card(region.index) {
            render_card(frame, card, region, state.cursor == Some(region.index));
        }
    }
}

fn render_card(frame: &mut ratatui::Frame<'_>, card: &Card, region: &CardRegion, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
        rect(region.bounds),
    );

    for (element, area) in &region.elements {
        let area = rect(*area);
        if area.width == 0 || area.height == 0 {
            continue;
        }
        let width = usize::from(area.width);
        let widget = match element {
            CardElement::Image => Paragraph::new(card.initials.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::REVERSED)),
            CardElement::Name => Paragraph::new(truncate_label(&card.full_name, width))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            CardElement::Email => Paragraph::new(truncate_label(&card.email, width)),
            CardElement::Location => Paragraph::new(truncate_label(&card.location, width))
                .style(Style::default().fg(Color::Gray)),
            CardElement::Padding => continue,
        };
        frame.render_widget(widget, area);
    }
}

fn render_overlay(frame: &mut ratatui::Frame<'_>, overlay: OverlayLayout, instance: &OverlayInstance) {
    frame.render_widget(Clear, overlay.area);
    let body = Paragraph::new(overlay_text(instance)).block(
        Block::default()
            .title(instance.position_label())
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(body, overlay.area);
    frame.render_widget(Paragraph::new("[x]"), overlay.close);
    frame.render_widget(Paragraph::new("< prev"), overlay.previous);
    frame.render_widget(
        Paragraph::new("next >").alignment(Alignment::Right),
        overlay.next,
    );
}

fn overlay_text(instance: &OverlayInstance) -> String {
    format!(
        "photo: {}\n\n{}\n{}\n{}\n\n{}\n{}\nBirthday: {}",
        instance.full_image_url,
        instance.full_name,
        instance.email,
        instance.city,
        instance.phone,
        instance.address,
        instance.birthday,
    )
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ctrl+r reload employees | ? help\n\
gallery: tab/shift+tab next/prev card | up/down row | enter open | click open\n\
search: / focus | type to filter by name | enter or click search submit | esc leave\n\
detail: left/right prev/next | esc close | click < prev, next >, [x]\n\
help: esc or ? close"
}

fn status_text(state: &AppState, view_data: &ViewData) -> String {
    if state.help_visible {
        return String::new();
    }
    let focus = match state.focus {
        Focus::Gallery => "GALLERY",
        Focus::Search => "SEARCH",
    };
    let hints = if view_data.options.show_help_hint {
        if state.overlay_open() {
            " | left/right prev/next | esc close | ? help"
        } else {
            " | tab move | enter open | / search | ctrl+r reload | ? help | ctrl+q quit"
        }
    } else {
        ""
    };
    match &state.status_line {
        Some(status) => format!("{focus} | {status}{hints}"),
        None => format!("{focus}{hints}"),
    }
}

fn truncate_label(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    if max_chars <= 1 {
        return value.chars().take(max_chars).collect();
    }
    let mut out = value.chars().take(max_chars - 1).collect::<String>();
    out.push('~');
    out
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
