// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::directory::Directory;
use crate::error::DirectoryError;
use crate::gallery::{CardRegion, Point};
use crate::ids::EmployeeIndex;
use crate::model::RawBatch;
use crate::overlay::{NavDirection, OverlayKey, OverlayState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Gallery,
    Search,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub load: LoadState,
    pub directory: Option<Directory>,
    pub focus: Focus,
    pub query: String,
    pub cursor: Option<EmployeeIndex>,
    pub help_visible: bool,
    pub error_message: Option<String>,
    pub status_line: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            load: LoadState::Idle,
            directory: None,
            focus: Focus::Gallery,
            query: String::new(),
            cursor: None,
            help_visible: false,
            error_message: None,
            status_line: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    BeginFetch,
    InstallBatch(RawBatch),
    FetchFailed(String),
    BindCardRegions(Vec<CardRegion>),
    ActivateAt(Point),
    ActivateCursor,
    OverlayKey(OverlayKey),
    Navigate(NavDirection),
    CloseDetail,
    FocusSearch,
    FocusGallery,
    InsertQueryChar(char),
    DeleteQueryChar,
    SubmitQuery,
    MoveCursor(isize),
    ToggleHelp,
    SetStatus(String),
    ClearStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    FetchStarted,
    BatchInstalled { size: usize },
    LoadFailed(String),
    OverlayOpened(EmployeeIndex),
    OverlayClosed,
    FilterApplied { visible: usize },
    NoResultsShown,
    NoResultsCleared,
    FocusChanged(Focus),
    CursorMoved(EmployeeIndex),
    HelpToggled(bool),
    StatusUpdated(String),
    StatusCleared,
}

impl AppState {
    pub fn dispatch(&mut self, command: AppCommand) -> Vec<AppEvent> {
        match command {
            AppCommand::BeginFetch => {
                self.load = LoadState::Loading;
                vec![AppEvent::FetchStarted, self.set_status("loading employees")]
            }
            AppCommand::InstallBatch(batch) => self.install_batch(&batch),
            AppCommand::FetchFailed(reason) => self.fail_load(&DirectoryError::fetch(reason)),
            AppCommand::BindCardRegions(regions) => {
                if let Some(directory) = self.directory.as_mut() {
                    directory.bind_activation(regions);
                }
                Vec::new()
            }
            AppCommand::ActivateAt(point) => self.activate_at(point),
            AppCommand::ActivateCursor => match self.cursor {
                Some(index) => self.open_detail(index),
                None => Vec::new(),
            },
            AppCommand::OverlayKey(key) => self.handle_overlay_key(key),
            AppCommand::Navigate(direction) => self.navigate(direction),
            AppCommand::CloseDetail => self.close_detail(),
            AppCommand::FocusSearch => self.set_focus(Focus::Search),
            AppCommand::FocusGallery => self.set_focus(Focus::Gallery),
            AppCommand::InsertQueryChar(ch) => {
                self.query.push(ch);
                self.apply_query()
            }
            AppCommand::DeleteQueryChar => {
                if self.query.pop().is_none() {
                    return Vec::new();
                }
                self.apply_query()
            }
            AppCommand::SubmitQuery => self.apply_query(),
            AppCommand::MoveCursor(delta) => self.move_cursor(delta),
            AppCommand::ToggleHelp => {
                self.help_visible = !self.help_visible;
                vec![AppEvent::HelpToggled(self.help_visible)]
            }
            AppCommand::SetStatus(message) => vec![self.set_status(&message)],
            AppCommand::ClearStatus => {
                self.status_line = None;
                vec![AppEvent::StatusCleared]
            }
        }
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.directory
            .as_ref()
            .map(|directory| directory.overlay().state())
            .unwrap_or(OverlayState::Closed)
    }

    pub fn overlay_open(&self) -> bool {
        matches!(self.overlay_state(), OverlayState::Open(_))
    }

    pub fn no_results_shown(&self) -> bool {
        self.directory
            .as_ref()
            .map(Directory::no_results_shown)
            .unwrap_or(false)
    }

    /// Builds the new directory completely before swapping it in. A batch
    /// that fails to populate leaves the current directory untouched.
    fn install_batch(&mut self, batch: &RawBatch) -> Vec<AppEvent> {
        let mut directory = match Directory::from_batch(batch) {
            Ok(directory) => directory,
            Err(error) => return self.fail_load(&error),
        };
        directory.apply_query(&self.query);

        let size = directory.size();
        let no_results = directory.no_results_shown();
        let closed_overlay = self.overlay_open();
        self.directory = Some(directory);
        self.load = LoadState::Ready;
        self.error_message = None;
        self.cursor = self.first_visible();
        tracing::info!(size, "installed employee batch");

        let mut events = Vec::new();
        if closed_overlay {
            events.push(AppEvent::OverlayClosed);
        }
        events.push(AppEvent::BatchInstalled { size });
        if no_results {
            events.push(AppEvent::NoResultsShown);
        }
        events.push(self.set_status(&format!("loaded {size} employees")));
        events
    }

    fn fail_load(&mut self, error: &DirectoryError) -> Vec<AppEvent> {
        tracing::warn!(%error, "employee batch failed to load");
        let message = error.user_message();
        self.load = LoadState::Failed;
        self.error_message = Some(message.clone());
        vec![AppEvent::LoadFailed(message)]
    }

    fn activate_at(&mut self, point: Point) -> Vec<AppEvent> {
        let Some(directory) = self.directory.as_mut() else {
            return Vec::new();
        };
        match directory.activate_at(point) {
            Ok(Some(index)) => {
                self.cursor = Some(index);
                self.opened_events(index)
            }
            Ok(None) => Vec::new(),
            Err(error) => self.reject_transition(&error),
        }
    }

    fn open_detail(&mut self, index: EmployeeIndex) -> Vec<AppEvent> {
        let Some(directory) = self.directory.as_mut() else {
            return Vec::new();
        };
        match directory.open(index) {
            Ok(index) => self.opened_events(index),
            Err(error) => self.reject_transition(&error),
        }
    }

    fn handle_overlay_key(&mut self, key: OverlayKey) -> Vec<AppEvent> {
        let Some(directory) = self.directory.as_mut() else {
            return Vec::new();
        };
        let before = directory.overlay().state();
        match (before, directory.handle_overlay_key(key)) {
            (OverlayState::Open(_), OverlayState::Closed) => vec![AppEvent::OverlayClosed],
            (OverlayState::Open(_), OverlayState::Open(index)) => {
                self.cursor = Some(index);
                self.opened_events(index)
            }
            (OverlayState::Closed, _) => Vec::new(),
        }
    }

    fn navigate(&mut self, direction: NavDirection) -> Vec<AppEvent> {
        let Some(directory) = self.directory.as_mut() else {
            return Vec::new();
        };
        match directory.navigate(direction) {
            Some(index) => {
                self.cursor = Some(index);
                self.opened_events(index)
            }
            None => Vec::new(),
        }
    }

    fn close_detail(&mut self) -> Vec<AppEvent> {
        let closed = self
            .directory
            .as_mut()
            .map(Directory::close)
            .unwrap_or(false);
        if closed {
            vec![AppEvent::OverlayClosed]
        } else {
            Vec::new()
        }
    }

    fn opened_events(&mut self, index: EmployeeIndex) -> Vec<AppEvent> {
        let label = self
            .directory
            .as_ref()
            .and_then(|directory| directory.overlay().instance())
            .map(|instance| format!("{}: {}", instance.position_label(), instance.full_name));
        let mut events = vec![AppEvent::OverlayOpened(index)];
        if let Some(label) = label {
            events.push(self.set_status(&label));
        }
        events
    }

    fn reject_transition(&mut self, error: &DirectoryError) -> Vec<AppEvent> {
        tracing::warn!(%error, "rejected overlay transition");
        Vec::new()
    }

    fn set_focus(&mut self, focus: Focus) -> Vec<AppEvent> {
        if self.focus == focus {
            return Vec::new();
        }
        self.focus = focus;
        vec![AppEvent::FocusChanged(focus)]
    }

    fn apply_query(&mut self) -> Vec<AppEvent> {
        let Some(directory) = self.directory.as_mut() else {
            return Vec::new();
        };
        let was_shown = directory.no_results_shown();
        let visible = directory.apply_query(&self.query);
        let shown = directory.no_results_shown();

        let mut events = vec![AppEvent::FilterApplied { visible }];
        match (was_shown, shown) {
            (false, true) => events.push(AppEvent::NoResultsShown),
            (true, false) => events.push(AppEvent::NoResultsCleared),
            _ => {}
        }

        let cursor_hidden = self
            .cursor
            .and_then(|index| {
                self.directory
                    .as_ref()
                    .and_then(|directory| directory.gallery().card(index))
            })
            .map(|card| !card.visible)
            .unwrap_or(true);
        if cursor_hidden {
            self.cursor = self.first_visible();
        }
        events
    }

    fn first_visible(&self) -> Option<EmployeeIndex> {
        self.directory
            .as_ref()
            .and_then(|directory| directory.gallery().visible_cards().next())
            .map(|card| card.index)
    }

    /// Steps the cursor through visible cards, wrapping at both ends.
    fn move_cursor(&mut self, delta: isize) -> Vec<AppEvent> {
        let Some(directory) = self.directory.as_ref() else {
            return Vec::new();
        };
        let visible = directory
            .gallery()
            .visible_cards()
            .map(|card| card.index)
            .collect::<Vec<_>>();
        if visible.is_empty() {
            self.cursor = None;
            return Vec::new();
        }

        let current = self
            .cursor
            .and_then(|cursor| visible.iter().position(|index| *index == cursor))
            .unwrap_or(0) as isize;
        let len = visible.len() as isize;
        let next = visible[(current + delta).rem_euclid(len) as usize];
        self.cursor = Some(next);
        vec![AppEvent::CursorMoved(next)]
    }

    fn set_status(&mut self, message: &str) -> AppEvent {
        self.status_line = Some(message.to_owned());
        AppEvent::StatusUpdated(message.to_owned())
    }
}
