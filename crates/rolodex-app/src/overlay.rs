// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use crate::error::DirectoryResult;
use crate::ids::EmployeeIndex;
use crate::model::EmployeeRecord;
use crate::store::EmployeeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

/// Keys the overlay listens to regardless of whether it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKey {
    Escape,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    Closed,
    Open(EmployeeIndex),
}

/// The mounted detail view for one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInstance {
    pub index: EmployeeIndex,
    pub total: usize,
    pub full_image_url: String,
    pub full_name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    pub address: String,
    pub birthday: String,
}

impl OverlayInstance {
    fn mount(record: &EmployeeRecord, total: usize) -> Self {
        Self {
            index: record.index,
            total,
            full_image_url: record.full_image_url.clone(),
            full_name: record.full_name.clone(),
            email: record.email.clone(),
            city: record.city.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            birthday: record.birthday.clone(),
        }
    }

    /// One-based position label, e.g. "3 of 12".
    pub fn position_label(&self) -> String {
        format!("{} of {}", self.index.get() + 1, self.total)
    }
}

#[derive(Debug, Clone)]
pub struct DetailOverlay {
    store: Arc<EmployeeStore>,
    instance: Option<OverlayInstance>,
}

impl DetailOverlay {
    pub fn new(store: Arc<EmployeeStore>) -> Self {
        Self {
            store,
            instance: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        match &self.instance {
            Some(instance) => OverlayState::Open(instance.index),
            None => OverlayState::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.instance.is_some()
    }

    pub fn current_index(&self) -> Option<EmployeeIndex> {
        self.instance.as_ref().map(|instance| instance.index)
    }

    pub fn instance(&self) -> Option<&OverlayInstance> {
        self.instance.as_ref()
    }

    /// Number of overlay instances on screen; zero or one.
    pub fn instance_count(&self) -> usize {
        usize::from(self.instance.is_some())
    }

    /// Shows `index`, replacing any current instance. An out-of-range index
    /// leaves the overlay exactly as it was.
    pub fn open(&mut self, index: EmployeeIndex) -> DirectoryResult<&OverlayInstance> {
        let record = self.store.get(index)?;
        let total = self.store.size();
        let next = OverlayInstance::mount(record, total);

        if let Some(previous) = self.instance.take() {
            tracing::debug!(from = %previous.index, to = %index, "replacing detail overlay");
        }
        Ok(self.instance.insert(next))
    }

    /// Returns whether an overlay was removed.
    pub fn close(&mut self) -> bool {
        match self.instance.take() {
            Some(instance) => {
                tracing::debug!(index = %instance.index, "closed detail overlay");
                true
            }
            None => false,
        }
    }

    /// Moves to the adjacent employee, clamping at both ends. Does nothing
    /// while closed.
    pub fn navigate(&mut self, direction: NavDirection) -> Option<EmployeeIndex> {
        let current = self.current_index()?;
        let target = step_clamped(current, direction, self.store.size());
        match self.open(target) {
            Ok(instance) => Some(instance.index),
            Err(error) => {
                tracing::warn!(%error, "rejected overlay navigation");
                Some(current)
            }
        }
    }

    pub fn handle_key(&mut self, key: OverlayKey) -> OverlayState {
        match key {
            OverlayKey::Escape => {
                self.close();
            }
            OverlayKey::Left => {
                self.navigate(NavDirection::Previous);
            }
            OverlayKey::Right => {
                self.navigate(NavDirection::Next);
            }
        }
        self.state()
    }
}

fn step_clamped(current: EmployeeIndex, direction: NavDirection, len: usize) -> EmployeeIndex {
    let last = len.saturating_sub(1);
    let next = match direction {
        NavDirection::Next => current.get().saturating_add(1).min(last),
        NavDirection::Previous => current.get().saturating_sub(1),
    };
    EmployeeIndex::new(next)
}
