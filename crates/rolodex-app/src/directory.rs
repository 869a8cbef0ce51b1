// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use crate::error::DirectoryResult;
use crate::gallery::{CardRegion, GalleryView, Point};
use crate::ids::EmployeeIndex;
use crate::model::RawBatch;
use crate::overlay::{DetailOverlay, NavDirection, OverlayKey, OverlayState};
use crate::search::SearchFilter;
use crate::store::EmployeeStore;

/// One loaded batch and every view derived from it. Built whole, so a
/// replacement directory is never observed half-rendered.
#[derive(Debug, Clone)]
pub struct Directory {
    store: Arc<EmployeeStore>,
    gallery: GalleryView,
    overlay: DetailOverlay,
    search: SearchFilter,
}

impl Directory {
    pub fn from_batch(batch: &RawBatch) -> DirectoryResult<Self> {
        let store = EmployeeStore::populate(&batch.results)?;
        Ok(Self::from_store(store))
    }

    pub fn from_store(store: EmployeeStore) -> Self {
        let store = Arc::new(store);
        Self {
            gallery: GalleryView::render(&store),
            overlay: DetailOverlay::new(Arc::clone(&store)),
            search: SearchFilter::new(Arc::clone(&store)),
            store,
        }
    }

    pub fn gallery(&self) -> &GalleryView {
        &self.gallery
    }

    pub fn overlay(&self) -> &DetailOverlay {
        &self.overlay
    }

    pub fn search(&self) -> &SearchFilter {
        &self.search
    }

    pub fn size(&self) -> usize {
        self.store.size()
    }

    pub fn bind_activation(&mut self, regions: Vec<CardRegion>) {
        self.gallery.bind_activation(regions);
    }

    /// Opens the card under `point`. Clicks fall on the overlay while it is
    /// open, so cards underneath are not reachable.
    pub fn activate_at(&mut self, point: Point) -> DirectoryResult<Option<EmployeeIndex>> {
        if self.overlay.is_open() {
            return Ok(None);
        }
        let Some(index) = self.gallery.activate(point) else {
            return Ok(None);
        };
        self.open(index).map(Some)
    }

    pub fn open(&mut self, index: EmployeeIndex) -> DirectoryResult<EmployeeIndex> {
        self.overlay.open(index).map(|instance| instance.index)
    }

    pub fn close(&mut self) -> bool {
        self.overlay.close()
    }

    pub fn navigate(&mut self, direction: NavDirection) -> Option<EmployeeIndex> {
        self.overlay.navigate(direction)
    }

    pub fn handle_overlay_key(&mut self, key: OverlayKey) -> OverlayState {
        self.overlay.handle_key(key)
    }

    /// Applies `query` and re-evaluates the "no results" indicator. Returns
    /// the number of visible cards.
    pub fn apply_query(&mut self, query: &str) -> usize {
        let visible = self.search.apply(query, &mut self.gallery);
        self.search.evaluate_no_results(&self.gallery);
        visible
    }

    pub fn no_results_shown(&self) -> bool {
        self.search.no_results_shown()
    }
}
