// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::error::{DirectoryError, DirectoryResult};
use crate::ids::EmployeeIndex;
use crate::store::EmployeeStore;

/// A terminal cell, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub column: u16,
    pub row: u16,
}

impl Point {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(self, point: Point) -> bool {
        point.column >= self.x
            && point.column < self.x.saturating_add(self.width)
            && point.row >= self.y
            && point.row < self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardElement {
    Image,
    Name,
    Email,
    Location,
    Padding,
}

impl CardElement {
    pub const NESTED: [Self; 4] = [Self::Image, Self::Name, Self::Email, Self::Location];
}

/// Where one card landed on screen. Every nested element region carries the
/// same index tag as the card itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRegion {
    pub index: EmployeeIndex,
    pub bounds: Region,
    pub elements: Vec<(CardElement, Region)>,
}

impl CardRegion {
    pub fn hit(&self, point: Point) -> Option<CardElement> {
        self.elements
            .iter()
            .find(|(_, region)| region.contains(point))
            .map(|(element, _)| *element)
            .or_else(|| {
                self.bounds
                    .contains(point)
                    .then_some(CardElement::Padding)
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub index: EmployeeIndex,
    pub initials: String,
    pub thumbnail_url: String,
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    cards: Vec<Card>,
    regions: Vec<CardRegion>,
}

impl GalleryView {
    /// One card per record, in store order, all visible.
    pub fn render(store: &EmployeeStore) -> Self {
        let cards = store
            .iter()
            .map(|record| Card {
                index: record.index,
                initials: record.initials(),
                thumbnail_url: record.thumbnail_url.clone(),
                full_name: record.full_name.clone(),
                email: record.email.clone(),
                location: record.location_label(),
                visible: true,
            })
            .collect();
        Self {
            cards,
            regions: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: EmployeeIndex) -> Option<&Card> {
        self.cards.get(index.get())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|card| card.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_cards().count()
    }

    pub fn set_visibility(&mut self, index: EmployeeIndex, visible: bool) -> DirectoryResult<()> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index.get())
            .ok_or(DirectoryError::IndexOutOfRange {
                index: index.get(),
                len,
            })?;
        card.visible = visible;
        Ok(())
    }

    /// Replaces the click targets with the regions from the latest layout.
    /// Regions tagged with an index outside the gallery are dropped.
    pub fn bind_activation(&mut self, regions: Vec<CardRegion>) {
        let len = self.cards.len();
        self.regions = regions
            .into_iter()
            .filter(|region| region.index.get() < len)
            .collect();
    }

    pub fn regions(&self) -> &[CardRegion] {
        &self.regions
    }

    /// Resolves a click to the visible card under it, and the element hit.
    pub fn activation_target(&self, point: Point) -> Option<(EmployeeIndex, CardElement)> {
        self.regions.iter().find_map(|region| {
            let element = region.hit(point)?;
            let visible = self
                .card(region.index)
                .map(|card| card.visible)
                .unwrap_or(false);
            visible.then_some((region.index, element))
        })
    }

    pub fn activate(&self, point: Point) -> Option<EmployeeIndex> {
        self.activation_target(point).map(|(index, _)| index)
    }
}
