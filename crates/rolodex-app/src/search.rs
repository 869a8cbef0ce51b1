// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;

use crate::gallery::GalleryView;
use crate::store::EmployeeStore;

#[derive(Debug, Clone)]
pub struct SearchFilter {
    store: Arc<EmployeeStore>,
    query: String,
    no_results_shown: bool,
}

impl SearchFilter {
    pub fn new(store: Arc<EmployeeStore>) -> Self {
        Self {
            store,
            query: String::new(),
            no_results_shown: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the "no results" indicator is currently up.
    pub fn no_results_shown(&self) -> bool {
        self.no_results_shown
    }

    /// Shows exactly the cards whose full name contains `query`, ignoring
    /// case. Clears the "no results" indicator; returns the visible count.
    pub fn apply(&mut self, query: &str, gallery: &mut GalleryView) -> usize {
        self.query = query.to_owned();
        self.no_results_shown = false;

        let needle = query.to_lowercase();
        let mut visible = 0;
        for record in self.store.iter() {
            let matches = name_matches(&record.full_name, &needle);
            if let Err(error) = gallery.set_visibility(record.index, matches) {
                tracing::warn!(%error, "gallery is not aligned with the store");
                continue;
            }
            visible += usize::from(matches);
        }
        tracing::debug!(query, visible, "applied search filter");
        visible
    }

    /// True when every card is hidden. Raises the indicator in that case;
    /// raising it again keeps a single indicator.
    pub fn evaluate_no_results(&mut self, gallery: &GalleryView) -> bool {
        let none_visible = gallery.cards().iter().all(|card| !card.visible);
        self.no_results_shown = none_visible;
        none_visible
    }
}

/// `needle` must already be lowercased.
fn name_matches(full_name: &str, needle: &str) -> bool {
    needle.is_empty() || full_name.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{SearchFilter, name_matches};
    use crate::GalleryView;
    use crate::test_support::store_of;

    fn visible_names(gallery: &GalleryView) -> Vec<String> {
        gallery
            .visible_cards()
            .map(|card| card.full_name.clone())
            .collect()
    }

    #[test]
    fn empty_query_shows_every_card() {
        let store = store_of(&["Ann Lee", "Bob Ng", "cara Li"]);
        let mut gallery = GalleryView::render(&store);
        let mut filter = SearchFilter::new(store);

        filter.apply("zzz", &mut gallery);
        assert_eq!(filter.apply("", &mut gallery), 3);
        assert_eq!(gallery.visible_count(), 3);
        assert!(!filter.evaluate_no_results(&gallery));
    }

    #[test]
    fn matching_is_case_insensitive_over_full_name() {
        let store = store_of(&["Ann Lee", "Bob Ng", "cara Li"]);
        let mut gallery = GalleryView::render(&store);
        let mut filter = SearchFilter::new(store);

        filter.apply("li", &mut gallery);
        assert_eq!(visible_names(&gallery), vec!["cara Li".to_owned()]);

        filter.apply("an", &mut gallery);
        assert_eq!(visible_names(&gallery), vec!["Ann Lee".to_owned()]);

        filter.apply("ANN L", &mut gallery);
        assert_eq!(visible_names(&gallery), vec!["Ann Lee".to_owned()]);
        assert_eq!(filter.query(), "ANN L");
    }

    #[test]
    fn no_results_indicator_follows_visibility() {
        let store = store_of(&["Ann Lee", "Bob Ng"]);
        let mut gallery = GalleryView::render(&store);
        let mut filter = SearchFilter::new(store);

        assert_eq!(filter.apply("xyz", &mut gallery), 0);
        assert!(filter.evaluate_no_results(&gallery));
        assert!(filter.evaluate_no_results(&gallery));
        assert!(filter.no_results_shown());

        filter.apply("", &mut gallery);
        assert!(!filter.no_results_shown());
        assert!(!filter.evaluate_no_results(&gallery));
    }

    #[test]
    fn apply_clears_indicator_before_evaluation() {
        let store = store_of(&["Ann Lee"]);
        let mut gallery = GalleryView::render(&store);
        let mut filter = SearchFilter::new(store);

        filter.apply("q", &mut gallery);
        filter.evaluate_no_results(&gallery);
        filter.apply("qq", &mut gallery);
        assert!(!filter.no_results_shown());
    }

    #[test]
    fn name_matches_treats_empty_needle_as_match() {
        assert!(name_matches("Ann Lee", ""));
        assert!(name_matches("Ann Lee", "n l"));
        assert!(!name_matches("Ann Lee", "lee ann"));
    }
}
