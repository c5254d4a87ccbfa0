//! Listing state for the catalog view.
//!
//! Exactly one of three modes drives what the view shows, in order of precedence: a name
//! search, a combined type/generation filter, or the plain paginated listing. Entering one
//! mode resets the state belonging to the others.

use crate::model::pokemon::{ALL_SENTINEL, DEFAULT_PAGE_LIMIT};

/// The request the view should issue for the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingQuery {
    /// Look up a single Pokémon by its (trimmed, lowercased) name
    Search { name: String },
    /// Filter by generation and type, either of which may be [`ALL_SENTINEL`]
    Combined { generation_id: i32, type_id: i32 },
    /// Plain paginated listing
    Page { offset: u32, limit: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub offset: u32,
    pub limit: u32,
    /// 1-based page number shown to the user
    pub page: u32,
    pub selected_type: i32,
    pub selected_generation: i32,
    pub search_term: String,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

impl ListingState {
    pub fn new(limit: u32) -> Self {
        Self {
            offset: 0,
            limit,
            page: 1,
            selected_type: ALL_SENTINEL,
            selected_generation: ALL_SENTINEL,
            search_term: String::new(),
            has_next: false,
            has_previous: false,
        }
    }

    /// Resolves the current state into the request to issue.
    pub fn query(&self) -> ListingQuery {
        let term = self.search_term.trim();
        if !term.is_empty() {
            return ListingQuery::Search {
                name: term.to_lowercase(),
            };
        }

        if self.filter_active() {
            return ListingQuery::Combined {
                generation_id: self.selected_generation,
                type_id: self.selected_type,
            };
        }

        ListingQuery::Page {
            offset: self.offset,
            limit: self.limit,
        }
    }

    pub fn filter_active(&self) -> bool {
        self.selected_type != ALL_SENTINEL || self.selected_generation != ALL_SENTINEL
    }

    /// Sets the search term.
    ///
    /// A non-blank term takes over the listing and resets both selectors. A blank term
    /// restores the first page of the plain listing.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();

        if self.search_term.trim().is_empty() {
            self.search_term.clear();
            self.reset_filters();
            self.reset_pagination();
        } else {
            self.reset_filters();
            self.disable_pagination();
        }
    }

    pub fn select_type(&mut self, type_id: i32) {
        self.selected_type = type_id;
        self.on_filter_changed();
    }

    pub fn select_generation(&mut self, generation_id: i32) {
        self.selected_generation = generation_id;
        self.on_filter_changed();
    }

    fn on_filter_changed(&mut self) {
        self.search_term.clear();

        if self.filter_active() {
            self.disable_pagination();
        } else {
            self.reset_pagination();
        }
    }

    /// Advances one page. Returns `false` when there is no next page.
    pub fn next_page(&mut self) -> bool {
        if !self.has_next {
            return false;
        }

        self.offset += self.limit;
        self.page += 1;
        true
    }

    /// Goes back one page. Returns `false` when already on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.has_previous || self.offset < self.limit {
            return false;
        }

        self.offset -= self.limit;
        self.page -= 1;
        true
    }

    /// Records the pagination links of a freshly loaded page.
    pub fn apply_page(&mut self, next: Option<&str>, previous: Option<&str>) {
        self.has_next = next.is_some();
        self.has_previous = previous.is_some();
    }

    /// Records that unpaginated (search or filter) results were loaded.
    pub fn apply_filtered(&mut self) {
        self.disable_pagination();
    }

    /// Clears every filter and returns to the first page.
    pub fn reset(&mut self) {
        *self = Self::new(self.limit);
    }

    fn reset_filters(&mut self) {
        self.selected_type = ALL_SENTINEL;
        self.selected_generation = ALL_SENTINEL;
    }

    fn reset_pagination(&mut self) {
        self.offset = 0;
        self.page = 1;
    }

    fn disable_pagination(&mut self) {
        self.has_next = false;
        self.has_previous = false;
    }
}
