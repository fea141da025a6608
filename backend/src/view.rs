use serde::Serialize;

use crate::card::{EmptyState, ListingCard};
use crate::filter::{filter_listings, FilteredView};
use crate::form::{FormError, FormState};
use crate::models::{Draft, Listing, TypeFilter};
use crate::store::ListingStore;

/// Everything one marketplace session holds: the store, the active filter
/// and the listing form.
#[derive(Debug, Clone, Default)]
pub struct MarketplaceView {
    store: ListingStore,
    filter: TypeFilter,
    search_term: String,
    form: FormState,
    draft: Draft,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub filter: TypeFilter,
    pub search_term: String,
    pub form: FormState,
    pub draft: Draft,
    pub total: usize,
    pub listings: Vec<ListingCard>,
    pub empty_state: Option<EmptyState>,
}

impl MarketplaceView {
    pub fn new(store: ListingStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    pub fn seeded() -> Self {
        Self::new(ListingStore::seeded())
    }

    pub fn store(&self) -> &ListingStore {
        &self.store
    }

    pub fn filter(&self) -> TypeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TypeFilter) {
        log::info!("Filter changed to {:?}", filter);
        self.filter = filter;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        log::debug!("Search term set to {:?}", self.search_term);
    }

    pub fn form(&self) -> FormState {
        self.form
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn toggle_form(&mut self) -> FormState {
        self.form = self.form.toggled();
        self.form
    }

    /// Closes the form. The draft survives so reopening shows it again.
    pub fn cancel(&mut self) {
        self.form = FormState::Closed;
    }

    pub fn update_draft(&mut self, draft: Draft) {
        self.draft = draft;
    }

    /// Validates the draft and, on success, prepends the new listing, clears
    /// the draft and closes the form. On failure nothing changes.
    pub fn submit(&mut self) -> Result<Listing, FormError> {
        if !self.form.is_open() {
            return Err(FormError::Closed);
        }
        let new_listing = self.draft.validate().map_err(|e| {
            log::warn!("Rejected listing draft: {}", e);
            e
        })?;
        let listing = self.store.create(new_listing).clone();
        self.draft = Draft::default();
        self.form = FormState::Closed;
        log::info!("Listed {:?} with id {}", listing.name, listing.id);
        Ok(listing)
    }

    pub fn filtered_listings(&self) -> FilteredView {
        filter_listings(self.store.all(), self.filter, &self.search_term)
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let view = self.filtered_listings();
        ViewSnapshot {
            filter: self.filter,
            search_term: self.search_term.clone(),
            form: self.form,
            draft: self.draft.clone(),
            total: self.store.len(),
            empty_state: view.is_empty.then(EmptyState::default),
            listings: view.listings.iter().map(ListingCard::from).collect(),
        }
    }
}
