use serde::Serialize;

use crate::models::{Listing, TypeFilter};

/// Result of running the filter over the store. `is_empty` tells the
/// presentation layer to show the "no listings" state instead of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    pub listings: Vec<Listing>,
    pub is_empty: bool,
}

/// Type selector AND case-insensitive substring of name or category.
pub fn matches(listing: &Listing, filter: TypeFilter, search_term: &str) -> bool {
    if !filter.admits(listing.kind) {
        return false;
    }
    let needle = search_term.to_lowercase();
    listing.name.to_lowercase().contains(&needle)
        || listing.category.to_lowercase().contains(&needle)
}

pub fn filter_listings(listings: &[Listing], filter: TypeFilter, search_term: &str) -> FilteredView {
    let listings: Vec<Listing> = listings
        .iter()
        .filter(|l| matches(l, filter, search_term))
        .cloned()
        .collect();
    let is_empty = listings.is_empty();
    FilteredView { listings, is_empty }
}
