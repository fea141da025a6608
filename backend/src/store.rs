use chrono::Utc;

use crate::models::{seed_listings, Listing, NewListing};

/// Hands out listing ids derived from the wall clock, bumped past the last
/// issued id so two submissions in the same millisecond never collide.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new(floor: u64) -> Self {
        Self { last: floor }
    }

    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }
}

/// Listings in display order, most recent first. Nothing is ever removed.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Vec<Listing>,
    ids: IdGenerator,
}

impl ListingStore {
    pub fn new() -> Self {
        Self::from_listings(Vec::new())
    }

    pub fn seeded() -> Self {
        Self::from_listings(seed_listings())
    }

    fn from_listings(listings: Vec<Listing>) -> Self {
        let floor = listings.iter().map(|l| l.id).max().unwrap_or(0);
        Self {
            listings,
            ids: IdGenerator::new(floor),
        }
    }

    pub fn add(&mut self, listing: Listing) {
        self.listings.insert(0, listing);
    }

    /// Assigns an id to a validated draft and prepends it.
    pub fn create(&mut self, new_listing: NewListing) -> &Listing {
        let id = self.ids.next_id();
        self.add(new_listing.into_listing(id));
        &self.listings[0]
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: u64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new()
    }
}
