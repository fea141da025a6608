use serde::Serialize;

use crate::contact::contact_url;
use crate::models::{Listing, ListingType};

pub const EMPTY_TITLE: &str = "İlan bulunamadı";
pub const EMPTY_BODY: &str = "Aradığınız kriterlere uygun ilan mevcut değil.";

/// A listing plus the strings a client shows on its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingCard {
    #[serde(flatten)]
    pub listing: Listing,
    pub type_label: &'static str,
    pub members_label: Option<String>,
    pub price_label: String,
    pub contact_url: String,
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        // Buyers have no community yet, so no member count is shown for them.
        let members_label = (listing.kind == ListingType::Sale && listing.members > 0)
            .then(|| format!("{} üye", group_thousands(listing.members)));
        Self {
            listing: listing.clone(),
            type_label: listing.kind.label(),
            members_label,
            price_label: format!("{} ₺", group_thousands(listing.price)),
            contact_url: contact_url(&listing.contact),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub body: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self { title: EMPTY_TITLE, body: EMPTY_BODY }
    }
}

/// Turkish digit grouping: 15420 -> "15.420".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
