use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::card::{EmptyState, ListingCard};
use crate::contact::contact_url;
use crate::error::ApiError;
use crate::filter::filter_listings;
use crate::models::{Draft, TypeFilter};
use crate::view::ViewSnapshot;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
    pub filter: Option<TypeFilter>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub listings: Vec<ListingCard>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub filter: TypeFilter,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub search_term: String,
}

pub async fn root() -> &'static str {
    "Hello, Telegram Market!"
}

/// Filtered listings. Query parameters override the session's filter for
/// this request only.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingsQuery>,
) -> Json<ListingsResponse> {
    let view = state.view.lock().await;
    let filter = query.filter.unwrap_or(view.filter());
    let search = query.search.as_deref().unwrap_or(view.search_term());
    let filtered = filter_listings(view.store().all(), filter, search);
    log::info!("Fetched {} listings", filtered.listings.len());
    Json(ListingsResponse {
        empty_state: filtered.is_empty.then(EmptyState::default),
        listings: filtered.listings.iter().map(ListingCard::from).collect(),
    })
}

pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ListingCard>, ApiError> {
    let view = state.view.lock().await;
    let listing = view.store().get(id).ok_or(ApiError::NotFound(id))?;
    Ok(Json(ListingCard::from(listing)))
}

/// Sends the client on to the listing owner's Telegram handle.
pub async fn contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Redirect, ApiError> {
    let view = state.view.lock().await;
    let listing = view.store().get(id).ok_or(ApiError::NotFound(id))?;
    Ok(Redirect::to(&contact_url(&listing.contact)))
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.view.lock().await.snapshot())
}

pub async fn set_filter(
    State(state): State<AppState>,
    Json(req): Json<FilterRequest>,
) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.set_filter(req.filter);
    Json(view.snapshot())
}

pub async fn set_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.set_search_term(req.search_term);
    Json(view.snapshot())
}

pub async fn toggle_form(State(state): State<AppState>) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.toggle_form();
    Json(view.snapshot())
}

pub async fn cancel_form(State(state): State<AppState>) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.cancel();
    Json(view.snapshot())
}

pub async fn update_draft(
    State(state): State<AppState>,
    Json(draft): Json<Draft>,
) -> Json<ViewSnapshot> {
    let mut view = state.view.lock().await;
    view.update_draft(draft);
    Json(view.snapshot())
}

pub async fn submit_form(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ListingCard>), ApiError> {
    let listing = state.view.lock().await.submit()?;
    Ok((StatusCode::CREATED, Json(ListingCard::from(&listing))))
}
