//! Listing marketplace for Telegram communities, served over a small JSON API.

pub mod card;
pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod form;
pub mod handlers;
pub mod models;
pub mod store;
pub mod view;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tokio::sync::Mutex;

use crate::view::MarketplaceView;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<MarketplaceView>>,
}

impl AppState {
    pub fn new(view: MarketplaceView) -> Self {
        Self {
            view: Arc::new(Mutex::new(view)),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let view_routes = Router::new()
        .route("/view", get(handlers::get_view))
        .route("/view/filter", put(handlers::set_filter))
        .route("/view/search", put(handlers::set_search))
        .route("/form/toggle", post(handlers::toggle_form))
        .route("/form/cancel", post(handlers::cancel_form))
        .route("/form/draft", put(handlers::update_draft))
        .route("/form/submit", post(handlers::submit_form));

    Router::new()
        .route("/", get(handlers::root))
        .route("/listings", get(handlers::list_listings))
        .route("/listings/:id", get(handlers::get_listing))
        .route("/listings/:id/contact", get(handlers::contact))
        .merge(view_routes)
        .with_state(state)
}
