use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use telegram_market::view::MarketplaceView;
use telegram_market::{app, AppState};

fn seeded_app() -> (Router, AppState) {
    let state = AppState::new(MarketplaceView::seeded());
    (app(state.clone()), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn ids(listings: &Value) -> Vec<u64> {
    listings
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect()
}

#[tokio::test]
async fn lists_seed_data_newest_first() {
    let (app, _) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/listings", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["listings"]), vec![1, 2, 3]);
    assert!(body["empty_state"].is_null());
    assert_eq!(body["listings"][0]["members_label"], "15.420 üye");
}

#[tokio::test]
async fn query_overrides_do_not_touch_session() {
    let (app, state) = seeded_app();
    let (_, body) = send(&app, Method::GET, "/listings?filter=buy", None).await;
    assert_eq!(ids(&body["listings"]), vec![3]);
    assert_eq!(body["listings"][0]["name"], "Oyun Topluluğu Arıyorum");

    let (_, body) = send(&app, Method::GET, "/listings?search=zzz", None).await;
    assert!(body["listings"].as_array().unwrap().is_empty());
    assert_eq!(body["empty_state"]["title"], "İlan bulunamadı");

    let view = state.view.lock().await;
    assert!(view.search_term().is_empty());
}

#[tokio::test]
async fn session_filter_and_search_drive_the_view() {
    let (app, _) = seeded_app();
    let (status, body) = send(&app, Method::PUT, "/view/search", Some(json!({"search_term": "KRIPTO"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body["listings"]), vec![1]);

    let (_, body) = send(&app, Method::PUT, "/view/filter", Some(json!({"filter": "buy"}))).await;
    assert_eq!(body["filter"], "buy");
    assert!(body["listings"].as_array().unwrap().is_empty());
    assert!(!body["empty_state"].is_null());

    let (_, body) = send(&app, Method::GET, "/listings", None).await;
    assert!(body["listings"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn submitting_a_draft_creates_a_listing() {
    let (app, _) = seeded_app();
    let (_, body) = send(&app, Method::POST, "/form/toggle", None).await;
    assert_eq!(body["form"], "open");

    let draft = json!({
        "name": "Borsa Sohbet",
        "description": "Günlük hisse yorumları",
        "members": "",
        "category": "Finans",
        "price": "5000",
        "type": "sale",
        "contact": "@borsa"
    });
    send(&app, Method::PUT, "/form/draft", Some(draft)).await;

    let (status, created) = send(&app, Method::POST, "/form/submit", None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["members"], 0);
    assert_eq!(created["price"], 5000);
    assert_eq!(created["featured"], false);
    assert_eq!(created["contact_url"], "https://t.me/borsa");

    let (_, view) = send(&app, Method::GET, "/view", None).await;
    assert_eq!(view["form"], "closed");
    assert_eq!(view["draft"]["name"], "");
    assert_eq!(view["total"], 4);
    assert_eq!(view["listings"][0]["id"], created["id"]);
}

#[tokio::test]
async fn invalid_draft_is_unprocessable() {
    let (app, _) = seeded_app();
    send(&app, Method::POST, "/form/toggle", None).await;
    send(&app, Method::PUT, "/form/draft", Some(json!({"name": "Eksik", "price": "abc"}))).await;

    let (status, body) = send(&app, Method::POST, "/form/submit", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["category", "description", "contact", "price"]);

    let (_, view) = send(&app, Method::GET, "/view", None).await;
    assert_eq!(view["total"], 3);
    assert_eq!(view["form"], "open");
}

#[tokio::test]
async fn submit_with_closed_form_conflicts() {
    let (app, _) = seeded_app();
    let (status, _) = send(&app, Method::POST, "/form/submit", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn cancel_closes_the_form() {
    let (app, _) = seeded_app();
    send(&app, Method::POST, "/form/toggle", None).await;
    let (_, body) = send(&app, Method::POST, "/form/cancel", None).await;
    assert_eq!(body["form"], "closed");
}

#[tokio::test]
async fn contact_redirects_to_telegram() {
    let (app, _) = seeded_app();
    let response = app
        .oneshot(Request::builder().uri("/listings/2/contact").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "https://t.me/techtr");
}

#[tokio::test]
async fn unknown_listing_is_not_found() {
    let (app, _) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/listings/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "listing 99 not found");

    let (status, _) = send(&app, Method::GET, "/listings/99/contact", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn single_listing_card() {
    let (app, _) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/listings/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "buy");
    assert_eq!(body["type_label"], "Alıcı");
    assert!(body["members_label"].is_null());
    assert_eq!(body["price_label"], "800 ₺");
}
