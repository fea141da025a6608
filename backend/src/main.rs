use telegram_market::config::AppConfig;
use telegram_market::store::ListingStore;
use telegram_market::view::MarketplaceView;
use telegram_market::{app, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let store = if config.seed {
        ListingStore::seeded()
    } else {
        ListingStore::new()
    };
    log::info!("Starting with {} listings", store.len());

    let addr = config.addr();
    log::info!("Starting server on {}", addr);

    let app = app(AppState::new(MarketplaceView::new(store)));
    axum::serve(tokio::net::TcpListener::bind(addr).await?, app.into_make_service()).await?;

    Ok(())
}
