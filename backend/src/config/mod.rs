use config::{Config, ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed: bool, // start with the sample listings
}

impl AppConfig {
    /// Defaults, overridden by `MARKET_HOST`, `MARKET_PORT` and `MARKET_SEED`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present
        Self::from_source(Environment::with_prefix("MARKET").try_parsing(true))
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 3000)?
            .set_default("seed", true)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
