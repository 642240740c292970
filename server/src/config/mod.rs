use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_PORT: u16 = 4000;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub production: bool,
    pub playground: bool,
    pub seed_data_path: Option<String>,
    /// Comma-separated origin list, parsed by the CORS layer.
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let production = lookup("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        let host = match lookup("HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Config: Invalid HOST '{}': {}, using 0.0.0.0", raw, e);
                IpAddr::V4(Ipv4Addr::UNSPECIFIED)
            }),
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Config: Invalid PORT '{}': {}, using {}", raw, e, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let playground = lookup("GRAPHQL_PLAYGROUND")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(!production);

        Self {
            host,
            port,
            production,
            playground,
            seed_data_path: lookup("SEED_DATA_PATH").filter(|path| !path.trim().is_empty()),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
