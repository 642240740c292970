use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gather_server::config::Config;
use gather_server::graphql::build_schema;
use gather_server::routes::create_routes;
use gather_server::store::{Seed, Store};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    let store = match &config.seed_data_path {
        Some(path) => {
            let seed = Seed::load(path).expect("Failed to load seed data");
            let store = Store::from_seed(seed).expect("Invalid seed data");
            tracing::info!(
                path = %path,
                users = store.users.len().unwrap_or_default(),
                locations = store.locations.len().unwrap_or_default(),
                events = store.events.len().unwrap_or_default(),
                participants = store.participants.len().unwrap_or_default(),
                "Store seeded"
            );
            store
        }
        None => Store::new(),
    };

    let schema = build_schema(Arc::new(store));
    let app: Router = create_routes(schema, &config);

    let addr = config.addr();
    if config.playground {
        tracing::info!("🚀 GraphQL playground at http://{}/graphql", addr);
    } else {
        tracing::info!("🚀 Server running at http://{}", addr);
    }

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
