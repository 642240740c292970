pub mod config;
pub mod graphql;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod store;
pub mod utils;
