//! # HTTP Server Module
//!
//! Axum routers for the talker registry:
//!
//! - `/` and `/health` - liveness
//! - `/login` - token issuance
//! - `/talker`, `/talker/search`, `/talker/:id` - collection CRUD and search

pub mod config;
pub mod login_routes;
pub mod response;
pub mod server;
pub mod status_routes;
pub mod talker_routes;

pub use config::HttpServerConfig;
pub use server::{build_router, HttpServer};
