//! talkerd - a small talker-registry HTTP service
//!
//! CRUD over speaker profile records backed by a single JSON document,
//! gated by ordered validator chains and a token-shaped auth stub.

pub mod auth;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod service;
pub mod store;
pub mod validation;
