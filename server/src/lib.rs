pub mod config;
pub mod engine;
pub mod entity;
pub mod fields;
pub mod metrics;
pub mod query;
pub mod ranking;
pub mod reporting;
pub mod server;
pub mod stats;
pub mod validation;

mod handlers;
mod http_types;
mod server_state;
