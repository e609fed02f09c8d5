pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod import;
pub mod metrics_server;
pub mod observability;
pub mod service;
pub mod store;

pub use error::BillingError;
pub use service::AppState;
