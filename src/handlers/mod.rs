//! HTTP handlers for the public API surface.

pub mod analyze;
pub mod contact;
pub mod health;
pub mod metrics_handler;
pub mod tariff;

pub use analyze::AppState;
