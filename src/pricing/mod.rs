//! Pricing engine module.
//!
//! Turns the quote form into a priced estimate and a booking hand-off.
//! The engine itself (`services::estimate`) is pure; routes and the cache
//! sit around it.

pub mod calculators;
pub mod handoff;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::round_half_up;
pub use models::{PricingConfig, QuoteInput, ServiceTier};
pub use routes::router;
pub use services::{estimate, validate_config, PricingConfigError, PromoStatus, QuoteResult};
