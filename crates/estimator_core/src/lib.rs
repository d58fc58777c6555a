//! Core domain logic for the room cost estimator.
//! This crate is the single source of truth for pricing rules.

pub mod logging;
pub mod model;
pub mod narrative;
pub mod pricing;
pub mod roster;
pub mod service;
pub mod settings;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::room::{
    format_area_input, parse_area, Finish, Room, RoomId, RoomType, RoomValidationError,
};
pub use narrative::{
    analyze, format_usd, Analysis, NarrativeGenerator, RoomSummary, THINKING_PLACEHOLDER,
};
pub use pricing::{price, total, PriceTable};
pub use roster::{RoomRoster, RosterError};
pub use service::estimate_service::{EstimateResult, EstimateService, EstimateServiceError};
pub use settings::{EstimatorSettings, SettingsError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
