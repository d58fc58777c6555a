//! Flutter-facing bindings for the estimator core.

pub mod api;
