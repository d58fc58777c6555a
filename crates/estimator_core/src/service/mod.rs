//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate roster, pricing and narrative calls into use-case APIs.
//! - Keep UI/FFI layers decoupled from model details.

pub mod estimate_service;
