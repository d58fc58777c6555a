//! Domain model for room cost estimation.
//!
//! # Responsibility
//! - Define the room record edited by the UI and priced by core.
//! - Own the label vocabulary for finishes and room types.
//!
//! # Invariants
//! - Every room is identified by a stable `RoomId`.
//! - Room edits are value replacements; identity never changes.

pub mod room;
