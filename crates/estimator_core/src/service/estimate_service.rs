//! Estimate session use-case service.
//!
//! # Responsibility
//! - Provide the entry points a UI calls while editing an estimate.
//! - Keep the room roster, running total and analysis in one place.
//!
//! # Invariants
//! - Edits replace whole rooms by ID through the roster.
//! - A new session starts with exactly one default room.
//! - The running total never applies room-type multipliers.

use crate::model::room::{parse_area, Finish, Room, RoomId};
use crate::narrative::{format_usd, Analysis, NarrativeGenerator};
use crate::roster::{RoomRoster, RosterError};
use crate::settings::EstimatorSettings;
use log::{debug, info};
use rand::Rng;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type EstimateResult<T> = Result<T, EstimateServiceError>;

/// Use-case errors for estimate edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EstimateServiceError {
    RoomNotFound(RoomId),
    DuplicateRoom(RoomId),
}

impl Display for EstimateServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound(id) => write!(f, "room not found: {id}"),
            Self::DuplicateRoom(id) => write!(f, "room already exists: {id}"),
        }
    }
}

impl Error for EstimateServiceError {}

impl From<RosterError> for EstimateServiceError {
    fn from(value: RosterError) -> Self {
        match value {
            RosterError::RoomNotFound(id) => Self::RoomNotFound(id),
            RosterError::DuplicateRoom(id) => Self::DuplicateRoom(id),
        }
    }
}

/// One in-memory estimate being edited by the user.
#[derive(Debug, Clone)]
pub struct EstimateService {
    roster: RoomRoster,
    settings: EstimatorSettings,
    narrator: NarrativeGenerator,
}

impl Default for EstimateService {
    fn default() -> Self {
        Self::new()
    }
}

impl EstimateService {
    /// Creates a session with default settings and one default room.
    pub fn new() -> Self {
        Self::with_settings(EstimatorSettings::default())
    }

    /// Creates a session with custom settings and one default room.
    pub fn with_settings(settings: EstimatorSettings) -> Self {
        let mut service = Self::empty(settings);
        service.roster.add_default();
        service
    }

    /// Creates a session without rooms.
    pub fn empty(settings: EstimatorSettings) -> Self {
        let narrator = settings.narrative_generator();
        Self {
            roster: RoomRoster::new(),
            settings,
            narrator,
        }
    }

    pub fn settings(&self) -> &EstimatorSettings {
        &self.settings
    }

    /// Swaps rates and thresholds in place; rooms are kept as they are.
    pub fn reconfigure(&mut self, settings: EstimatorSettings) {
        self.narrator = settings.narrative_generator();
        self.settings = settings;
        info!(
            "event=settings_applied module=estimate status=ok room_count={}",
            self.roster.len()
        );
    }

    /// Appends a default room.
    pub fn add_room(&mut self) -> RoomId {
        let id = self.roster.add_default();
        info!(
            "event=room_added module=estimate status=ok room_count={}",
            self.roster.len()
        );
        id
    }

    /// Appends a caller-built room, e.g. one restored by the host app.
    pub fn insert_room(&mut self, room: Room) -> EstimateResult<RoomId> {
        Ok(self.roster.insert(room)?)
    }

    /// Updates a room's area from input-field text.
    ///
    /// Non-numeric text is stored as `0.0`.
    pub fn set_area(&mut self, id: RoomId, text: &str) -> EstimateResult<Room> {
        let updated = self.require_room(id)?.with_area(parse_area(text));
        self.replace_room(updated.clone())?;
        Ok(updated)
    }

    /// Updates a room's finish from a dropdown label.
    pub fn set_finish(&mut self, id: RoomId, label: &str) -> EstimateResult<Room> {
        let updated = self.require_room(id)?.with_finish(Finish::from_label(label));
        self.replace_room(updated.clone())?;
        Ok(updated)
    }

    /// Replaces a room by ID.
    pub fn replace_room(&mut self, room: Room) -> EstimateResult<()> {
        self.roster.update(room)?;
        debug!("event=room_updated module=estimate status=ok");
        Ok(())
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.roster.get(id)
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.roster.to_vec()
    }

    pub fn room_count(&self) -> usize {
        self.roster.len()
    }

    /// Running total over all rooms.
    pub fn total_estimate(&self) -> f64 {
        self.roster.total(&self.settings.pricing)
    }

    /// Label shown under the room list, e.g. `Total Estimate: $39000.00`.
    pub fn total_label(&self) -> String {
        format!("Total Estimate: {}", format_usd(self.total_estimate()))
    }

    /// Prices one room with a room-type multiplier.
    pub fn room_cost(&self, id: RoomId, room_type_label: &str) -> EstimateResult<f64> {
        let room = self.require_room(id)?;
        Ok(self.settings.pricing.price_labeled(room, room_type_label))
    }

    /// Generates the analysis with an injected random source.
    pub fn analyze_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Analysis {
        self.narrator.analyze(self.roster.iter(), rng)
    }

    /// Generates the analysis with the thread RNG.
    pub fn analyze(&self) -> Analysis {
        self.analyze_with(&mut rand::thread_rng())
    }

    fn require_room(&self, id: RoomId) -> EstimateResult<&Room> {
        self.roster
            .get(id)
            .ok_or(EstimateServiceError::RoomNotFound(id))
    }
}
