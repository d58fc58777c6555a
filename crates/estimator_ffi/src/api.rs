//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the estimate session as sync, use-case-level functions.
//! - Keep error semantics simple for UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide session backs every call.
//! - Room IDs cross the boundary as UUID strings.

use estimator_core::{
    core_version as core_version_inner, format_area_input, init_logging as init_logging_inner,
    ping as ping_inner, Analysis, EstimateService, EstimatorSettings, Finish, Room, RoomId,
    THINKING_PLACEHOLDER,
};
use log::warn;
use once_cell::sync::Lazy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

static SESSION: Lazy<Mutex<EstimateService>> = Lazy::new(|| Mutex::new(EstimateService::new()));

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One room row as rendered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomItem {
    /// Stable room ID in string form.
    pub room_id: String,
    pub area: f64,
    /// Input-field text; empty while the area is zero.
    pub area_text: String,
    /// Finish label (`Basic|Standard|Premium` or a passed-through label).
    pub finish: String,
}

/// Full estimate state after a call.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateSnapshot {
    pub rooms: Vec<RoomItem>,
    pub total: f64,
    /// `Total Estimate: $x.xx`.
    pub total_label: String,
}

/// Generic action response envelope for room edits.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomActionResponse {
    pub ok: bool,
    /// Affected room, when the call succeeded.
    pub room: Option<RoomItem>,
    /// Running total after the call.
    pub total: f64,
    pub message: String,
}

/// Type-sensitive room price response.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomCostResponse {
    pub ok: bool,
    pub cost: f64,
    pub message: String,
}

/// Analysis response for the "Get AI Analysis" action.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub text: String,
    pub total_cost: f64,
    pub contingency_factor: f64,
    pub recommended_budget: f64,
}

/// Replaces pricing settings from JSON, keeping the current rooms.
///
/// # FFI contract
/// - Returns empty string on success and error message on failure.
/// - Invalid input leaves the session untouched.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_estimator(settings_json: String) -> String {
    let settings = match EstimatorSettings::from_json_str(settings_json.as_str()) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("event=configure_rejected module=ffi status=error");
            return format!("configure_estimator failed: {err}");
        }
    };
    lock_session().reconfigure(settings);
    String::new()
}

/// Discards all rooms and starts over with one default room.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_reset() -> EstimateSnapshot {
    reset_in(&mut lock_session())
}

/// Returns the current rooms and running total.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_list_rooms() -> EstimateSnapshot {
    snapshot(&lock_session())
}

/// Appends a default room.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_add_room() -> RoomActionResponse {
    let mut session = lock_session();
    let room_id = session.add_room();
    match session.room(room_id) {
        Some(room) => {
            let item = to_room_item(room);
            RoomActionResponse::success("Room added.", item, session.total_estimate())
        }
        None => RoomActionResponse::failure(
            "estimator_add_room failed: room missing after insert",
            session.total_estimate(),
        ),
    }
}

/// Updates a room area from raw input-field text.
///
/// Non-numeric text is stored as zero, matching the input field behaviour.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_update_area(room_id: String, area_text: String) -> RoomActionResponse {
    update_area_in(&mut lock_session(), &room_id, &area_text)
}

/// Updates a room finish from a dropdown label.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_update_finish(room_id: String, finish: String) -> RoomActionResponse {
    update_finish_in(&mut lock_session(), &room_id, &finish)
}

/// Returns the running total (finish rates only).
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_total() -> f64 {
    lock_session().total_estimate()
}

/// Prices one room with a room-type label such as `Kitchen`.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_room_cost(room_id: String, room_type: String) -> RoomCostResponse {
    room_cost_in(&lock_session(), &room_id, &room_type)
}

/// Generates the analysis narrative.
///
/// # FFI contract
/// - `seed = None` draws from process entropy; `Some(seed)` is reproducible.
/// - Callers may show `estimator_thinking_placeholder()` while waiting.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_analyze(seed: Option<u64>) -> AnalysisResponse {
    analyze_in(&lock_session(), seed)
}

/// Finish labels in dropdown order.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_finish_choices() -> Vec<String> {
    Finish::choices()
        .iter()
        .map(|finish| finish.label().to_string())
        .collect()
}

/// Placeholder text for a pending analysis.
#[flutter_rust_bridge::frb(sync)]
pub fn estimator_thinking_placeholder() -> String {
    THINKING_PLACEHOLDER.to_string()
}

impl RoomActionResponse {
    fn success(message: impl Into<String>, room: RoomItem, total: f64) -> Self {
        Self {
            ok: true,
            room: Some(room),
            total,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>, total: f64) -> Self {
        Self {
            ok: false,
            room: None,
            total,
            message: message.into(),
        }
    }
}

fn lock_session() -> MutexGuard<'static, EstimateService> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn reset_in(session: &mut EstimateService) -> EstimateSnapshot {
    *session = EstimateService::with_settings(session.settings().clone());
    snapshot(session)
}

fn update_area_in(
    session: &mut EstimateService,
    room_id: &str,
    area_text: &str,
) -> RoomActionResponse {
    let id = match parse_room_id(room_id) {
        Ok(id) => id,
        Err(message) => return RoomActionResponse::failure(message, session.total_estimate()),
    };
    match session.set_area(id, area_text) {
        Ok(room) => RoomActionResponse::success(
            "Area updated.",
            to_room_item(&room),
            session.total_estimate(),
        ),
        Err(err) => RoomActionResponse::failure(
            format!("estimator_update_area failed: {err}"),
            session.total_estimate(),
        ),
    }
}

fn update_finish_in(
    session: &mut EstimateService,
    room_id: &str,
    finish: &str,
) -> RoomActionResponse {
    let id = match parse_room_id(room_id) {
        Ok(id) => id,
        Err(message) => return RoomActionResponse::failure(message, session.total_estimate()),
    };
    match session.set_finish(id, finish.trim()) {
        Ok(room) => RoomActionResponse::success(
            "Finish updated.",
            to_room_item(&room),
            session.total_estimate(),
        ),
        Err(err) => RoomActionResponse::failure(
            format!("estimator_update_finish failed: {err}"),
            session.total_estimate(),
        ),
    }
}

fn room_cost_in(session: &EstimateService, room_id: &str, room_type: &str) -> RoomCostResponse {
    let result = parse_room_id(room_id).and_then(|id| {
        session
            .room_cost(id, room_type.trim())
            .map_err(|err| format!("estimator_room_cost failed: {err}"))
    });
    match result {
        Ok(cost) => RoomCostResponse {
            ok: true,
            cost,
            message: String::new(),
        },
        Err(message) => RoomCostResponse {
            ok: false,
            cost: 0.0,
            message,
        },
    }
}

fn analyze_in(session: &EstimateService, seed: Option<u64>) -> AnalysisResponse {
    let analysis = match seed {
        Some(seed) => session.analyze_with(&mut ChaCha8Rng::seed_from_u64(seed)),
        None => session.analyze(),
    };
    to_analysis_response(analysis)
}

fn parse_room_id(raw: &str) -> Result<RoomId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| format!("invalid room_id `{}`", raw.trim()))
}

fn snapshot(session: &EstimateService) -> EstimateSnapshot {
    EstimateSnapshot {
        rooms: session.rooms().iter().map(to_room_item).collect(),
        total: session.total_estimate(),
        total_label: session.total_label(),
    }
}

fn to_room_item(room: &Room) -> RoomItem {
    RoomItem {
        room_id: room.id.to_string(),
        area: room.area,
        area_text: format_area_input(room.area),
        finish: room.finish.label().to_string(),
    }
}

fn to_analysis_response(analysis: Analysis) -> AnalysisResponse {
    AnalysisResponse {
        text: analysis.text,
        total_cost: analysis.summary.total_cost,
        contingency_factor: analysis.contingency_factor,
        recommended_budget: analysis.recommended_budget,
    }
}
