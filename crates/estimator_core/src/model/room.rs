//! Room domain model.
//!
//! # Responsibility
//! - Define the room record shared by pricing, roster and narrative code.
//! - Map UI labels to finishes and room types without failing.
//! - Coerce free-text area input into a usable number.
//!
//! # Invariants
//! - `id` is stable and never reused for another room.
//! - `area` is finite and `>= 0`.
//! - Unknown labels are kept as `Other(label)`, never rejected.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one room in an estimate.
pub type RoomId = Uuid;

/// Quality tier of a room, selecting its base rate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Finish {
    Basic,
    #[default]
    Standard,
    Premium,
    /// Label outside the known tiers. Priced at a zero rate.
    Other(String),
}

static FINISH_CHOICES: [Finish; 3] = [Finish::Basic, Finish::Standard, Finish::Premium];

impl Finish {
    /// Maps a UI label to a finish. Matching is exact, like the dropdown values.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Basic" => Self::Basic,
            "Standard" => Self::Standard,
            "Premium" => Self::Premium,
            other => Self::Other(other.to_string()),
        }
    }

    /// Display label, also used on the wire.
    pub fn label(&self) -> &str {
        match self {
            Self::Basic => "Basic",
            Self::Standard => "Standard",
            Self::Premium => "Premium",
            Self::Other(label) => label.as_str(),
        }
    }

    /// Selectable finishes in display order.
    pub fn choices() -> &'static [Finish] {
        &FINISH_CHOICES
    }

    /// Whether this finish counts toward the premium-room sentence.
    pub fn is_premium(&self) -> bool {
        matches!(self, Self::Premium)
    }
}

impl Display for Finish {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl From<String> for Finish {
    fn from(value: String) -> Self {
        Self::from_label(value.as_str())
    }
}

impl From<Finish> for String {
    fn from(value: Finish) -> Self {
        match value {
            Finish::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Room category used by the type-sensitive pricing path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RoomType {
    Kitchen,
    Bathroom,
    /// Neutral placeholder used when no category applies.
    #[default]
    General,
    Other(String),
}

impl RoomType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Kitchen" => Self::Kitchen,
            "Bathroom" => Self::Bathroom,
            "General" => Self::General,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
            Self::General => "General",
            Self::Other(label) => label.as_str(),
        }
    }
}

impl Display for RoomType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// Validation errors for externally supplied room data.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomValidationError {
    NilId,
    InvalidArea(f64),
}

impl Display for RoomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "room id must not be nil"),
            Self::InvalidArea(area) => {
                write!(f, "room area must be finite and >= 0, got {area}")
            }
        }
    }
}

impl Error for RoomValidationError {}

/// One room of an estimate.
///
/// Rooms are values: `with_area`/`with_finish` return an updated copy that
/// keeps the same `id`, which the roster then stores by replacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoomRecord")]
pub struct Room {
    pub id: RoomId,
    /// Square feet.
    pub area: f64,
    pub finish: Finish,
}

#[derive(Deserialize)]
struct RoomRecord {
    id: RoomId,
    #[serde(default)]
    area: f64,
    #[serde(default)]
    finish: Finish,
}

impl TryFrom<RoomRecord> for Room {
    type Error = RoomValidationError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        let room = Room {
            id: record.id,
            area: record.area,
            finish: record.finish,
        };
        room.validate()?;
        Ok(room)
    }
}

impl Room {
    /// Creates a default room (`area = 0`, `Standard`) with a fresh ID.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            area: 0.0,
            finish: Finish::default(),
        }
    }

    /// Creates a room with a caller-provided ID.
    ///
    /// `area` goes through the same coercion as UI input.
    pub fn with_id(
        id: RoomId,
        area: f64,
        finish: Finish,
    ) -> Result<Self, RoomValidationError> {
        if id.is_nil() {
            return Err(RoomValidationError::NilId);
        }
        Ok(Self {
            id,
            area: sanitize_area(area),
            finish,
        })
    }

    /// Returns a copy with a replaced area.
    pub fn with_area(&self, area: f64) -> Self {
        Self {
            area: sanitize_area(area),
            ..self.clone()
        }
    }

    /// Returns a copy with a replaced finish.
    pub fn with_finish(&self, finish: Finish) -> Self {
        Self {
            finish,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), RoomValidationError> {
        if self.id.is_nil() {
            return Err(RoomValidationError::NilId);
        }
        if !self.area.is_finite() || self.area < 0.0 {
            return Err(RoomValidationError::InvalidArea(self.area));
        }
        Ok(())
    }
}

impl Default for Room {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses area text from an input field.
///
/// Anything that is not a finite, non-negative number becomes `0.0`.
pub fn parse_area(text: &str) -> f64 {
    text.trim().parse::<f64>().map(sanitize_area).unwrap_or(0.0)
}

/// Renders an area back into input-field text; zero shows as empty.
pub fn format_area_input(area: f64) -> String {
    if area == 0.0 {
        String::new()
    } else {
        area.to_string()
    }
}

fn sanitize_area(area: f64) -> f64 {
    if area.is_finite() && area > 0.0 {
        area
    } else {
        0.0
    }
}
