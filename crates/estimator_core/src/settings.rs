//! Estimator configuration.
//!
//! # Responsibility
//! - Describe tunable rates and thresholds with built-in defaults.
//! - Parse and validate JSON overrides supplied by the host app.
//!
//! # Invariants
//! - Accepted settings never contain negative or non-finite numbers.
//! - Missing fields keep their default values.

use crate::narrative::{NarrativeGenerator, LARGE_ROOM_THRESHOLD_SQFT};
use crate::pricing::PriceTable;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Settings parse/validation errors.
#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    InvalidRate { field: &'static str, value: f64 },
    InvalidThreshold(f64),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid estimator settings json: {err}"),
            Self::InvalidRate { field, value } => {
                write!(f, "pricing.{field} must be finite and >= 0, got {value}")
            }
            Self::InvalidThreshold(value) => write!(
                f,
                "large_room_threshold_sqft must be finite and >= 0, got {value}"
            ),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Tunable estimator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    pub pricing: PriceTable,
    pub large_room_threshold_sqft: f64,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            pricing: PriceTable::default(),
            large_room_threshold_sqft: LARGE_ROOM_THRESHOLD_SQFT,
        }
    }
}

impl EstimatorSettings {
    /// Parses settings from JSON and validates them.
    ///
    /// # Errors
    /// - `Parse` when the input is not a valid settings object.
    /// - `InvalidRate`/`InvalidThreshold` for negative or non-finite values.
    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let pricing = &self.pricing;
        for (field, value) in [
            ("basic_rate", pricing.basic_rate),
            ("standard_rate", pricing.standard_rate),
            ("premium_rate", pricing.premium_rate),
            ("kitchen_multiplier", pricing.kitchen_multiplier),
            ("bathroom_multiplier", pricing.bathroom_multiplier),
        ] {
            if !is_non_negative(value) {
                return Err(SettingsError::InvalidRate { field, value });
            }
        }
        if !is_non_negative(self.large_room_threshold_sqft) {
            return Err(SettingsError::InvalidThreshold(
                self.large_room_threshold_sqft,
            ));
        }
        Ok(())
    }

    pub fn narrative_generator(&self) -> NarrativeGenerator {
        NarrativeGenerator::new(self.pricing.clone(), self.large_room_threshold_sqft)
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
