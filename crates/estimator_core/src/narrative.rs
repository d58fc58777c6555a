//! Estimate narrative ("AI analysis") generation.
//!
//! # Responsibility
//! - Derive summary statistics over the rooms of an estimate.
//! - Assemble the templated analysis text.
//! - Apply a randomized contingency factor to the recommended budget.
//!
//! # Invariants
//! - Sentence order is fixed; only the final budget figure is random.
//! - The contingency factor is drawn from `[1.05, 1.15)`.
//! - Randomness comes from the caller-provided `Rng`; seeded generators
//!   make the output reproducible.

use crate::model::room::{Room, RoomType};
use crate::pricing::{order_independent_sum, PriceTable};
use log::debug;
use rand::Rng;

pub const CONTINGENCY_MIN: f64 = 1.05;
pub const CONTINGENCY_MAX: f64 = 1.15;
/// Rooms strictly larger than this many square feet count as large.
pub const LARGE_ROOM_THRESHOLD_SQFT: f64 = 200.0;
/// Text shown by the UI while an analysis is pending.
pub const THINKING_PLACEHOLDER: &str = "Thinking...";

const INTRO_SENTENCE: &str =
    "This detailed estimate provides a comprehensive overview of your project. ";
const LARGE_ROOMS_SENTENCE: &str =
    "The significant area of your larger rooms is also a major factor. ";
const MARKET_RATES_SENTENCE: &str =
    "This estimate is based on current market rates and site conditions. ";
const INSPECTION_SENTENCE: &str =
    "Final pricing is subject to on-site inspection and material selection. ";

/// Formats an amount as dollars with two decimals, e.g. `$39000.00`.
pub fn format_usd(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Statistics the narrative is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomSummary {
    pub room_count: usize,
    /// Sum of room prices with the neutral `General` room type.
    pub total_cost: f64,
    pub premium_rooms: usize,
    pub large_rooms: usize,
}

impl RoomSummary {
    /// Summarizes `rooms`; rooms over `large_room_threshold_sqft` count as large.
    ///
    /// `total_cost` does not depend on room order.
    pub fn from_rooms<'a, I>(
        rooms: I,
        table: &PriceTable,
        large_room_threshold_sqft: f64,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Room>,
    {
        let mut costs = Vec::new();
        let mut premium_rooms = 0;
        let mut large_rooms = 0;
        for room in rooms {
            costs.push(table.price(room, &RoomType::General));
            if room.finish.is_premium() {
                premium_rooms += 1;
            }
            if room.area > large_room_threshold_sqft {
                large_rooms += 1;
            }
        }
        Self {
            room_count: costs.len(),
            total_cost: order_independent_sum(costs),
            premium_rooms,
            large_rooms,
        }
    }
}

/// Generated analysis with the values behind its text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub summary: RoomSummary,
    pub contingency_factor: f64,
    pub recommended_budget: f64,
    pub text: String,
}

/// Builds analysis narratives under one rate table.
#[derive(Debug, Clone)]
pub struct NarrativeGenerator {
    price_table: PriceTable,
    large_room_threshold_sqft: f64,
}

impl Default for NarrativeGenerator {
    fn default() -> Self {
        Self::new(PriceTable::default(), LARGE_ROOM_THRESHOLD_SQFT)
    }
}

impl NarrativeGenerator {
    pub fn new(price_table: PriceTable, large_room_threshold_sqft: f64) -> Self {
        Self {
            price_table,
            large_room_threshold_sqft,
        }
    }

    pub fn summarize<'a, I>(&self, rooms: I) -> RoomSummary
    where
        I: IntoIterator<Item = &'a Room>,
    {
        RoomSummary::from_rooms(rooms, &self.price_table, self.large_room_threshold_sqft)
    }

    /// Assembles the narrative for a known contingency factor.
    ///
    /// Deterministic; `analyze` is this plus a random factor.
    pub fn compose(&self, summary: RoomSummary, contingency_factor: f64) -> Analysis {
        let recommended_budget = summary.total_cost * contingency_factor;

        let mut text = String::from(INTRO_SENTENCE);
        if summary.premium_rooms > 0 {
            text.push_str(&format!(
                "The inclusion of premium finishes in {} room(s) is a key driver \
                 of the total cost. ",
                summary.premium_rooms
            ));
        }
        if summary.large_rooms > 0 {
            text.push_str(LARGE_ROOMS_SENTENCE);
        }
        text.push_str(MARKET_RATES_SENTENCE);
        text.push_str(INSPECTION_SENTENCE);
        text.push_str(&format!(
            "A final budget of {} is recommended for contingencies.",
            format_usd(recommended_budget)
        ));

        Analysis {
            summary,
            contingency_factor,
            recommended_budget,
            text,
        }
    }

    /// Summarizes `rooms` and draws a contingency factor from `rng`.
    pub fn analyze<'a, I, R>(&self, rooms: I, rng: &mut R) -> Analysis
    where
        I: IntoIterator<Item = &'a Room>,
        R: Rng + ?Sized,
    {
        let summary = self.summarize(rooms);
        let factor = rng.gen_range(CONTINGENCY_MIN..CONTINGENCY_MAX);
        debug!(
            "event=analysis_generated module=narrative status=ok rooms={} premium={} large={}",
            summary.room_count, summary.premium_rooms, summary.large_rooms
        );
        self.compose(summary, factor)
    }
}

/// Generates the analysis text with default rates and the thread RNG.
///
/// Two calls with the same rooms differ only in the final budget figure.
pub fn analyze(rooms: &[Room]) -> String {
    NarrativeGenerator::default()
        .analyze(rooms, &mut rand::thread_rng())
        .text
}
