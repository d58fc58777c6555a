//! Pricing engine.
//!
//! # Responsibility
//! - Map a room's finish to a base rate per square foot.
//! - Map a room-type label to a cost multiplier.
//! - Price single rooms and sum the running estimate total.
//!
//! # Invariants
//! - Pricing never fails: unknown finishes price at `0.0`, unknown room
//!   types use the neutral multiplier `1.0`.
//! - `total` applies base rates only. Room-type multipliers are not part of
//!   the running total.

use crate::model::room::{Finish, Room, RoomType};
use serde::{Deserialize, Serialize};

pub const BASIC_RATE: f64 = 120.0;
pub const STANDARD_RATE: f64 = 180.0;
pub const PREMIUM_RATE: f64 = 240.0;
pub const KITCHEN_MULTIPLIER: f64 = 1.5;
pub const BATHROOM_MULTIPLIER: f64 = 1.8;
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Rate table used to price rooms.
///
/// Serialized field names are the configuration keys accepted by
/// `EstimatorSettings::from_json_str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTable {
    pub basic_rate: f64,
    pub standard_rate: f64,
    pub premium_rate: f64,
    pub kitchen_multiplier: f64,
    pub bathroom_multiplier: f64,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            basic_rate: BASIC_RATE,
            standard_rate: STANDARD_RATE,
            premium_rate: PREMIUM_RATE,
            kitchen_multiplier: KITCHEN_MULTIPLIER,
            bathroom_multiplier: BATHROOM_MULTIPLIER,
        }
    }
}

impl PriceTable {
    /// Rate per square foot for `finish`; `0.0` for unknown finishes.
    pub fn base_rate(&self, finish: &Finish) -> f64 {
        match finish {
            Finish::Basic => self.basic_rate,
            Finish::Standard => self.standard_rate,
            Finish::Premium => self.premium_rate,
            Finish::Other(_) => 0.0,
        }
    }

    /// Cost multiplier for `room_type`; `1.0` unless Kitchen or Bathroom.
    pub fn multiplier(&self, room_type: &RoomType) -> f64 {
        match room_type {
            RoomType::Kitchen => self.kitchen_multiplier,
            RoomType::Bathroom => self.bathroom_multiplier,
            RoomType::General | RoomType::Other(_) => NEUTRAL_MULTIPLIER,
        }
    }

    /// Prices one room as `area * base_rate * multiplier`.
    pub fn price(&self, room: &Room, room_type: &RoomType) -> f64 {
        room.area * self.base_rate(&room.finish) * self.multiplier(room_type)
    }

    /// Same as [`PriceTable::price`] with a free-text room-type label.
    pub fn price_labeled(&self, room: &Room, room_type_label: &str) -> f64 {
        self.price(room, &RoomType::from_label(room_type_label))
    }

    /// Sums `area * base_rate` over all rooms. Empty input yields `0.0`.
    ///
    /// The result does not depend on room order.
    pub fn total<'a, I>(&self, rooms: I) -> f64
    where
        I: IntoIterator<Item = &'a Room>,
    {
        order_independent_sum(
            rooms
                .into_iter()
                .map(|room| room.area * self.base_rate(&room.finish)),
        )
    }
}

/// Sums costs in ascending order so every permutation yields the same bits.
pub(crate) fn order_independent_sum<I>(costs: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut costs: Vec<f64> = costs.into_iter().collect();
    costs.sort_by(f64::total_cmp);
    costs.into_iter().sum()
}

/// Prices one room with the default rate table.
pub fn price(room: &Room, room_type_label: &str) -> f64 {
    PriceTable::default().price_labeled(room, room_type_label)
}

/// Running total of rooms with the default rate table.
pub fn total(rooms: &[Room]) -> f64 {
    PriceTable::default().total(rooms)
}

#[cfg(test)]
mod tests {
    use super::{price, total, PriceTable};
    use crate::model::room::{Finish, Room, RoomType};

    fn room(area: f64, finish: Finish) -> Room {
        Room::new().with_area(area).with_finish(finish)
    }

    #[test]
    fn unknown_finish_prices_at_zero() {
        let table = PriceTable::default();
        let odd = room(300.0, Finish::Other("Luxury".into()));
        assert_eq!(table.price(&odd, &RoomType::Kitchen), 0.0);
        assert_eq!(table.total([&odd]), 0.0);
    }

    #[test]
    fn general_and_unknown_types_are_neutral() {
        let table = PriceTable::default();
        let premium = room(100.0, Finish::Premium);
        assert_eq!(table.price(&premium, &RoomType::General), 24_000.0);
        assert_eq!(table.price_labeled(&premium, "Garage"), 24_000.0);
    }

    #[test]
    fn total_ignores_room_type_multipliers() {
        let kitchen = room(10.0, Finish::Basic);
        assert_eq!(price(&kitchen, "Kitchen"), 1_800.0);
        assert_eq!(total(std::slice::from_ref(&kitchen)), 1_200.0);
    }

    #[test]
    fn custom_table_changes_rates() {
        let table = PriceTable {
            standard_rate: 200.0,
            ..PriceTable::default()
        };
        assert_eq!(table.total([&room(5.0, Finish::Standard)]), 1_000.0);
    }
}
