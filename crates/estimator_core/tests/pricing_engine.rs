use estimator_core::{price, total, Finish, PriceTable, Room, RoomType};

fn room(area: f64, finish: Finish) -> Room {
    Room::new().with_area(area).with_finish(finish)
}

#[test]
fn price_is_area_times_rate_times_multiplier() {
    let table = PriceTable::default();
    let cases = [
        (Finish::Basic, 120.0),
        (Finish::Standard, 180.0),
        (Finish::Premium, 240.0),
    ];
    for (finish, rate) in cases {
        let r = room(37.5, finish);
        assert_eq!(table.price(&r, &RoomType::General), 37.5 * rate * 1.0);
        assert_eq!(table.price(&r, &RoomType::Kitchen), 37.5 * rate * 1.5);
        assert_eq!(table.price(&r, &RoomType::Bathroom), 37.5 * rate * 1.8);
    }
}

#[test]
fn special_room_types_scale_general_price() {
    let r = room(100.0, Finish::Premium);
    let general = price(&r, "General");
    assert_eq!(general, 24_000.0);
    assert_eq!(price(&r, "Kitchen"), 1.5 * general);
    assert_eq!(price(&r, "Bathroom"), 1.8 * general);
    assert_eq!(price(&r, "Bedroom"), general);
}

#[test]
fn price_is_never_negative() {
    let table = PriceTable::default();
    for area in [0.0, 0.5, 10.0, 1_000.0] {
        for finish in Finish::choices() {
            let r = room(area, finish.clone());
            for label in ["Kitchen", "Bathroom", "General", ""] {
                assert!(table.price_labeled(&r, label) >= 0.0);
            }
        }
    }
}

#[test]
fn total_of_empty_list_is_zero() {
    assert_eq!(total(&[]), 0.0);
}

#[test]
fn total_of_single_room_uses_base_rate_only() {
    let r = room(42.0, Finish::Standard);
    assert_eq!(total(std::slice::from_ref(&r)), 42.0 * 180.0);
}

#[test]
fn total_matches_reference_example() {
    let rooms = vec![room(250.0, Finish::Basic), room(50.0, Finish::Standard)];
    assert_eq!(total(&rooms), 39_000.0);
}

#[test]
fn total_is_order_independent() {
    let mut rooms = vec![
        room(441.53, Finish::Basic),
        room(411.96, Finish::Standard),
        room(928.7, Finish::Premium),
        room(110.34, Finish::Basic),
        room(10.0, Finish::Other("Custom".into())),
    ];
    let forward = total(&rooms).to_bits();

    rooms.reverse();
    assert_eq!(total(&rooms).to_bits(), forward);
    for _ in 0..rooms.len() {
        rooms.rotate_left(1);
        assert_eq!(total(&rooms).to_bits(), forward);
    }
    rooms.swap(0, 2);
    assert_eq!(total(&rooms).to_bits(), forward);
}
