// hotlist-rs: Encapsulation Showcase
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{CleanHouse, DirtyHouse, House, Mansion, StandardHouse, showcase};
use crate::error::HouseError;

#[test]
fn test_dirty_house_fields_are_open() {
    let mut house = DirtyHouse {
        windows: 12,
        doors: 5,
        color: "Black".to_string(),
    };
    house.color = "Grey".to_string();
    house.doors += 1;
    assert_eq!(house.color, "Grey");
    assert_eq!(house.doors, 6);
}

#[test]
fn test_standard_house_set_windows_only_touches_windows() {
    let mut house = StandardHouse::new(18, 10, "Blue");
    house.set_windows(5);

    assert_eq!(house.windows(), 5);
    assert_eq!(house.doors(), 10);
    assert_eq!(house.color(), "Blue");
}

#[test]
fn test_clean_house_accessors() {
    let house = CleanHouse::new(17, 9, "Light Blue");
    assert_eq!(
        (house.windows(), house.doors(), house.color()),
        (17, 9, "Light Blue")
    );
}

#[test]
fn test_mansion_factories() {
    let pool = Mansion::with_pool(27, 19, "Tope").unwrap();
    let dry = Mansion::without_pool(33, 23, "Purple").unwrap();

    assert!(pool.has_pool());
    assert!(!dry.has_pool());
    assert_eq!(pool.room_names().count(), 0);
}

#[test]
fn test_mansion_factories_validate() {
    assert_eq!(Mansion::with_pool(1, 1, "  "), Err(HouseError::BlankColor));
    assert_eq!(Mansion::without_pool(1, 1, ""), Err(HouseError::BlankColor));
    assert_eq!(Mansion::without_pool(4, 0, "Red"), Err(HouseError::NoDoors));
}

#[test]
fn test_mansion_room_names() {
    let mansion = Mansion::without_pool(33, 23, "Purple")
        .unwrap()
        .with_room_names(["Library", "Ballroom"]);
    let rooms: Vec<_> = mansion.room_names().collect();
    assert_eq!(rooms, ["Library", "Ballroom"]);
}

#[test]
fn test_mansion_to_clean_house() {
    let mansion = Mansion::with_pool(27, 19, "Tope")
        .unwrap()
        .with_room_names(["Study"]);
    assert_eq!(mansion.to_clean_house(), CleanHouse::new(27, 19, "Tope"));
}

#[test]
fn test_mansion_display() {
    let mansion = Mansion::with_pool(27, 19, "Tope").unwrap();
    insta::assert_snapshot!(mansion.to_string(), @r"
    Mansion with Pool:
        Color: Tope
        Windows: 27
        Doors: 19
    ");
}

#[test]
fn test_showcase_order() {
    let houses = showcase().unwrap();
    let kinds: Vec<_> = houses
        .iter()
        .map(|house| match house {
            House::Dirty(_) => "dirty",
            House::Standard(_) => "standard",
            House::Clean(_) => "clean",
            House::Mansion(m) if m.has_pool() => "mansion+pool",
            House::Mansion(_) => "mansion",
        })
        .collect();
    assert_eq!(kinds, ["dirty", "standard", "clean", "mansion+pool", "mansion"]);

    let House::Standard(standard) = &houses[1] else {
        panic!("second house should be standard");
    };
    assert_eq!(standard.windows(), 5);
}
