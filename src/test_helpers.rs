//! Shared fixture builders for the tripcard test suite.
//!
//! Entry builders return minimal valid records; tests then mutate the one
//! or two fields under test. Dates are plain ISO strings so fixtures stay
//! literal and sort order is visible at a glance.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut entry = place("e1", "2024-05-01");
//! entry.rating = Some(4);
//! entry.city_id = Some("c1".into());
//!
//! let bundle = trip_bundle(vec![city("c1", "Tokyo", 0)], vec![entry]);
//! ```

use crate::model::{
    City, CityShareData, Entry, EntryType, Photo, Tag, Trip, TripShareData,
};

// =========================================================================
// Record builders
// =========================================================================

/// A trip spanning the first two weeks of May 2024.
pub fn trip() -> Trip {
    Trip {
        id: "t1".into(),
        title: "Japan 2024".into(),
        location: "Japan".into(),
        start_date: "2024-05-01".into(),
        end_date: "2024-05-14".into(),
        summary: None,
        cover_image_uri: None,
    }
}

pub fn city(id: &str, name: &str, order_index: u32) -> City {
    City {
        id: id.into(),
        trip_id: "t1".into(),
        name: name.into(),
        arrival_date: None,
        departure_date: None,
        order_index,
    }
}

fn entry(id: &str, date: &str, entry_type: EntryType) -> Entry {
    Entry {
        id: id.into(),
        trip_id: "t1".into(),
        city_id: None,
        entry_type,
        title: format!("Entry {id}"),
        notes: None,
        rating: None,
        date: date.into(),
        tags: vec![],
        photos: vec![],
    }
}

pub fn place(id: &str, date: &str) -> Entry {
    entry(id, date, EntryType::Place)
}

pub fn moment(id: &str, date: &str) -> Entry {
    entry(id, date, EntryType::Moment)
}

/// A place carrying the given tag names, in order.
pub fn tagged_place(id: &str, date: &str, tags: &[&str]) -> Entry {
    let mut e = place(id, date);
    e.tags = tags
        .iter()
        .enumerate()
        .map(|(i, name)| Tag {
            id: format!("{id}-tag{i}"),
            name: (*name).into(),
        })
        .collect();
    e
}

pub fn photo(uri: &str, order: u32) -> Photo {
    Photo {
        uri: uri.into(),
        order,
    }
}

// =========================================================================
// Bundle builders
// =========================================================================

pub fn trip_bundle(cities: Vec<City>, entries: Vec<Entry>) -> TripShareData {
    TripShareData {
        trip: trip(),
        cities,
        entries,
    }
}

pub fn city_bundle(city: City, entries: Vec<Entry>) -> CityShareData {
    CityShareData {
        city,
        trip: trip(),
        entries,
    }
}
