//! The three content renderers: text, card, and PDF guide.
//!
//! Each renderer is a pure function from `(bundle, translations, app name)`
//! to a string payload — no I/O except the best-effort photo embedding the
//! card renderer performs, and no shared state. The export writer decides
//! what becomes of the payload (a `.txt` file, or HTML handed to the print
//! engine).
//!
//! Renderers never fail: an empty bundle renders an explicit "no entries"
//! placeholder rather than erroring, and a missing photo simply renders
//! without an image.
//!
//! | Module | Output |
//! |--------|--------|
//! | [`text`] | Line-oriented plain text document |
//! | [`card`] | Fixed-width 400px HTML "travel card" (printed to a 400×600 page) |
//! | [`pdf`] | Full HTML guide, one section per city (printed to pages) |

pub mod card;
pub mod pdf;
pub mod text;

use crate::classify::{self, CitySection};
use crate::model::{City, CityShareData, Entry, Trip, TripShareData};

/// Uniform view over either bundle kind, so each renderer has one body.
///
/// For a city bundle the city list is the single city and the heading/date
/// range come from the city; the owning trip stays reachable for header and
/// footer material.
pub(crate) struct BundleView<'a> {
    pub trip: &'a Trip,
    /// Card/guide heading: trip title for trip shares, city name for city shares.
    pub heading: &'a str,
    pub range_start: Option<&'a str>,
    pub range_end: Option<&'a str>,
    pub cities: &'a [City],
    pub entries: &'a [Entry],
}

impl<'a> BundleView<'a> {
    pub fn for_trip(data: &'a TripShareData) -> Self {
        BundleView {
            trip: &data.trip,
            heading: &data.trip.title,
            range_start: Some(&data.trip.start_date),
            range_end: Some(&data.trip.end_date),
            cities: &data.cities,
            entries: &data.entries,
        }
    }

    pub fn for_city(data: &'a CityShareData) -> Self {
        BundleView {
            trip: &data.trip,
            heading: &data.city.name,
            range_start: data.city.arrival_date.as_deref(),
            range_end: data.city.departure_date.as_deref(),
            cities: std::slice::from_ref(&data.city),
            entries: &data.entries,
        }
    }

    /// City sections in display order (plus trailing uncategorized).
    pub fn sections(&self) -> Vec<CitySection<'a>> {
        classify::group_by_city(self.entries, self.cities)
    }

    /// (cities, places, moments) counts for the card's stat strip.
    pub fn stats(&self) -> (usize, usize, usize) {
        let groups = classify::group_by_type(self.entries);
        (self.cities.len(), groups.places.len(), groups.moments.len())
    }

    /// Resolve an entry's city name, for per-entry metadata lines.
    pub fn city_name(&self, entry: &Entry) -> Option<&'a str> {
        let id = entry.city_id.as_deref()?;
        self.cities
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}
