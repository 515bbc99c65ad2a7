//! Domain types shared across the share pipeline.
//!
//! These mirror what the journal stores on disk: a `Trip` owns ordered
//! `City` records and a flat list of `Entry` records (places and moments),
//! each carrying its tags and photos. Dates are kept as ISO-8601 strings
//! end to end — lexicographic comparison on them is chronologically correct,
//! so sorting never needs to parse.
//!
//! The two bundle types (`CityShareData`, `TripShareData`) are the immutable
//! snapshots one share action operates on: assembled fresh from live reads,
//! consumed once by exactly one renderer, then discarded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A trip: the top-level container for cities and entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    /// Display location ("Japan", "Pacific Northwest").
    pub location: String,
    /// ISO-8601 date string (`2024-05-01`).
    pub start_date: String,
    /// ISO-8601 date string.
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_uri: Option<String>,
}

/// A city within a trip. `order_index` defines display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<String>,
    pub order_index: u32,
}

/// The two kinds of journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Place,
    Moment,
}

/// A user-applied tag. The *first* tag on an entry doubles as its derived
/// category, so tag insertion order is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// A photo attached to an entry. `order` defines display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub uri: String,
    pub order: u32,
}

/// A single place or moment record within a trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub trip_id: String,
    /// Entries may float free of any city; those render in a trailing
    /// "other entries" section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_id: Option<String>,
    pub entry_type: EntryType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// 1–5, meaningful only for `Place` entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// ISO-8601 date string.
    pub date: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Entry {
    pub fn is_place(&self) -> bool {
        self.entry_type == EntryType::Place
    }

    /// Derived category: the name of the first tag, insertion order.
    /// Entries with no tags have no category ("uncategorized").
    pub fn category(&self) -> Option<&str> {
        self.tags.first().map(|t| t.name.as_str())
    }
}

/// Snapshot for sharing one city. Entries are pre-filtered to the city.
#[derive(Debug, Clone)]
pub struct CityShareData {
    pub city: City,
    pub trip: Trip,
    pub entries: Vec<Entry>,
}

/// Snapshot for sharing a whole trip. Entries span the trip.
#[derive(Debug, Clone)]
pub struct TripShareData {
    pub trip: Trip,
    pub cities: Vec<City>,
    pub entries: Vec<Entry>,
}

/// The closed set of output formats.
///
/// `Image` is the 400×600 "travel card" — visually card-like, mechanically a
/// single fixed-size PDF page. `Pdf` is the full multi-section guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareFormat {
    Text,
    Image,
    Pdf,
}

impl ShareFormat {
    pub const ALL: [ShareFormat; 3] = [ShareFormat::Text, ShareFormat::Image, ShareFormat::Pdf];

    /// Stable lowercase name, used in CLI args and translation keys.
    pub fn name(self) -> &'static str {
        match self {
            ShareFormat::Text => "text",
            ShareFormat::Image => "image",
            ShareFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ShareFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown share format: {0} (expected text, image, or pdf)")]
pub struct UnknownFormat(String);

impl FromStr for ShareFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ShareFormat::Text),
            "image" => Ok(ShareFormat::Image),
            "pdf" => Ok(ShareFormat::Pdf),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}
