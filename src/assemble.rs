//! Bundle assembly: repository reads → immutable share snapshots.
//!
//! One bundle is assembled fresh per share action from live reads — nothing
//! here is cached or mutated. A trip-level share fails fast with
//! [`AssembleError::TripNotFound`] before any entry or city read happens;
//! once the trip is known to exist, the entry and city reads are
//! independent and fan out concurrently.

use crate::model::{CityShareData, Trip, TripShareData};
use crate::store::{CityRepository, EntryRepository, StoreError, TripRepository};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error("trip not found: {0}")]
    TripNotFound(String),
    #[error("city not found: {0}")]
    CityNotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Assemble the bundle for sharing one city of a trip.
///
/// The caller already holds the `Trip` (the screen that offers the share
/// does), so only entries and the city record are read. Entries are
/// filtered down to the city here — renderers never re-filter.
pub async fn city_share_data(
    entries: &dyn EntryRepository,
    cities: &dyn CityRepository,
    trip: Trip,
    city_id: &str,
) -> Result<CityShareData, AssembleError> {
    let all_entries = entries.by_trip_id_with_relations(&trip.id).await?;
    let city_entries = all_entries
        .into_iter()
        .filter(|e| e.city_id.as_deref() == Some(city_id))
        .collect();

    let city = cities
        .by_trip_id(&trip.id)
        .await?
        .into_iter()
        .find(|c| c.id == city_id)
        .ok_or_else(|| AssembleError::CityNotFound(city_id.to_string()))?;

    Ok(CityShareData {
        city,
        trip,
        entries: city_entries,
    })
}

/// Assemble the bundle for sharing a whole trip.
///
/// Entry and city reads are independent, so they are issued concurrently
/// and awaited together.
pub async fn trip_share_data(
    trips: &dyn TripRepository,
    cities: &dyn CityRepository,
    entries: &dyn EntryRepository,
    trip_id: &str,
) -> Result<TripShareData, AssembleError> {
    let trip = trips
        .by_id(trip_id)
        .await?
        .ok_or_else(|| AssembleError::TripNotFound(trip_id.to_string()))?;

    let (trip_entries, trip_cities) = tokio::try_join!(
        entries.by_trip_id_with_relations(trip_id),
        cities.by_trip_id(trip_id),
    )?;

    Ok(TripShareData {
        trip,
        cities: trip_cities,
        entries: trip_entries,
    })
}
