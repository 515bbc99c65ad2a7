//! Pure grouping and sorting over entries.
//!
//! Three classifications feed the renderers and the CLI summary:
//!
//! - **By type**: places vs. moments, input order preserved.
//! - **By category**: place entries bucketed under their first tag's name.
//!   First-tag-wins — later tags never influence the bucket, and buckets
//!   appear in first-appearance order, not alphabetically. Tagless places
//!   land in a single uncategorized bucket.
//! - **By city**: one section per city in `order_index` order, each
//!   section's entries sorted ascending by date; entries with no city (or a
//!   city id the trip doesn't know) form a trailing uncategorized section.
//!
//! Date sorting compares the ISO-8601 strings lexicographically, which is
//! chronologically correct for this format.

use crate::model::{City, Entry};

/// Entries partitioned into places and moments, input order preserved.
#[derive(Debug, Default)]
pub struct TypeGroups<'a> {
    pub places: Vec<&'a Entry>,
    pub moments: Vec<&'a Entry>,
}

pub fn group_by_type(entries: &[Entry]) -> TypeGroups<'_> {
    let mut groups = TypeGroups::default();
    for entry in entries {
        if entry.is_place() {
            groups.places.push(entry);
        } else {
            groups.moments.push(entry);
        }
    }
    groups
}

/// One category bucket. `name: None` is the uncategorized bucket.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub name: Option<&'a str>,
    pub entries: Vec<&'a Entry>,
}

/// Bucket places by derived category (first tag name). Buckets are ordered
/// by first appearance; entries keep their input order within a bucket.
pub fn group_places_by_category<'a>(places: &[&'a Entry]) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for &entry in places {
        let key = entry.category();
        match groups.iter_mut().find(|g| g.name == key) {
            Some(group) => group.entries.push(entry),
            None => groups.push(CategoryGroup {
                name: key,
                entries: vec![entry],
            }),
        }
    }
    groups
}

/// One city's section of a share. `city: None` is the trailing section for
/// entries that belong to no known city.
#[derive(Debug)]
pub struct CitySection<'a> {
    pub city: Option<&'a City>,
    pub entries: Vec<&'a Entry>,
}

/// Section entries per city, ordered for rendering.
///
/// Every city produces a section (even an empty one) so a guide's table of
/// contents matches the trip's city list. The uncategorized section is
/// appended only when it has entries.
pub fn group_by_city<'a>(entries: &'a [Entry], cities: &'a [City]) -> Vec<CitySection<'a>> {
    let mut ordered: Vec<&City> = cities.iter().collect();
    ordered.sort_by_key(|c| c.order_index);

    let mut sections: Vec<CitySection<'a>> = ordered
        .into_iter()
        .map(|city| {
            let mut matched: Vec<&Entry> = entries
                .iter()
                .filter(|e| e.city_id.as_deref() == Some(city.id.as_str()))
                .collect();
            matched.sort_by(|a, b| a.date.cmp(&b.date));
            CitySection {
                city: Some(city),
                entries: matched,
            }
        })
        .collect();

    let known: Vec<&str> = cities.iter().map(|c| c.id.as_str()).collect();
    let mut stray: Vec<&Entry> = entries
        .iter()
        .filter(|e| match e.city_id.as_deref() {
            None => true,
            Some(id) => !known.contains(&id),
        })
        .collect();
    stray.sort_by(|a, b| a.date.cmp(&b.date));

    if !stray.is_empty() {
        sections.push(CitySection {
            city: None,
            entries: stray,
        });
    }
    sections
}

/// Entries sorted ascending by date, for flat (non-sectioned) rendering.
pub fn sort_by_date(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));
    sorted
}
