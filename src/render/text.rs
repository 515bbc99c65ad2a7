//! Plain-text renderer.
//!
//! Produces a line-oriented document meant to be pasted into a message or
//! read in any text viewer:
//!
//! ```text
//! ✈️ Japan 2024
//! May 1 – May 14, 2024
//! Japan
//!
//! Two weeks of temples and noodles.
//!
//! 📍 Tokyo
//! May 2 – May 5, 2024
//! • Senso-ji ★★★★☆
//! • Golden Gai
//!   "Great view"
//!
//! 📍 Kyoto
//! ? – May 9, 2024
//! • Fushimi Inari ★★★★★
//!
//! Other entries
//! • Night train
//!
//! ──────────
//! Shared from Tripcard
//! ```
//!
//! City blocks follow `order_index` order, bullets follow date order, and a
//! missing arrival or departure bound renders as `?`. Ratings render only
//! for place entries; notes render as an indented quoted line.

use super::BundleView;
use crate::classify::CitySection;
use crate::format::{format_date_range, format_rating};
use crate::i18n::Translations;
use crate::model::{CityShareData, Entry, TripShareData};

const SEPARATOR: &str = "──────────";

pub fn trip_text(data: &TripShareData, t: &Translations, app_name: &str) -> String {
    render(&BundleView::for_trip(data), t, app_name)
}

pub fn city_text(data: &CityShareData, t: &Translations, app_name: &str) -> String {
    render(&BundleView::for_city(data), t, app_name)
}

fn render(view: &BundleView<'_>, t: &Translations, app_name: &str) -> String {
    let trip = view.trip;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("✈️ {}", trip.title));
    lines.push(format_date_range(
        Some(&trip.start_date),
        Some(&trip.end_date),
    ));
    lines.push(trip.location.clone());
    if let Some(summary) = &trip.summary {
        lines.push(String::new());
        lines.push(summary.clone());
    }

    if view.entries.is_empty() {
        lines.push(String::new());
        lines.push(t.translate("export.no_entries", &[]));
    } else {
        for section in view.sections() {
            push_section(&mut lines, &section, t);
        }
    }

    lines.push(String::new());
    lines.push(SEPARATOR.to_string());
    lines.push(t.translate("export.attribution", &[("app", app_name)]));

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, section: &CitySection<'_>, t: &Translations) {
    lines.push(String::new());
    match section.city {
        Some(city) => {
            lines.push(format!("📍 {}", city.name));
            lines.push(format_date_range(
                city.arrival_date.as_deref(),
                city.departure_date.as_deref(),
            ));
        }
        None => lines.push(t.translate("export.uncategorized", &[])),
    }
    for entry in &section.entries {
        push_entry(lines, entry);
    }
}

fn push_entry(lines: &mut Vec<String>, entry: &Entry) {
    let stars = if entry.is_place() {
        format_rating(entry.rating)
    } else {
        String::new()
    };
    if stars.is_empty() {
        lines.push(format!("• {}", entry.title));
    } else {
        lines.push(format!("• {} {}", entry.title, stars));
    }
    if let Some(notes) = &entry.notes {
        lines.push(format!("  \"{notes}\""));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{city, city_bundle, moment, place, trip_bundle};

    fn t() -> Translations {
        Translations::for_locale("en")
    }

    // Scenario: a city bundle with a rated, dated place and a later noted
    // entry renders city name, titles in date order, stars, quoted notes.
    #[test]
    fn city_text_lists_entries_in_date_order_with_stars_and_notes() {
        let mut c = city("c1", "Tokyo", 0);
        c.arrival_date = Some("2024-05-01".into());
        c.departure_date = Some("2024-05-05".into());

        let mut first = place("e1", "2024-05-01");
        first.title = "Senso-ji".into();
        first.rating = Some(4);
        first.city_id = Some("c1".into());
        let mut second = place("e2", "2024-05-03");
        second.title = "Harbor walk".into();
        second.notes = Some("Great view".into());
        second.city_id = Some("c1".into());

        // Inserted out of date order on purpose.
        let out = city_text(&city_bundle(c, vec![second, first]), &t(), "Tripcard");

        assert!(out.contains("📍 Tokyo"));
        let senso = out.find("Senso-ji").unwrap();
        let harbor = out.find("Harbor walk").unwrap();
        assert!(senso < harbor, "entries must be date-ordered");
        assert!(out.contains("• Senso-ji ★★★★☆"));
        assert!(out.contains("  \"Great view\""));
    }

    #[test]
    fn header_has_marker_title_range_location() {
        let out = trip_text(&trip_bundle(vec![], vec![]), &t(), "Tripcard");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("✈️ Japan 2024"));
        assert_eq!(lines.next(), Some("May 1 – May 14, 2024"));
        assert_eq!(lines.next(), Some("Japan"));
    }

    #[test]
    fn summary_rendered_when_present() {
        let mut bundle = trip_bundle(vec![], vec![place("e1", "2024-05-01")]);
        bundle.trip.summary = Some("Two weeks of temples.".into());
        let out = trip_text(&bundle, &t(), "Tripcard");
        assert!(out.contains("Two weeks of temples."));
    }

    #[test]
    fn empty_bundle_renders_placeholder_not_nothing() {
        let out = trip_text(&trip_bundle(vec![], vec![]), &t(), "Tripcard");
        assert!(out.contains("No entries yet."));
    }

    #[test]
    fn missing_city_bound_renders_question_mark() {
        let mut c = city("c1", "Kyoto", 0);
        c.departure_date = Some("2024-05-09".into());
        let mut e = place("e1", "2024-05-07");
        e.city_id = Some("c1".into());
        let out = trip_text(&trip_bundle(vec![c], vec![e]), &t(), "Tripcard");
        assert!(out.contains("? – May 9, 2024"));
    }

    #[test]
    fn moments_never_show_stars() {
        let mut m = moment("e1", "2024-05-01");
        m.title = "Sudden rain".into();
        m.rating = Some(4); // bad data; render must ignore it
        let out = trip_text(&trip_bundle(vec![], vec![m]), &t(), "Tripcard");
        assert!(out.contains("• Sudden rain"));
        assert!(!out.contains('★'));
    }

    #[test]
    fn uncategorized_block_trails_city_blocks() {
        let mut homed = place("e1", "2024-05-02");
        homed.city_id = Some("c1".into());
        let stray = moment("e2", "2024-05-03");
        let out = trip_text(
            &trip_bundle(vec![city("c1", "Tokyo", 0)], vec![stray, homed]),
            &t(),
            "Tripcard",
        );
        let tokyo = out.find("📍 Tokyo").unwrap();
        let other = out.find("Other entries").unwrap();
        assert!(tokyo < other);
    }

    #[test]
    fn footer_has_separator_and_attribution() {
        let out = trip_text(&trip_bundle(vec![], vec![]), &t(), "Tripcard");
        let mut lines = out.lines().rev();
        assert_eq!(lines.next(), Some("Shared from Tripcard"));
        assert_eq!(lines.next(), Some(SEPARATOR));
    }

    #[test]
    fn localized_output_uses_locale_table() {
        let out = trip_text(
            &trip_bundle(vec![], vec![]),
            &Translations::for_locale("de"),
            "Tripcard",
        );
        assert!(out.contains("Noch keine Einträge."));
        // attribution falls back to the default locale
        assert!(out.contains("Shared from Tripcard"));
    }
}
