//! CLI output formatting for the share pipeline.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for a bundle is its semantic identity — trip or city title plus entry
//! counts — with the artifact path shown afterwards as a `Wrote:` line. This
//! makes the output readable as a content inventory while still letting
//! users trace the export back to a file on disk.
//!
//! # Output Format
//!
//! ```text
//! Japan 2024 (5 entries)
//!     Tokyo (3 entries)
//!         food: 2
//!         temples: 1
//!     Kyoto (2 entries)
//!         (uncategorized): 2
//!
//! Wrote: /home/u/.cache/tripcard/Japan_2024_trip.pdf
//! Shared: Share the "Japan 2024" travel guide
//! ```
//!
//! # Architecture
//!
//! Each view has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::classify::{self, CitySection};
use crate::model::{CityShareData, Entry, TripShareData};
use crate::pipeline::ShareReport;
use crate::share::ShareOutcome;

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format an entity header: title plus entry count.
///
/// ```text
/// Japan 2024 (5 entries)
/// Tokyo (1 entry)
/// ```
fn entity_header(title: &str, count: usize) -> String {
    let noun = if count == 1 { "entry" } else { "entries" };
    format!("{} ({} {})", title, count, noun)
}

/// Format the category breakdown of a section's place entries, one line
/// per category in first-appearance order. Moments carry no categories
/// and are left out.
fn category_lines(entries: &[&Entry], depth: usize) -> Vec<String> {
    let places: Vec<&Entry> = entries.iter().copied().filter(|e| e.is_place()).collect();
    classify::group_places_by_category(&places)
        .into_iter()
        .map(|group| {
            let name = group.name.unwrap_or("(uncategorized)");
            format!("{}{}: {}", indent(depth), name, group.entries.len())
        })
        .collect()
}

fn section_lines(section: &CitySection<'_>, lines: &mut Vec<String>) {
    let name = section.city.map(|c| c.name.as_str()).unwrap_or("Other");
    lines.push(format!(
        "{}{}",
        indent(1),
        entity_header(name, section.entries.len())
    ));
    lines.extend(category_lines(&section.entries, 2));
}

/// Format a trip bundle overview: trip header, then one block per city
/// section with its category breakdown.
pub fn format_trip_overview(data: &TripShareData) -> Vec<String> {
    let mut lines = vec![entity_header(&data.trip.title, data.entries.len())];
    for section in classify::group_by_city(&data.entries, &data.cities) {
        section_lines(&section, &mut lines);
    }
    lines
}

/// Format a city bundle overview.
pub fn format_city_overview(data: &CityShareData) -> Vec<String> {
    let mut lines = vec![entity_header(&data.city.name, data.entries.len())];
    lines.extend(category_lines(&data.entries.iter().collect::<Vec<_>>(), 1));
    lines
}

/// Format the outcome of a completed share run.
pub fn format_share_report(report: &ShareReport) -> Vec<String> {
    let mut lines = vec![format!("Wrote: {}", report.artifact.display())];
    match report.outcome {
        ShareOutcome::Shared => {
            lines.push(format!("Shared: {}", report.payload.dialog_title));
        }
        ShareOutcome::Unavailable => {
            lines.push("No share sheet available; artifact kept on disk".to_string());
        }
    }
    lines
}

/// Print a trip overview to stdout.
pub fn print_trip_overview(data: &TripShareData) {
    for line in format_trip_overview(data) {
        println!("{}", line);
    }
}

/// Print a city overview to stdout.
pub fn print_city_overview(data: &CityShareData) {
    for line in format_city_overview(data) {
        println!("{}", line);
    }
}

/// Print a share report to stdout.
pub fn print_share_report(report: &ShareReport) {
    println!();
    for line in format_share_report(report) {
        println!("{}", line);
    }
}
