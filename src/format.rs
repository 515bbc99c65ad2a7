//! Rating and date formatting shared by all three renderers.
//!
//! ## Whole stars only
//!
//! Exports render ratings as whole stars (`★★★★☆`) even though the journal
//! UI elsewhere permits half-star ratings. That narrowing happens here, at
//! the render boundary, and is intentional: print output has no half-star
//! glyph that survives every font, so values are whole 1–5 or nothing.
//!
//! ## Date forms
//!
//! Dates arrive as ISO-8601 strings. The short form is abbreviated month +
//! day ("May 1"); the closing bound of a range also carries the year
//! ("May 14, 2024"). A missing bound renders the literal `?` rather than
//! dropping the segment, so a city with only a departure date still reads
//! `? – May 5, 2024`.

use chrono::NaiveDate;

const MAX_STARS: u8 = 5;

/// Render a rating as filled + empty stars.
///
/// `Some(3)` → `★★★☆☆`. `None` and `Some(0)` both render as the empty
/// string so callers can append unconditionally. Values above 5 clamp.
pub fn format_rating(rating: Option<u8>) -> String {
    match rating {
        None | Some(0) => String::new(),
        Some(n) => {
            let filled = n.min(MAX_STARS) as usize;
            let mut stars = "★".repeat(filled);
            stars.push_str(&"☆".repeat((MAX_STARS as usize) - filled));
            stars
        }
    }
}

/// Short date: abbreviated month + unpadded day ("May 1").
///
/// Unparseable input is passed through unchanged — exports degrade to
/// showing the raw string rather than failing.
pub fn format_short_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format("%b %-d").to_string(),
        None => iso.to_string(),
    }
}

/// Closing-bound date: short form plus the year ("May 14, 2024").
pub fn format_closing_date(iso: &str) -> String {
    match parse_date(iso) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => iso.to_string(),
    }
}

/// Date range "May 1 – May 14, 2024". Either bound may be absent and
/// renders as `?`.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    let opening = match start {
        Some(s) => format_short_date(s),
        None => "?".to_string(),
    };
    let closing = match end {
        Some(s) => format_closing_date(s),
        None => "?".to_string(),
    };
    format!("{opening} – {closing}")
}

/// Parse the date portion of an ISO-8601 string, tolerating a trailing
/// time component (`2024-05-01T09:30:00Z`).
fn parse_date(iso: &str) -> Option<NaiveDate> {
    let date_part = iso.split('T').next().unwrap_or(iso);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // format_rating() tests
    // =========================================================================

    #[test]
    fn rating_three_stars() {
        assert_eq!(format_rating(Some(3)), "★★★☆☆");
    }

    #[test]
    fn rating_full() {
        assert_eq!(format_rating(Some(5)), "★★★★★");
    }

    #[test]
    fn rating_one() {
        assert_eq!(format_rating(Some(1)), "★☆☆☆☆");
    }

    #[test]
    fn rating_zero_is_empty() {
        assert_eq!(format_rating(Some(0)), "");
    }

    #[test]
    fn rating_none_is_empty() {
        assert_eq!(format_rating(None), "");
    }

    #[test]
    fn rating_clamps_above_five() {
        assert_eq!(format_rating(Some(9)), "★★★★★");
    }

    // =========================================================================
    // date formatting tests
    // =========================================================================

    #[test]
    fn short_date_abbreviated_month() {
        assert_eq!(format_short_date("2024-05-01"), "May 1");
        assert_eq!(format_short_date("2024-12-25"), "Dec 25");
    }

    #[test]
    fn short_date_tolerates_time_component() {
        assert_eq!(format_short_date("2024-05-01T09:30:00Z"), "May 1");
    }

    #[test]
    fn short_date_passes_through_garbage() {
        assert_eq!(format_short_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn closing_date_carries_year() {
        assert_eq!(format_closing_date("2024-05-14"), "May 14, 2024");
    }

    #[test]
    fn range_full() {
        assert_eq!(
            format_date_range(Some("2024-05-01"), Some("2024-05-14")),
            "May 1 – May 14, 2024"
        );
    }

    #[test]
    fn range_missing_start_renders_question_mark() {
        assert_eq!(
            format_date_range(None, Some("2024-05-05")),
            "? – May 5, 2024"
        );
    }

    #[test]
    fn range_missing_end_renders_question_mark() {
        assert_eq!(format_date_range(Some("2024-05-02"), None), "May 2 – ?");
    }

    #[test]
    fn range_both_missing() {
        assert_eq!(format_date_range(None, None), "? – ?");
    }
}
