//! Full-guide renderer.
//!
//! Builds the complete HTML document the print engine turns into the PDF
//! guide: a header with title, date range, location and summary, then one
//! section per city in `order_index` order, then a trailing "other entries"
//! section for entries that belong to no city. Within a section, bullets
//! follow date order; each shows the entry title, stars for rated places,
//! and the notes on their own line.
//!
//! Section ordering is user-facing contract, not styling: a guide's table
//! of contents must match the trip's city list exactly.

use super::BundleView;
use crate::classify::CitySection;
use crate::format::{format_date_range, format_rating};
use crate::i18n::Translations;
use crate::model::{CityShareData, Entry, TripShareData};
use maud::{html, Markup, DOCTYPE};

const GUIDE_CSS: &str = include_str!("../../static/guide.css");

pub fn trip_document(data: &TripShareData, t: &Translations, app_name: &str) -> String {
    render(&BundleView::for_trip(data), t, app_name)
}

pub fn city_document(data: &CityShareData, t: &Translations, app_name: &str) -> String {
    render(&BundleView::for_city(data), t, app_name)
}

fn render(view: &BundleView<'_>, t: &Translations, app_name: &str) -> String {
    let trip = view.trip;
    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (view.heading) }
                style { (GUIDE_CSS) }
            }
            body {
                header.doc-header {
                    h1 { (view.heading) }
                    p.range { (format_date_range(view.range_start, view.range_end)) }
                    p.location { (trip.location) }
                    @if let Some(summary) = &trip.summary {
                        p.summary { (summary) }
                    }
                }
                @if view.entries.is_empty() {
                    p.empty { (t.translate("export.no_entries", &[])) }
                } @else {
                    @for section in view.sections() {
                        (render_section(&section, t))
                    }
                }
                footer.doc-footer {
                    (t.translate("export.attribution", &[("app", app_name)]))
                }
            }
        }
    };
    markup.into_string()
}

fn render_section(section: &CitySection<'_>, t: &Translations) -> Markup {
    match section.city {
        Some(city) => html! {
            section.city-section {
                h2 { (city.name) }
                p.range {
                    (format_date_range(city.arrival_date.as_deref(), city.departure_date.as_deref()))
                }
                (entry_list(&section.entries))
            }
        },
        None => html! {
            section.other-section {
                h2 { (t.translate("export.uncategorized", &[])) }
                (entry_list(&section.entries))
            }
        },
    }
}

fn entry_list(entries: &[&Entry]) -> Markup {
    html! {
        ul {
            @for entry in entries {
                li {
                    (entry.title)
                    @if entry.is_place() {
                        @let stars = format_rating(entry.rating);
                        @if !stars.is_empty() {
                            span.stars { (stars) }
                        }
                    }
                    @if let Some(notes) = &entry.notes {
                        span.notes { (notes) }
                    }
                }
            }
        }
    }
}
