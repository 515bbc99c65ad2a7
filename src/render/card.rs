//! Travel-card renderer.
//!
//! A fixed-width (400px) HTML card: optional embedded cover photo, heading
//! with date range, a three-stat strip (cities / places / moments), the
//! first eight entries by date with a type icon and inline stars, an
//! overflow line when more exist, and a title + app-name footer.
//!
//! The cover is inlined as a base64 data URI so the printed card is fully
//! self-contained. Trip cards use the trip's cover image; city cards fall
//! back to the first photo among the city's entries. When neither resolves,
//! the card renders with **no** `<img>` element at all — no placeholder box.
//!
//! The card is "an image" to the user but mechanically a single 400×600 PDF
//! page; the export writer owns that page geometry.

use super::BundleView;
use crate::classify;
use crate::format::{format_date_range, format_rating};
use crate::i18n::Translations;
use crate::model::{CityShareData, Entry, EntryType, TripShareData};
use crate::photo;
use maud::{html, Markup, DOCTYPE};

const CARD_CSS: &str = include_str!("../../static/card.css");

/// Entries shown on the card before the "+N more" overflow line.
const MAX_CARD_ENTRIES: usize = 8;

pub fn trip_card(data: &TripShareData, t: &Translations, app_name: &str) -> String {
    let cover = photo::trip_cover_data_uri(&data.trip);
    render(&BundleView::for_trip(data), cover, t, app_name)
}

pub fn city_card(data: &CityShareData, t: &Translations, app_name: &str) -> String {
    let cover = photo::first_photo_data_uri(&data.entries);
    render(&BundleView::for_city(data), cover, t, app_name)
}

fn render(
    view: &BundleView<'_>,
    cover: Option<String>,
    t: &Translations,
    app_name: &str,
) -> String {
    let (cities, places, moments) = view.stats();
    let by_date = classify::sort_by_date(view.entries);
    let shown = &by_date[..by_date.len().min(MAX_CARD_ENTRIES)];
    let overflow = by_date.len().saturating_sub(MAX_CARD_ENTRIES);

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                style { (CARD_CSS) }
            }
            body {
                div.card {
                    @if let Some(uri) = &cover {
                        img.cover src=(uri) alt=(view.heading);
                    }
                    header.card-header {
                        h1 { (view.heading) }
                        p.range { (format_date_range(view.range_start, view.range_end)) }
                    }
                    div.stats {
                        (stat(cities, &t.translate("export.stats.cities", &[])))
                        (stat(places, &t.translate("export.stats.places", &[])))
                        (stat(moments, &t.translate("export.stats.moments", &[])))
                    }
                    @if shown.is_empty() {
                        p.empty { (t.translate("export.no_entries", &[])) }
                    } @else {
                        ul.entries {
                            @for entry in shown {
                                (entry_line(view, entry))
                            }
                        }
                        @if overflow > 0 {
                            p.more {
                                (t.translate("export.more", &[("count", &overflow.to_string())]))
                            }
                        }
                    }
                    footer.card-footer {
                        span { (view.heading) }
                        span.app { (app_name) }
                    }
                }
            }
        }
    };
    markup.into_string()
}

fn stat(value: usize, label: &str) -> Markup {
    html! {
        div.stat {
            span.value { (value) }
            span.label { (label) }
        }
    }
}

fn entry_line(view: &BundleView<'_>, entry: &Entry) -> Markup {
    let icon = match entry.entry_type {
        EntryType::Place => "📍",
        EntryType::Moment => "✦",
    };
    let stars = if entry.is_place() {
        format_rating(entry.rating)
    } else {
        String::new()
    };
    html! {
        li {
            span.icon { (icon) }
            (entry.title)
            @if !stars.is_empty() {
                span.stars { (stars) }
            }
            @if let Some(city) = view.city_name(entry) {
                span.city { (city) }
            }
        }
    }
}
