//! # Tripcard
//!
//! Turn a travel journal into shareable artifacts. A trip's cities and
//! entries become a plain-text recap, a postcard-sized card, or a full PDF
//! guide, then get handed to the system share sheet.
//!
//! # Architecture: One Linear Pipeline
//!
//! Every share runs the same five stages, each a pure or narrowly-effectful
//! step that the next stage consumes:
//!
//! ```text
//! 1. Assemble   store        →  bundle          (trip + cities + entries)
//! 2. Classify   bundle       →  sections        (by city, type, category)
//! 3. Render     sections     →  text / HTML     (per-format renderers)
//! 4. Write      text / HTML  →  artifact file   (.txt or printed .pdf)
//! 5. Invoke     artifact     →  share sheet     (or a graceful no-op)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: assemble, classify, and render are pure data
//!   transformations, so unit tests exercise them without a browser or a
//!   share sheet in sight.
//! - **Format independence**: all three formats share the same assembled
//!   bundle and the same grouping rules, so a trip reads identically as
//!   text and as PDF.
//! - **Swappable effects**: printing and sharing sit behind traits
//!   ([`export::PdfPrinter`], [`share::ShareSheet`]), so the pipeline runs
//!   against fakes in tests and against Chrome and `xdg-open` in production.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Domain types serialized from the store (`Trip`, `City`, `Entry`, `ShareFormat`) |
//! | [`store`] | Repository traits plus the JSON-file store backing the CLI |
//! | [`assemble`] | Builds a share bundle from repositories, failing early on missing ids |
//! | [`classify`] | Grouping rules: by city, by entry type, by derived category |
//! | [`format`] | Small display formatters: star ratings, dates, date ranges |
//! | [`i18n`] | Embedded locale tables with dot-path lookup and English fallback |
//! | [`photo`] | Photo files to base64 data URIs, degrading quietly on read failure |
//! | [`render`] | Per-format renderers: plain text, card HTML, guide HTML (Maud) |
//! | [`export`] | Artifact writing: filenames, the PDF printer trait, page sizes |
//! | [`share`] | Share payload construction and the system share-sheet invoker |
//! | [`pipeline`] | Orchestrator dispatching render → write → invoke per format |
//! | [`config`] | `tripcard.toml` loading and validation |
//! | [`output`] | CLI output formatting — bundle overviews and share reports |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Card and guide HTML is generated with [Maud](https://maud.lambda.xyz/),
//! a compile-time HTML macro system, rather than Handlebars or Tera.
//! Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped, which matters
//!   when entry titles and notes are free user text.
//! - **Zero runtime files**: stylesheets ship inside the binary via `include_str!`.
//!
//! ## PDF as the Image Format
//!
//! The "image" card is exported as a fixed 400×600 point PDF printed from
//! HTML, not a raster screenshot. Printing through headless Chrome keeps
//! text selectable, keeps file sizes small, and reuses the exact same
//! render path as the full guide. Share sheets treat a single-page PDF the
//! same way they treat an image attachment.
//!
//! ## Lexicographic Dates
//!
//! Entry dates are ISO-8601 strings and stay strings through the whole
//! pipeline. Sorting them lexicographically *is* sorting them
//! chronologically, so classify and render never parse a date except to
//! pretty-print it — and a malformed date degrades to literal display
//! instead of failing a share.
//!
//! ## Failure Policy
//!
//! A share should almost never fail for cosmetic reasons. Unreadable photos
//! log a warning and render without the image; a missing share sheet is a
//! successful no-op with the artifact kept on disk. Only missing data
//! (unknown trip or city id) and real I/O or printer failures abort the
//! pipeline.

pub mod assemble;
pub mod classify;
pub mod config;
pub mod export;
pub mod format;
pub mod i18n;
pub mod model;
pub mod output;
pub mod photo;
pub mod pipeline;
pub mod render;
pub mod share;
pub mod store;

#[cfg(test)]
pub(crate) mod test_helpers;
