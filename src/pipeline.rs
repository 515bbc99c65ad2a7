//! The share pipeline orchestrator.
//!
//! Single entry points [`share_trip`] and [`share_city`] dispatch over the
//! closed format set and run one linear pass: render → write → invoke.
//! (Assembly happens upstream in [`crate::assemble`]; the caller hands a
//! finished bundle in, consumes it once, and drops it.)
//!
//! There is no retry, no dedup, and no cancellation: each call is an
//! independent pipeline instance that runs to completion or returns an
//! error. Overlapping invocations are the caller's problem — the screen
//! that triggers a share is expected to disable its button while one is in
//! flight.
//!
//! Failure policy, end to end: photo-read failures were already swallowed
//! inside the renderers (cosmetic degradation); share-sheet unavailability
//! resolves as a successful no-op; render/print/write failures and every
//! assembly error bubble out of here for the caller to surface.

use crate::export::{ExportError, ExportWriter, PageSize, PdfPrinter};
use crate::i18n::Translations;
use crate::model::{CityShareData, ShareFormat, TripShareData};
use crate::render::{card, pdf, text};
use crate::share::{self, ShareInvokeError, ShareOutcome, SharePayload, ShareSheet, ShareTarget};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error(transparent)]
    Assemble(#[from] crate::assemble::AssembleError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Invoke(#[from] ShareInvokeError),
}

/// Everything a pipeline run needs besides the bundle itself. The
/// translations and app name feed the renderers; writer, printer, and
/// sheet are the effectful seams.
pub struct ShareDeps<'a> {
    pub translations: &'a Translations,
    pub app_name: &'a str,
    pub writer: &'a ExportWriter,
    pub printer: &'a dyn PdfPrinter,
    pub sheet: &'a dyn ShareSheet,
}

/// What a completed share produced.
#[derive(Debug)]
pub struct ShareReport {
    pub artifact: PathBuf,
    pub payload: SharePayload,
    pub outcome: ShareOutcome,
}

/// Share a whole trip in the selected format.
pub fn share_trip(
    data: &TripShareData,
    format: ShareFormat,
    deps: &ShareDeps<'_>,
) -> Result<ShareReport, ShareError> {
    let t = deps.translations;
    let artifact = match format {
        ShareFormat::Text => {
            let body = text::trip_text(data, t, deps.app_name);
            deps.writer.write_text(&data.trip.title, &body)?
        }
        ShareFormat::Image => {
            let html = card::trip_card(data, t, deps.app_name);
            deps.writer
                .write_pdf(deps.printer, &data.trip.title, &html, PageSize::CARD)?
        }
        ShareFormat::Pdf => {
            let html = pdf::trip_document(data, t, deps.app_name);
            deps.writer
                .write_pdf(deps.printer, &data.trip.title, &html, PageSize::GUIDE)?
        }
    };
    invoke(artifact, ShareTarget::Trip, format, &data.trip.title, deps)
}

/// Share one city of a trip in the selected format.
pub fn share_city(
    data: &CityShareData,
    format: ShareFormat,
    deps: &ShareDeps<'_>,
) -> Result<ShareReport, ShareError> {
    let t = deps.translations;
    let artifact = match format {
        ShareFormat::Text => {
            let body = text::city_text(data, t, deps.app_name);
            deps.writer.write_text(&data.city.name, &body)?
        }
        ShareFormat::Image => {
            let html = card::city_card(data, t, deps.app_name);
            deps.writer
                .write_pdf(deps.printer, &data.city.name, &html, PageSize::CARD)?
        }
        ShareFormat::Pdf => {
            let html = pdf::city_document(data, t, deps.app_name);
            deps.writer
                .write_pdf(deps.printer, &data.city.name, &html, PageSize::GUIDE)?
        }
    };
    invoke(artifact, ShareTarget::City, format, &data.city.name, deps)
}

fn invoke(
    artifact: PathBuf,
    target: ShareTarget,
    format: ShareFormat,
    subject: &str,
    deps: &ShareDeps<'_>,
) -> Result<ShareReport, ShareError> {
    let payload = share::payload(
        artifact.clone(),
        target,
        format,
        subject,
        deps.translations,
    );
    let outcome = deps.sheet.present(&payload)?;
    Ok(ShareReport {
        artifact,
        payload,
        outcome,
    })
}
