//! Handing artifacts to the system share facility.
//!
//! The last pipeline stage. A [`SharePayload`] bundles everything the OS
//! needs: the file, its MIME type, an optional platform type identifier
//! (UTI), and a localized dialog title. The [`ShareSheet`] trait hides the
//! actual hand-off; [`SystemShare`] implements it over the desktop opener
//! (`xdg-open` on Linux, `open` on macOS), and tests substitute a
//! recording fake.
//!
//! Unavailability is not an error: if no opener exists on this system the
//! invocation resolves as [`ShareOutcome::Unavailable`] and the pipeline
//! still reports success — the artifact file was produced either way.

use crate::i18n::Translations;
use crate::model::ShareFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareInvokeError {
    #[error("failed to launch system opener: {0}")]
    Launch(#[from] std::io::Error),
    #[error("system opener exited with status {0}")]
    OpenerFailed(i32),
}

/// What the share invocation is about: a whole trip or one city. Picks the
/// dialog-title translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Trip,
    City,
}

impl ShareTarget {
    fn key_segment(self) -> &'static str {
        match self {
            ShareTarget::Trip => "trip",
            ShareTarget::City => "city",
        }
    }
}

/// Everything the system share facility needs for one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub path: PathBuf,
    pub mime: &'static str,
    /// Platform type identifier. Set for the full-PDF guide only.
    pub uti: Option<&'static str>,
    pub dialog_title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The artifact was handed to the system.
    Shared,
    /// No share facility on this system; treated as a successful no-op.
    Unavailable,
}

/// MIME type per format. The card is mechanically a PDF.
pub fn mime_for(format: ShareFormat) -> &'static str {
    match format {
        ShareFormat::Text => "text/plain",
        ShareFormat::Image | ShareFormat::Pdf => "application/pdf",
    }
}

/// Platform type identifier per format. Only the full guide announces one;
/// the card deliberately does not.
pub fn uti_for(format: ShareFormat) -> Option<&'static str> {
    match format {
        ShareFormat::Pdf => Some("com.adobe.pdf"),
        ShareFormat::Text | ShareFormat::Image => None,
    }
}

/// Localized share-dialog title, keyed by target and format and
/// parameterized with the subject's display name.
pub fn dialog_title(
    target: ShareTarget,
    format: ShareFormat,
    subject: &str,
    t: &Translations,
) -> String {
    let key = format!(
        "share.dialog.{}.{}",
        target.key_segment(),
        format.name()
    );
    t.translate(&key, &[("name", subject)])
}

/// Build the complete payload for an artifact file.
pub fn payload(
    path: PathBuf,
    target: ShareTarget,
    format: ShareFormat,
    subject: &str,
    t: &Translations,
) -> SharePayload {
    SharePayload {
        path,
        mime: mime_for(format),
        uti: uti_for(format),
        dialog_title: dialog_title(target, format, subject, t),
    }
}

/// The share hand-off seam.
pub trait ShareSheet: Send + Sync {
    fn present(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareInvokeError>;
}

/// Share via the desktop opener command.
pub struct SystemShare;

impl SystemShare {
    fn opener() -> Option<&'static str> {
        if cfg!(target_os = "macos") {
            Some("open")
        } else if cfg!(target_os = "linux") {
            Some("xdg-open")
        } else {
            None
        }
    }

    /// Whether the opener binary exists anywhere on PATH.
    fn opener_available(opener: &str) -> bool {
        let Some(paths) = std::env::var_os("PATH") else {
            return false;
        };
        std::env::split_paths(&paths).any(|dir| dir.join(opener).is_file())
    }
}

impl ShareSheet for SystemShare {
    fn present(&self, payload: &SharePayload) -> Result<ShareOutcome, ShareInvokeError> {
        let Some(opener) = Self::opener().filter(|o| Self::opener_available(o)) else {
            tracing::info!("no system opener available, skipping share");
            return Ok(ShareOutcome::Unavailable);
        };

        tracing::debug!(
            title = %payload.dialog_title,
            mime = payload.mime,
            uti = ?payload.uti,
            "presenting share"
        );
        let status = std::process::Command::new(opener)
            .arg(&payload.path)
            .status()?;
        if status.success() {
            Ok(ShareOutcome::Shared)
        } else {
            Err(ShareInvokeError::OpenerFailed(status.code().unwrap_or(-1)))
        }
    }
}

/// Share sheet that does nothing. Backs the CLI's `--no-share` flag.
pub struct NoShare;

impl ShareSheet for NoShare {
    fn present(&self, _payload: &SharePayload) -> Result<ShareOutcome, ShareInvokeError> {
        Ok(ShareOutcome::Unavailable)
    }
}
