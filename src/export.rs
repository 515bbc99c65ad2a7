//! Artifact writing: rendered payloads → files on disk.
//!
//! Text exports are written straight to the export directory as
//! `{title_with_underscores}_trip.txt`. HTML payloads (card and guide) go
//! through a [`PdfPrinter`] — the production implementation drives
//! Chrome's print-to-PDF, tests substitute a fake — and the resulting
//! bytes land next to the text exports as `.pdf` files.
//!
//! The default export directory is the user cache directory
//! (`~/.cache/tripcard` on Linux); callers can point the writer anywhere,
//! which is how the CLI's `--out-dir` and the tests work. Artifacts are
//! throwaway by design: nothing here caches or dedupes across share
//! actions, the file just needs to live long enough to be handed over.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("print engine failed: {0}")]
    Printer(String),
    #[error("no cache directory available on this system")]
    NoCacheDir,
}

/// Page geometry handed to the print engine, in inches (what Chrome's
/// print API speaks). Pixel sizes convert at the CSS ratio of 96 px/in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl PageSize {
    /// The travel card: one fixed 400×600 px page.
    pub const CARD: PageSize = PageSize {
        width_in: 400.0 / 96.0,
        height_in: 600.0 / 96.0,
    };

    /// The full guide: A4 pages.
    pub const GUIDE: PageSize = PageSize {
        width_in: 8.27,
        height_in: 11.69,
    };
}

/// HTML → PDF. Implemented by [`ChromePrinter`] in production and by
/// in-memory fakes in tests, so no test ever launches a browser.
pub trait PdfPrinter: Send + Sync {
    fn print(&self, html: &str, page: PageSize) -> Result<Vec<u8>, ExportError>;
}

/// Print engine backed by headless Chrome.
///
/// Each call launches a browser, navigates a tab to the HTML inlined as a
/// `data:` URL (no temp file needed), and prints with backgrounds on and
/// zero margins — the payload carries all its styling inline.
pub struct ChromePrinter;

impl PdfPrinter for ChromePrinter {
    fn print(&self, html: &str, page: PageSize) -> Result<Vec<u8>, ExportError> {
        use base64::engine::general_purpose::STANDARD as BASE64;
        use base64::Engine as _;
        use headless_chrome::types::PrintToPdfOptions;
        use headless_chrome::Browser;

        let print = || -> Result<Vec<u8>, anyhow::Error> {
            let browser = Browser::default()?;
            let tab = browser.new_tab()?;
            let url = format!("data:text/html;base64,{}", BASE64.encode(html));
            tab.navigate_to(&url)?.wait_until_navigated()?;
            let bytes = tab.print_to_pdf(Some(PrintToPdfOptions {
                print_background: Some(true),
                paper_width: Some(page.width_in),
                paper_height: Some(page.height_in),
                margin_top: Some(0.0),
                margin_bottom: Some(0.0),
                margin_left: Some(0.0),
                margin_right: Some(0.0),
                ..Default::default()
            }))?;
            Ok(bytes)
        };
        print().map_err(|e| ExportError::Printer(e.to_string()))
    }
}

/// Writes rendered payloads into one export directory.
pub struct ExportWriter {
    out_dir: PathBuf,
}

impl ExportWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        ExportWriter {
            out_dir: out_dir.into(),
        }
    }

    /// Writer rooted at the per-user cache directory.
    pub fn in_cache_dir() -> Result<Self, ExportError> {
        let dir = dirs::cache_dir()
            .ok_or(ExportError::NoCacheDir)?
            .join("tripcard");
        Ok(ExportWriter::new(dir))
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Write a text payload as `{sanitized_title}_trip.txt`.
    pub fn write_text(&self, title: &str, body: &str) -> Result<PathBuf, ExportError> {
        let path = self
            .out_dir
            .join(format!("{}_trip.txt", sanitize_filename(title)));
        std::fs::create_dir_all(&self.out_dir)?;
        std::fs::write(&path, body)?;
        tracing::debug!(path = %path.display(), "wrote text export");
        Ok(path)
    }

    /// Print an HTML payload and write it as `{sanitized_title}.pdf`.
    pub fn write_pdf(
        &self,
        printer: &dyn PdfPrinter,
        title: &str,
        html: &str,
        page: PageSize,
    ) -> Result<PathBuf, ExportError> {
        let bytes = printer.print(html, page)?;
        let path = self
            .out_dir
            .join(format!("{}.pdf", sanitize_filename(title)));
        std::fs::create_dir_all(&self.out_dir)?;
        std::fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), "wrote pdf export");
        Ok(path)
    }
}

/// Make a title safe for a filename: whitespace runs become single
/// underscores, path separators become dashes. Nothing else is touched —
/// the name should still look like the trip.
pub fn sanitize_filename(title: &str) -> String {
    let despaced: Vec<&str> = title.split_whitespace().collect();
    despaced.join("_").replace(['/', '\\'], "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Printer that records what it was asked and returns canned bytes.
    struct FakePrinter;

    impl PdfPrinter for FakePrinter {
        fn print(&self, html: &str, page: PageSize) -> Result<Vec<u8>, ExportError> {
            let mut bytes = b"%PDF-1.4 fake ".to_vec();
            bytes.extend_from_slice(
                format!("{}x{} {}", page.width_in, page.height_in, html.len()).as_bytes(),
            );
            Ok(bytes)
        }
    }

    struct FailingPrinter;

    impl PdfPrinter for FailingPrinter {
        fn print(&self, _html: &str, _page: PageSize) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::Printer("chrome went away".into()))
        }
    }

    // =========================================================================
    // sanitize_filename() tests
    // =========================================================================

    #[test]
    fn whitespace_becomes_underscores() {
        assert_eq!(sanitize_filename("Japan 2024"), "Japan_2024");
        assert_eq!(sanitize_filename("Two  Weeks\tAway"), "Two_Weeks_Away");
    }

    #[test]
    fn leading_trailing_whitespace_dropped() {
        assert_eq!(sanitize_filename("  Japan 2024  "), "Japan_2024");
    }

    #[test]
    fn path_separators_neutralized() {
        assert_eq!(sanitize_filename("Spring A/B Test"), "Spring_A-B_Test");
    }

    #[test]
    fn plain_title_untouched() {
        assert_eq!(sanitize_filename("Lisbon"), "Lisbon");
    }

    // =========================================================================
    // writer tests
    // =========================================================================

    #[test]
    fn text_export_named_after_title() {
        let dir = TempDir::new().unwrap();
        let writer = ExportWriter::new(dir.path());
        let path = writer.write_text("Japan 2024", "hello").unwrap();

        assert_eq!(path.file_name().unwrap(), "Japan_2024_trip.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn text_export_creates_out_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        let writer = ExportWriter::new(&nested);
        let path = writer.write_text("Trip", "body").unwrap();
        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[test]
    fn pdf_export_goes_through_printer() {
        let dir = TempDir::new().unwrap();
        let writer = ExportWriter::new(dir.path());
        let path = writer
            .write_pdf(&FakePrinter, "Japan 2024", "<html></html>", PageSize::GUIDE)
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "Japan_2024.pdf");
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4 fake"));
    }

    #[test]
    fn printer_failure_propagates() {
        let dir = TempDir::new().unwrap();
        let writer = ExportWriter::new(dir.path());
        let err = writer
            .write_pdf(&FailingPrinter, "Trip", "<html></html>", PageSize::CARD)
            .unwrap_err();
        assert!(matches!(err, ExportError::Printer(msg) if msg.contains("chrome")));
    }

    #[test]
    fn card_page_is_400_by_600_px() {
        // 96 px per inch.
        assert!((PageSize::CARD.width_in * 96.0 - 400.0).abs() < 1e-9);
        assert!((PageSize::CARD.height_in * 96.0 - 600.0).abs() < 1e-9);
    }
}
