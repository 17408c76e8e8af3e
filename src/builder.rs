//! Document assembly for the visual summary.
//!
//! Orchestrates the fixed rendering sequence: resolve the text font, run the
//! three page builders in order, serialize the document, and write it out.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use printpdf::PdfDocument;

use crate::canvas::{PageCanvas, PageStats, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::{RenderError, Result};
use crate::{fonts, pages};

/// Document title stamped into the PDF metadata.
pub const DOCUMENT_TITLE: &str = "シフト集約システム 統合サマリー";

/// Location of the generated summary, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "docs/04_visual_summary.pdf";

/// A fully rendered summary document.
pub struct RenderedSummary {
    /// Serialized PDF bytes.
    pub bytes: Vec<u8>,
    /// Per-page drawing records, in page order.
    pub pages: Vec<PageStats>,
}

impl RenderedSummary {
    /// Number of pages in the rendered document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Writes the document to `path`, creating missing parent directories.
    ///
    /// An existing file at `path` is overwritten.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(path, &self.bytes).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Renders the three-page summary using the default display-font candidates.
pub fn render() -> Result<RenderedSummary> {
    render_with_font_candidates(&fonts::candidate_paths())
}

/// Renders the summary, resolving the text font from `candidates`.
pub fn render_with_font_candidates(candidates: &[PathBuf]) -> Result<RenderedSummary> {
    let (document, first_page, first_layer) =
        PdfDocument::new(DOCUMENT_TITLE, PAGE_WIDTH, PAGE_HEIGHT, "Page 1");

    let font = match fonts::load_display_font_from(&document, candidates) {
        Some(font) => font,
        None => {
            warn!("no display font registered; Japanese text uses the built-in fallback font");
            fonts::fallback_font(&document)?
        }
    };

    let mut page_records = Vec::with_capacity(3);

    let mut canvas = PageCanvas::new(document.get_page(first_page).get_layer(first_layer), font.clone());
    pages::overview(&mut canvas);
    page_records.push(finish_page(canvas, 1));

    let (page, layer) = document.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Page 2");
    let mut canvas = PageCanvas::new(document.get_page(page).get_layer(layer), font.clone());
    pages::screens_and_entities(&mut canvas);
    page_records.push(finish_page(canvas, 2));

    let (page, layer) = document.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Page 3");
    let mut canvas = PageCanvas::new(document.get_page(page).get_layer(layer), font);
    pages::apis_and_integration(&mut canvas);
    page_records.push(finish_page(canvas, 3));

    let mut bytes = Vec::new();
    {
        let mut writer = BufWriter::new(&mut bytes);
        document.save(&mut writer)?;
        writer.flush().map_err(|source| RenderError::Io {
            path: PathBuf::from("<in-memory>"),
            source,
        })?;
    }
    Ok(RenderedSummary {
        bytes,
        pages: page_records,
    })
}

fn finish_page(canvas: PageCanvas, number: usize) -> PageStats {
    let stats = canvas.finish();
    debug!(
        "rendered page {}: {} shapes, {} text labels",
        number,
        stats.shapes,
        stats.labels.len()
    );
    stats
}
