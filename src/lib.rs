//! Renders the three-page PDF visual summary of the shift aggregation system.
//!
//! The crate exposes a small absolute-coordinate drawing layer ([`canvas`]) on
//! top of `printpdf`, the three fixed page builders ([`pages`]), best-effort
//! display-font discovery ([`fonts`]), and a document assembler ([`builder`])
//! that serializes everything into a single A4 portrait document.

pub mod builder;
pub mod canvas;
pub mod error;
pub mod fonts;
pub mod pages;

pub use builder::{
    render, render_with_font_candidates, RenderedSummary, DEFAULT_OUTPUT_PATH, DOCUMENT_TITLE,
};
pub use canvas::{BoxStyle, PageCanvas, PageStats};
pub use error::{RenderError, Result};
