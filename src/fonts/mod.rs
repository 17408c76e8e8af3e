//! Best-effort discovery of a Japanese-capable display font.
//!
//! The summary text is Japanese, so the renderer probes a short list of
//! well-known system font files and embeds the first one that loads. Every
//! failure along the way (missing file, unreadable file, unparsable font
//! data) is logged and skipped; callers fall back to a built-in font and
//! the run always proceeds.

use std::env;
use std::fs::File;
use std::path::PathBuf;

use log::{debug, warn};
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};

use crate::Result;

/// Environment variable holding an extra font file to probe first.
pub const FONT_PATH_ENV: &str = "SHIFT_SUMMARY_FONT";

const CANDIDATE_PATHS: &[&str] = &[
    r"C:\Windows\Fonts\YuGothM.ttc",
    r"C:\Windows\Fonts\meiryo.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/ヒラギノ角ゴシック W3.ttc",
];

/// Returns the ordered candidate font paths, environment override first.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = env::var_os(FONT_PATH_ENV) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }
    candidates.extend(CANDIDATE_PATHS.iter().map(PathBuf::from));
    candidates
}

/// Indicates whether any display-font candidate exists on this machine.
pub fn display_font_available() -> bool {
    candidate_paths().iter().any(|path| path.is_file())
}

/// Registers the first loadable display-font candidate with the document.
///
/// Returns `None` when no candidate could be embedded; the caller is then
/// expected to use [`fallback_font`].
pub fn load_display_font(document: &PdfDocumentReference) -> Option<IndirectFontRef> {
    load_display_font_from(document, &candidate_paths())
}

/// Same as [`load_display_font`], but probing an explicit candidate list.
pub fn load_display_font_from(
    document: &PdfDocumentReference,
    candidates: &[PathBuf],
) -> Option<IndirectFontRef> {
    for path in candidates {
        if !path.is_file() {
            debug!("display font candidate missing: {}", path.display());
            continue;
        }
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!("cannot open display font {}: {}", path.display(), err);
                continue;
            }
        };
        match document.add_external_font(file) {
            Ok(font) => {
                debug!("using display font {}", path.display());
                return Some(font);
            }
            Err(err) => {
                warn!("cannot embed display font {}: {}", path.display(), err);
            }
        }
    }
    None
}

/// Built-in font used when no display font could be registered.
///
/// Helvetica cannot shape the Japanese glyphs, matching the behaviour of the
/// plotting backend's default font; the document still renders completely.
pub fn fallback_font(document: &PdfDocumentReference) -> Result<IndirectFontRef> {
    Ok(document.add_builtin_font(BuiltinFont::Helvetica)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{PAGE_HEIGHT, PAGE_WIDTH};
    use printpdf::PdfDocument;

    #[test]
    fn missing_candidates_fall_through_without_error() {
        let (document, _, _) = PdfDocument::new("test", PAGE_WIDTH, PAGE_HEIGHT, "Page 1");
        let candidates = [
            PathBuf::from("/does/not/exist/a.ttc"),
            PathBuf::from("/does/not/exist/b.ttc"),
        ];
        assert!(load_display_font_from(&document, &candidates).is_none());
    }

    #[test]
    fn env_override_is_probed_first() {
        env::set_var(FONT_PATH_ENV, "/tmp/custom-display-font.ttc");
        let candidates = candidate_paths();
        env::remove_var(FONT_PATH_ENV);

        assert_eq!(
            candidates.first(),
            Some(&PathBuf::from("/tmp/custom-display-font.ttc"))
        );
        assert_eq!(candidates.len(), CANDIDATE_PATHS.len() + 1);
    }

    #[test]
    fn fallback_font_always_registers() {
        let (document, _, _) = PdfDocument::new("test", PAGE_WIDTH, PAGE_HEIGHT, "Page 1");
        assert!(fallback_font(&document).is_ok());
    }
}
