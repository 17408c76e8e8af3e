use std::path::PathBuf;

use lopdf::content::Content;
use lopdf::Document;
use sha2::{Digest, Sha256};
use shift_summary::{fonts, render, render_with_font_candidates, RenderedSummary};

const PAGE_HEADINGS: [&str; 3] = [
    "シフト集約システム 統合サマリー",
    "画面遷移とER図",
    "API一覧と連携イメージ",
];

fn render_summary() -> RenderedSummary {
    render().expect("render summary")
}

/// Volatile metadata the backend stamps into every document. Each entry is an
/// opening and a closing delimiter; alphanumeric bytes in between are blanked
/// so that two renders of identical content hash identically.
const VOLATILE_SPANS: &[(&[u8], &[u8])] = &[
    (b"/CreationDate(", b")"),
    (b"/ModDate(", b")"),
    (b"/Producer(", b")"),
    (b"/ID[", b"]"),
    (b"<xmp:CreateDate>", b"</xmp:CreateDate>"),
    (b"<xmp:ModifyDate>", b"</xmp:ModifyDate>"),
    (b"<xmp:MetadataDate>", b"</xmp:MetadataDate>"),
    (b"<xmpMM:DocumentID>", b"</xmpMM:DocumentID>"),
    (b"<xmpMM:InstanceID>", b"</xmpMM:InstanceID>"),
    (b"<xmpMM:VersionID>", b"</xmpMM:VersionID>"),
];

fn find(data: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    data.get(from..)?
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| from + position)
}

fn blank_span(data: &mut [u8], open: &[u8], close: &[u8]) {
    let mut offset = 0;
    while let Some(start) = find(data, open, offset) {
        let begin = start + open.len();
        let Some(end) = find(data, close, begin) else {
            return;
        };
        for byte in &mut data[begin..end] {
            if byte.is_ascii_alphanumeric() {
                *byte = b'0';
            }
        }
        offset = end + close.len();
    }
}

fn normalized_digest(bytes: &[u8]) -> [u8; 32] {
    let mut scrubbed = bytes.to_vec();
    for (open, close) in VOLATILE_SPANS {
        blank_span(&mut scrubbed, open, close);
    }
    Sha256::digest(&scrubbed).into()
}

#[test]
fn renders_exactly_three_pages() {
    let summary = render_summary();
    assert_eq!(summary.page_count(), 3);

    let document = Document::load_mem(&summary.bytes).expect("reopen rendered bytes");
    assert_eq!(document.get_pages().len(), 3);
}

#[test]
fn every_page_records_its_heading_and_shapes() {
    let summary = render_summary();
    for (stats, heading) in summary.pages.iter().zip(PAGE_HEADINGS) {
        assert!(stats.shapes > 0, "page with heading {heading} drew no shapes");
        assert!(stats.has_label(heading), "missing heading {heading}");
    }
}

#[test]
fn every_content_stream_paints_paths_and_text() {
    let summary = render_summary();
    let document = Document::load_mem(&summary.bytes).expect("reopen rendered bytes");

    for (number, page_id) in document.get_pages() {
        let raw = document.get_page_content(page_id).expect("page content");
        let content = Content::decode(&raw).expect("decode content stream");

        let paints = content
            .operations
            .iter()
            .filter(|op| matches!(op.operator.as_str(), "f" | "f*" | "F" | "s" | "S" | "b" | "b*" | "B" | "B*"))
            .count();
        let texts = content
            .operations
            .iter()
            .filter(|op| matches!(op.operator.as_str(), "Tj" | "TJ"))
            .count();

        assert!(paints > 0, "page {number} paints no paths");
        assert!(texts > 0, "page {number} shows no text");
    }
}

#[test]
fn rendering_is_deterministic() {
    if fonts::display_font_available() {
        eprintln!("note: determinism checked with a system display font present");
    }

    let first = render_summary();
    let second = render_summary();

    assert_eq!(first.bytes.len(), second.bytes.len(), "PDF sizes should match");
    assert_eq!(
        normalized_digest(&first.bytes),
        normalized_digest(&second.bytes),
        "renders must be identical after metadata normalization"
    );
}

#[test]
fn renders_with_fallback_font_when_no_candidate_exists() {
    let missing = [
        PathBuf::from("/does/not/exist/display-a.ttc"),
        PathBuf::from("/does/not/exist/display-b.ttc"),
    ];
    let summary = render_with_font_candidates(&missing).expect("render with fallback font");

    assert_eq!(summary.page_count(), 3);
    assert!(summary.bytes.starts_with(b"%PDF"));
}
