//! Page canvas and the reusable drawing primitives.
//!
//! All page content is placed in unit coordinates (0.0–1.0 on both axes,
//! origin at the bottom-left corner) and mapped onto an A4 portrait page.
//! The two repeated shapes of the summary, the labeled rounded box and the
//! directed arrow, live here so the page builders stay purely declarative.

use printpdf::{Color, IndirectFontRef, Line, Mm, PdfLayerReference, Point, Rgb};

/// Fixed page width of the summary (A4 portrait).
pub const PAGE_WIDTH: Mm = Mm(210.0);
/// Fixed page height of the summary (A4 portrait).
pub const PAGE_HEIGHT: Mm = Mm(297.0);

const MM_PER_PT: f64 = 25.4 / 72.0;

/// Outline width shared by boxes and arrow shafts, in points.
const OUTLINE_WIDTH_PT: f64 = 1.2;
/// Corner radius of rounded boxes, as a fraction of the page width.
const CORNER_RADIUS: f64 = 0.02;
/// Straight segments used to approximate one quarter-circle corner.
const CORNER_SEGMENTS: usize = 4;
/// Arrowhead length along the shaft, in millimetres.
const ARROW_HEAD_LENGTH_MM: f64 = 2.2;
/// Half-width of the arrowhead base, in millimetres.
const ARROW_HEAD_HALF_WIDTH_MM: f64 = 1.1;

/// Title font size inside boxes, in points.
const BOX_TITLE_SIZE: f64 = 12.0;
/// Body font size inside boxes, in points.
const BOX_BODY_SIZE: f64 = 9.0;
/// Footer font size, in points.
const FOOTER_SIZE: f64 = 9.0;
/// Line spacing factor for multi-line text.
const LINE_SPACING: f64 = 1.2;
/// Fraction of the font size the baseline sits below a line's visual centre.
const BASELINE_SHIFT: f64 = 0.35;

/// Color palette shared by every page, as 24-bit RGB values.
pub mod palette {
    /// Default box fill.
    pub const BOX_FILL: u32 = 0xffffff;
    /// Default box edge.
    pub const BOX_EDGE: u32 = 0xb8cce3;
    /// Box title text.
    pub const BOX_TITLE: u32 = 0x194d7f;
    /// Box body text.
    pub const BOX_BODY: u32 = 0x4d6783;
    /// Arrow shaft and head.
    pub const ARROW: u32 = 0x7a93ad;
    /// Section headings.
    pub const HEADING: u32 = 0x103a66;
    /// Bullet lists and table rows.
    pub const INK: u32 = 0x334a61;
    /// Introductory note line on the overview page.
    pub const NOTE: u32 = 0x415a75;
    /// Secondary captions.
    pub const CAPTION: u32 = 0x4a647f;
    /// Page-number footer.
    pub const FOOTER: u32 = 0x6a7d91;
    /// Header panel fill on the overview page.
    pub const HEADER_FILL: u32 = 0xedf5ff;
    /// Fact and API panel fill.
    pub const PANEL_FILL: u32 = 0xf8fbff;
    /// Screen-flow step fill.
    pub const STEP_FILL: u32 = 0xf7fbff;
    /// Fill for emphasized entities.
    pub const ACCENT_FILL: u32 = 0xeefaf5;
    /// Edge for emphasized entities.
    pub const ACCENT_EDGE: u32 = 0x85c5ae;
}

/// Fill and edge colors of a rounded box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    /// Interior fill color.
    pub fill: u32,
    /// Outline color.
    pub edge: u32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: palette::BOX_FILL,
            edge: palette::BOX_EDGE,
        }
    }
}

impl BoxStyle {
    /// Creates a style with explicit fill and edge colors.
    pub fn new(fill: u32, edge: u32) -> Self {
        Self { fill, edge }
    }

    /// Creates a style with a custom fill and the default edge color.
    pub fn filled(fill: u32) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }
}

/// Drawing record of one finished page.
#[derive(Clone, Debug, Default)]
pub struct PageStats {
    /// Number of path shapes placed on the page.
    pub shapes: usize,
    /// Text labels placed on the page, in drawing order.
    pub labels: Vec<String>,
}

impl PageStats {
    /// Returns whether any label on the page contains `needle`.
    pub fn has_label(&self, needle: &str) -> bool {
        self.labels.iter().any(|label| label.contains(needle))
    }
}

/// One drawable page surface of the output document.
///
/// Wraps a `printpdf` layer together with the active text font and keeps a
/// running record of what was drawn so the assembler can log it and tests can
/// assert on it.
pub struct PageCanvas {
    layer: PdfLayerReference,
    font: IndirectFontRef,
    stats: PageStats,
}

impl PageCanvas {
    /// Creates a canvas drawing onto `layer` with `font` as the text font.
    pub fn new(layer: PdfLayerReference, font: IndirectFontRef) -> Self {
        Self {
            layer,
            font,
            stats: PageStats::default(),
        }
    }

    /// Consumes the canvas and returns the drawing record of the page.
    pub fn finish(self) -> PageStats {
        self.stats
    }

    /// Draws a rounded rectangle with a centred title and optional body text.
    ///
    /// Geometry is in unit coordinates with `(x, y)` at the bottom-left
    /// corner. The title sits at 65 % of the box height, the body (skipped
    /// when empty) at 35 %. Both may contain `\n` for stacked lines.
    pub fn rounded_box(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        title: &str,
        body: &str,
        style: BoxStyle,
    ) {
        let radius = CORNER_RADIUS * PAGE_WIDTH.0;
        let outline = rounded_rect_points(
            x * PAGE_WIDTH.0,
            y * PAGE_HEIGHT.0,
            w * PAGE_WIDTH.0,
            h * PAGE_HEIGHT.0,
            radius,
        );

        self.layer.set_fill_color(color(style.fill));
        self.layer.set_outline_color(color(style.edge));
        self.layer.set_outline_thickness(OUTLINE_WIDTH_PT);
        self.push_shape(Line {
            points: outline,
            is_closed: true,
            has_fill: true,
            has_stroke: true,
            is_clipping_path: false,
        });

        self.centered_text(x + w / 2.0, y + h * 0.65, title, BOX_TITLE_SIZE, palette::BOX_TITLE);
        if !body.is_empty() {
            self.centered_text(x + w / 2.0, y + h * 0.35, body, BOX_BODY_SIZE, palette::BOX_BODY);
        }
    }

    /// Draws a directed connector from `(x1, y1)` to `(x2, y2)`.
    ///
    /// The shaft stops at the arrowhead base so the stroke never pokes past
    /// the tip. Degenerate zero-length arrows are ignored.
    pub fn arrow(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let (ax, ay) = (x1 * PAGE_WIDTH.0, y1 * PAGE_HEIGHT.0);
        let (bx, by) = (x2 * PAGE_WIDTH.0, y2 * PAGE_HEIGHT.0);
        let (dx, dy) = (bx - ax, by - ay);
        let length = (dx * dx + dy * dy).sqrt();
        if length <= f64::EPSILON {
            return;
        }
        let (ux, uy) = (dx / length, dy / length);
        let (base_x, base_y) = (bx - ux * ARROW_HEAD_LENGTH_MM, by - uy * ARROW_HEAD_LENGTH_MM);

        self.layer.set_outline_color(color(palette::ARROW));
        self.layer.set_outline_thickness(OUTLINE_WIDTH_PT);
        self.push_shape(Line {
            points: vec![
                (Point::new(Mm(ax), Mm(ay)), false),
                (Point::new(Mm(base_x), Mm(base_y)), false),
            ],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        });

        // Perpendicular unit vector spans the arrowhead base.
        let (px, py) = (-uy, ux);
        self.layer.set_fill_color(color(palette::ARROW));
        self.push_shape(Line {
            points: vec![
                (Point::new(Mm(bx), Mm(by)), false),
                (
                    Point::new(
                        Mm(base_x + px * ARROW_HEAD_HALF_WIDTH_MM),
                        Mm(base_y + py * ARROW_HEAD_HALF_WIDTH_MM),
                    ),
                    false,
                ),
                (
                    Point::new(
                        Mm(base_x - px * ARROW_HEAD_HALF_WIDTH_MM),
                        Mm(base_y - py * ARROW_HEAD_HALF_WIDTH_MM),
                    ),
                    false,
                ),
            ],
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        });
    }

    /// Places left-aligned text with its baseline at `(x, y)`.
    pub fn label(&mut self, x: f64, y: f64, text: &str, size: f64, color_hex: u32) {
        self.layer.set_fill_color(color(color_hex));
        self.layer.use_text(
            text,
            size,
            Mm(x * PAGE_WIDTH.0),
            Mm(y * PAGE_HEIGHT.0),
            &self.font,
        );
        self.stats.labels.push(text.to_owned());
    }

    /// Places the `n / 3` page-number footer.
    pub fn footer(&mut self, text: &str) {
        self.label(0.08, 0.06, text, FOOTER_SIZE, palette::FOOTER);
    }

    fn push_shape(&mut self, shape: Line) {
        self.layer.add_shape(shape);
        self.stats.shapes += 1;
    }

    /// Draws a block of text centred on `(cx, cy)`, one line per `\n` segment.
    fn centered_text(&mut self, cx: f64, cy: f64, text: &str, size: f64, color_hex: u32) {
        let lines: Vec<&str> = text.split('\n').collect();
        let line_height = size * LINE_SPACING * MM_PER_PT;
        let baseline_shift = size * BASELINE_SHIFT * MM_PER_PT;
        let anchor = cy * PAGE_HEIGHT.0;

        self.layer.set_fill_color(color(color_hex));
        for (index, line) in lines.iter().enumerate() {
            let offset = (lines.len() as f64 - 1.0) / 2.0 - index as f64;
            let baseline = anchor + offset * line_height - baseline_shift;
            let width = estimated_width_pt(line, size) * MM_PER_PT;
            self.layer.use_text(
                *line,
                size,
                Mm(cx * PAGE_WIDTH.0 - width / 2.0),
                Mm(baseline),
                &self.font,
            );
        }
        self.stats.labels.push(text.to_owned());
    }
}

fn color(hex: u32) -> Color {
    let r = ((hex >> 16) & 0xff) as f64 / 255.0;
    let g = ((hex >> 8) & 0xff) as f64 / 255.0;
    let b = (hex & 0xff) as f64 / 255.0;
    Color::Rgb(Rgb::new(r, g, b, None))
}

/// Rough advance-width estimate in points for centring without font metrics.
///
/// CJK glyphs advance a full em, everything else roughly half an em.
fn estimated_width_pt(text: &str, size: f64) -> f64 {
    let ems: f64 = text
        .chars()
        .map(|c| if c.is_ascii() { 0.5 } else { 1.0 })
        .sum();
    ems * size
}

/// Outline of a rounded rectangle as a closed polyline, in millimetres.
///
/// Quarter-circle corners are approximated with short chords; the radius is
/// clamped so opposite corners never overlap.
fn rounded_rect_points(x: f64, y: f64, w: f64, h: f64, radius: f64) -> Vec<(Point, bool)> {
    let r = radius.min(w / 2.0).min(h / 2.0);
    // Corner centres with the start angle of each quarter arc, walking
    // counter-clockwise from the top-right corner.
    let corners = [
        (x + w - r, y + h - r, 0.0_f64),
        (x + r, y + h - r, 90.0),
        (x + r, y + r, 180.0),
        (x + w - r, y + r, 270.0),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (cx, cy, start) in corners {
        for step in 0..=CORNER_SEGMENTS {
            let angle = (start + 90.0 * step as f64 / CORNER_SEGMENTS as f64).to_radians();
            points.push((
                Point::new(Mm(cx + r * angle.cos()), Mm(cy + r * angle.sin())),
                false,
            ));
        }
    }
    points
}
