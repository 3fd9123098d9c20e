//! Small printpdf op builders shared by the cover and TOC renderers.

use printpdf::*;

use crate::options::HELVETICA_CHAR_WIDTH_RATIO;

/// Approximate rendered width of `text` at `size` points.
///
/// Builtin Helvetica carries no metrics through printpdf, so layout
/// uses the same fixed-ratio approximation the rest of the pipeline
/// stamps page numbers with.
pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * HELVETICA_CHAR_WIDTH_RATIO
}

/// Emit a single run of builtin-font text with its baseline at (x, y).
pub(crate) fn text_at(ops: &mut Vec<Op>, text: &str, font: BuiltinFont, size: f32, x: f32, y: f32) {
    ops.push(Op::StartTextSection);
    ops.push(Op::SetTextCursor {
        pos: Point { x: Pt(x), y: Pt(y) },
    });
    ops.push(Op::SetFontSizeBuiltinFont {
        font,
        size: Pt(size),
    });
    ops.push(Op::WriteTextBuiltinFont {
        items: vec![TextItem::Text(text.to_string())],
        font,
    });
    ops.push(Op::EndTextSection);
}

/// Emit text horizontally centered on `center_x`.
pub(crate) fn centered_text(
    ops: &mut Vec<Op>,
    text: &str,
    font: BuiltinFont,
    size: f32,
    center_x: f32,
    y: f32,
) {
    let x = center_x - text_width(text, size) / 2.0;
    text_at(ops, text, font, size, x, y);
}

/// Emit text with its right edge at `right_x`.
pub(crate) fn right_aligned_text(
    ops: &mut Vec<Op>,
    text: &str,
    font: BuiltinFont,
    size: f32,
    right_x: f32,
    y: f32,
) {
    let x = right_x - text_width(text, size);
    text_at(ops, text, font, size, x, y);
}

fn rect_ring(x: f32, y: f32, width: f32, height: f32) -> PolygonRing {
    PolygonRing {
        points: vec![
            LinePoint {
                p: Point { x: Pt(x), y: Pt(y) },
                bezier: false,
            },
            LinePoint {
                p: Point {
                    x: Pt(x + width),
                    y: Pt(y),
                },
                bezier: false,
            },
            LinePoint {
                p: Point {
                    x: Pt(x + width),
                    y: Pt(y + height),
                },
                bezier: false,
            },
            LinePoint {
                p: Point {
                    x: Pt(x),
                    y: Pt(y + height),
                },
                bezier: false,
            },
        ],
    }
}

/// Emit a filled rectangle in the current fill color.
pub(crate) fn filled_rect(ops: &mut Vec<Op>, x: f32, y: f32, width: f32, height: f32) {
    ops.push(Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![rect_ring(x, y, width, height)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        },
    });
}

/// Emit a stroked rectangle outline.
pub(crate) fn stroked_rect(
    ops: &mut Vec<Op>,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    thickness: f32,
) {
    ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    ops.push(Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![rect_ring(x, y, width, height)],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        },
    });
}

/// Emit a horizontal stroked line from (x1, y) to (x2, y).
pub(crate) fn hline(ops: &mut Vec<Op>, x1: f32, x2: f32, y: f32, thickness: f32) {
    ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    ops.push(Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    LinePoint {
                        p: Point { x: Pt(x1), y: Pt(y) },
                        bezier: false,
                    },
                    LinePoint {
                        p: Point { x: Pt(x2), y: Pt(y) },
                        bezier: false,
                    },
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        },
    });
}

/// Emit a dotted leader line, restoring the solid dash pattern after.
pub(crate) fn dotted_leader(ops: &mut Vec<Op>, x1: f32, x2: f32, y: f32) {
    if x2 <= x1 {
        return;
    }
    ops.push(Op::SetLineDashPattern {
        dash: LineDashPattern {
            dash_1: Some(1),
            gap_1: Some(5),
            dash_2: None,
            gap_2: None,
            dash_3: None,
            gap_3: None,
            offset: 0,
        },
    });
    hline(ops, x1, x2, y, 0.75);
    ops.push(Op::SetLineDashPattern {
        dash: LineDashPattern::default(),
    });
}

pub(crate) fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}
