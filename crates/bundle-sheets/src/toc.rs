//! Table-of-contents rendering
//!
//! One row per appendix, in input order: label and title on the left,
//! the cover sheet's final page number on the right, a dotted leader
//! between them. Rows paginate every `SheetOptions::toc_rows_per_page`
//! entries, the same capacity the pagination planner used, so the
//! rendered page count always equals the planned one.

use printpdf::*;

use crate::draw::{centered_text, dotted_leader, hline, right_aligned_text, rgb, text_at, text_width};
use crate::options::{
    SheetOptions, TOC_COLUMN_HEADER_SIZE, TOC_FIRST_ROW_GAP, TOC_HEADING_GAP, TOC_HEADING_SIZE,
    TOC_ROW_HEIGHT, TOC_ROW_SIZE, TOC_RULE_GAP,
};

/// One TOC row. `cover_page` is the final printed page number of the
/// appendix's cover sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    pub label: String,
    pub title: String,
    pub cover_page: usize,
}

impl TocEntry {
    fn display_text(&self) -> String {
        if self.title.is_empty() {
            format!("Appendix {}", self.label)
        } else {
            format!("Appendix {} - {}", self.label, self.title)
        }
    }
}

/// Render the TOC as a standalone PDF, one page per
/// `toc_rows_per_page` chunk of entries. No sorting: rows appear in
/// input order, which is also physical placement order.
pub fn render_toc(entries: &[TocEntry], options: &SheetOptions) -> Vec<u8> {
    let width = options.page_width_pt();
    let height = options.page_height_pt();
    let margin = options.margin_pt();
    let rows_per_page = options.toc_rows_per_page();

    let mut doc = PdfDocument::new("Table of Contents");
    doc.pages = entries
        .chunks(rows_per_page)
        .map(|chunk| {
            let ops = render_toc_page(chunk, options, width, height, margin);
            PdfPage::new(Mm(options.page_width_mm), Mm(options.page_height_mm), ops)
        })
        .collect();

    let mut warnings = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}

fn render_toc_page(
    entries: &[TocEntry],
    options: &SheetOptions,
    width: f32,
    height: f32,
    margin: f32,
) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut y = height - margin;

    ops.push(Op::SetFillColor {
        col: rgb(0.0, 0.0, 0.0),
    });
    ops.push(Op::SetOutlineColor {
        col: rgb(0.0, 0.0, 0.0),
    });

    // Heading and column headers repeat on every TOC page
    centered_text(
        &mut ops,
        &options.toc_heading,
        BuiltinFont::HelveticaBold,
        TOC_HEADING_SIZE,
        width / 2.0,
        y,
    );
    y -= TOC_HEADING_GAP;

    text_at(
        &mut ops,
        "Appendix",
        BuiltinFont::HelveticaBold,
        TOC_COLUMN_HEADER_SIZE,
        margin,
        y,
    );
    right_aligned_text(
        &mut ops,
        "Page",
        BuiltinFont::HelveticaBold,
        TOC_COLUMN_HEADER_SIZE,
        width - margin,
        y,
    );
    y -= TOC_RULE_GAP;
    hline(&mut ops, margin, width - margin, y, 0.5);
    y -= TOC_FIRST_ROW_GAP;

    for entry in entries {
        let text = entry.display_text();
        let number = entry.cover_page.to_string();

        text_at(&mut ops, &text, BuiltinFont::Helvetica, TOC_ROW_SIZE, margin, y);
        right_aligned_text(
            &mut ops,
            &number,
            BuiltinFont::Helvetica,
            TOC_ROW_SIZE,
            width - margin,
            y,
        );

        let leader_start = margin + text_width(&text, TOC_ROW_SIZE) + 12.0;
        let leader_end = width - margin - text_width(&number, TOC_ROW_SIZE) - 12.0;
        dotted_leader(&mut ops, leader_start, leader_end, y + 2.0);

        y -= TOC_ROW_HEIGHT;
    }

    ops
}
