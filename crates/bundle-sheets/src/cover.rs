//! Appendix cover sheet rendering

use printpdf::*;

use crate::draw::{centered_text, filled_rect, rgb, stroked_rect};
use crate::options::{CoverStyle, SheetOptions};

/// Everything a cover sheet displays. Page numbers here are the final
/// printed numbers the planner computed, not positions within the
/// appendix.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverSheet {
    /// Formatted ordinal, e.g. "3", "III" or "C"
    pub label: String,
    /// User-supplied document title; empty string suppresses the subtitle
    pub title: String,
    /// Final page number of the cover sheet itself
    pub first_page: usize,
    /// Final page number of the appendix's last content page
    pub last_page: usize,
}

impl CoverSheet {
    fn headline(&self) -> String {
        format!("Appendix {}", self.label)
    }

    fn page_range(&self) -> String {
        if self.first_page == self.last_page {
            format!("Page {}", self.first_page)
        } else {
            format!("Pages {}-{}", self.first_page, self.last_page)
        }
    }
}

/// Render one cover sheet as a standalone single-page PDF.
///
/// The page carries no number stamp; the assembler overlays numbers on
/// the merged document in one pass.
pub fn render_cover(cover: &CoverSheet, options: &SheetOptions) -> Vec<u8> {
    let width = options.page_width_pt();
    let height = options.page_height_pt();
    let center_x = width / 2.0;
    let center_y = height / 2.0;

    let mut ops = Vec::new();

    match options.cover_style {
        CoverStyle::Classic => {
            let inset = 50.0;
            ops.push(Op::SetOutlineColor {
                col: rgb(0.0, 0.0, 0.0),
            });
            stroked_rect(
                &mut ops,
                inset,
                inset,
                width - 2.0 * inset,
                height - 2.0 * inset,
                2.0,
            );

            centered_text(
                &mut ops,
                &cover.headline(),
                BuiltinFont::HelveticaBold,
                56.0,
                center_x,
                center_y + 70.0,
            );
            if !cover.title.is_empty() {
                centered_text(
                    &mut ops,
                    &cover.title,
                    BuiltinFont::Helvetica,
                    26.0,
                    center_x,
                    center_y + 10.0,
                );
            }
            centered_text(
                &mut ops,
                &cover.page_range(),
                BuiltinFont::Helvetica,
                22.0,
                center_x,
                center_y - 50.0,
            );
        }
        CoverStyle::Modern => {
            let bar_height = 180.0;
            ops.push(Op::SetFillColor {
                col: rgb(0.17, 0.24, 0.31),
            });
            filled_rect(&mut ops, 0.0, height - bar_height, width, bar_height);

            ops.push(Op::SetFillColor {
                col: rgb(1.0, 1.0, 1.0),
            });
            centered_text(
                &mut ops,
                &cover.headline(),
                BuiltinFont::HelveticaBold,
                48.0,
                center_x,
                height - 70.0,
            );
            if !cover.title.is_empty() {
                centered_text(
                    &mut ops,
                    &cover.title,
                    BuiltinFont::Helvetica,
                    24.0,
                    center_x,
                    height - 115.0,
                );
            }
            centered_text(
                &mut ops,
                &cover.page_range(),
                BuiltinFont::Helvetica,
                20.0,
                center_x,
                height - 155.0,
            );
            ops.push(Op::SetFillColor {
                col: rgb(0.0, 0.0, 0.0),
            });
        }
        CoverStyle::Minimal => {
            centered_text(
                &mut ops,
                &cover.headline(),
                BuiltinFont::HelveticaBold,
                48.0,
                center_x,
                center_y + 50.0,
            );
            if !cover.title.is_empty() {
                centered_text(
                    &mut ops,
                    &cover.title,
                    BuiltinFont::Helvetica,
                    22.0,
                    center_x,
                    center_y,
                );
            }
            centered_text(
                &mut ops,
                &cover.page_range(),
                BuiltinFont::Helvetica,
                18.0,
                center_x,
                center_y - 50.0,
            );
        }
    }

    let mut doc = PdfDocument::new("Cover Sheet");
    doc.pages = vec![PdfPage::new(
        Mm(options.page_width_mm),
        Mm(options.page_height_mm),
        ops,
    )];

    let mut warnings = Vec::new();
    doc.save(&PdfSaveOptions::default(), &mut warnings)
}
