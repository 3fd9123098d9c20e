#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub(crate) const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Approximate character width ratio for Helvetica
pub(crate) const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

// TOC vertical metrics (points, measured from the top margin down)
pub(crate) const TOC_HEADING_SIZE: f32 = 22.0;
pub(crate) const TOC_COLUMN_HEADER_SIZE: f32 = 14.0;
pub(crate) const TOC_ROW_SIZE: f32 = 14.0;
pub(crate) const TOC_ROW_HEIGHT: f32 = 35.0;
pub(crate) const TOC_HEADING_GAP: f32 = 20.0;
pub(crate) const TOC_RULE_GAP: f32 = 10.0;
pub(crate) const TOC_FIRST_ROW_GAP: f32 = 25.0;

/// Total vertical space above the first TOC row (heading, column
/// headers, rule). Must stay in sync with the three gap constants.
pub(crate) const TOC_HEADER_BLOCK: f32 = TOC_HEADING_GAP + TOC_RULE_GAP + TOC_FIRST_ROW_GAP;

/// Cover sheet visual styles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoverStyle {
    /// Bordered page with centered headline
    #[default]
    Classic,
    /// Filled header bar with light-on-dark headline
    Modern,
    /// Text only, no decoration
    Minimal,
}

/// Geometry and styling shared by every generated sheet.
///
/// The pagination planner consumes [`SheetOptions::toc_rows_per_page`]
/// and the TOC renderer chunks its rows on the same value, so the two
/// can never disagree about how many TOC pages a given appendix count
/// produces.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetOptions {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub cover_style: CoverStyle,
    pub toc_heading: String,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            cover_style: CoverStyle::Classic,
            toc_heading: "Table of Contents".to_string(),
        }
    }
}

impl SheetOptions {
    pub fn page_width_pt(&self) -> f32 {
        self.page_width_mm * POINTS_PER_MM
    }

    pub fn page_height_pt(&self) -> f32 {
        self.page_height_mm * POINTS_PER_MM
    }

    pub fn margin_pt(&self) -> f32 {
        self.margin_mm * POINTS_PER_MM
    }

    /// How many appendix rows fit on one TOC page.
    ///
    /// Pure function of the page geometry: the first row sits
    /// `TOC_HEADER_BLOCK` below the top margin and every further row
    /// `TOC_ROW_HEIGHT` lower, down to the bottom margin. A4 with the
    /// default 20mm margin yields 20 rows per page.
    pub fn toc_rows_per_page(&self) -> usize {
        let usable = self.page_height_pt() - 2.0 * self.margin_pt() - TOC_HEADER_BLOCK;
        (usable / TOC_ROW_HEIGHT).floor().max(0.0) as usize + 1
    }
}
