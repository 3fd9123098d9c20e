//! Shared constants for bundle assembly
//!
//! This module centralizes magic numbers used when placing source
//! pages and overlaying stamps on the assembled document.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Fallback width in points for source pages missing a MediaBox (US Letter)
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Fallback height in points for source pages missing a MediaBox
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Fallback dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Page Number Stamp
// =============================================================================

/// Font size for stamped page numbers (points)
pub const PAGE_NUMBER_FONT_SIZE: f32 = 14.0;

/// Horizontal position of the stamp from the left page edge (points)
pub const PAGE_NUMBER_X: f32 = 30.0;

/// Vertical position of the stamp from the bottom page edge (points)
pub const PAGE_NUMBER_Y: f32 = 25.0;

/// Approximate character width ratio for Helvetica
pub const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

// =============================================================================
// Appendix Opening Marks
// =============================================================================

/// Width of the boxed marking on an appendix's first content page (points)
pub const OPENING_MARK_WIDTH: f32 = 70.0;

/// Height of the marking box (points)
pub const OPENING_MARK_HEIGHT: f32 = 30.0;

/// Gap between the marking box and the page corner (points)
pub const OPENING_MARK_INSET: f32 = 15.0;

/// Font size of the marking text (points)
pub const OPENING_MARK_FONT_SIZE: f32 = 12.0;

// =============================================================================
// Raster Images
// =============================================================================

/// DPI at which a raster image's natural page size is computed.
/// An image is placed at this resolution, scaled down to fit inside
/// the page margins if needed, and never scaled up.
pub const IMAGE_NATURAL_DPI: f32 = 96.0;
