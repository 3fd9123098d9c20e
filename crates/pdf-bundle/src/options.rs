use crate::constants::mm_to_pt;
use crate::types::*;
use bundle_sheets::{CoverStyle, NumberingStyle, SheetOptions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Portrait: height > width (default for most paper sizes)
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Standard paper sizes for the assembled output
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Get base dimensions (always portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}

/// Bundle assembly configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BundleOptions {
    /// Uniform page size of the assembled output
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    /// Margin used by generated sheets and for fitting raster images
    pub margin_mm: f32,

    /// Ordinal style for appendix labels
    pub numbering: NumberingStyle,
    pub cover_style: CoverStyle,

    /// Heading printed on every TOC page
    pub toc_heading: String,

    /// Stamp a boxed "Appendix N" marking on the first content page of
    /// each appendix
    pub mark_openings: bool,
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: 20.0,
            numbering: NumberingStyle::default(),
            cover_style: CoverStyle::default(),
            toc_heading: "Table of Contents".to_string(),
            mark_openings: false,
        }
    }
}

impl BundleOptions {
    /// Output page dimensions in points
    pub fn page_dimensions_pt(&self) -> (f32, f32) {
        let (w, h) = self.paper_size.dimensions_with_orientation(self.orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// The one sheet geometry consumed by both the pagination planner
    /// (TOC row capacity) and the sheet renderers (layout). Built here
    /// so the two can never drift apart.
    pub fn sheet_options(&self) -> SheetOptions {
        let (width_mm, height_mm) = self.paper_size.dimensions_with_orientation(self.orientation);
        SheetOptions {
            page_width_mm: width_mm,
            page_height_mm: height_mm,
            margin_mm: self.margin_mm,
            cover_style: self.cover_style,
            toc_heading: self.toc_heading.clone(),
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| BundleError::Input(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| BundleError::Input(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_with_orientation(self.orientation);
        if width_mm <= 0.0 || height_mm <= 0.0 {
            return Err(BundleError::Input(
                "Page dimensions must be positive".to_string(),
            ));
        }
        if self.margin_mm < 0.0 {
            return Err(BundleError::Input("Margin must not be negative".to_string()));
        }
        if 2.0 * self.margin_mm >= width_mm || 2.0 * self.margin_mm >= height_mm {
            return Err(BundleError::Input(format!(
                "Margin of {}mm leaves no usable area on a {}x{}mm page",
                self.margin_mm, width_mm, height_mm
            )));
        }
        Ok(())
    }
}
