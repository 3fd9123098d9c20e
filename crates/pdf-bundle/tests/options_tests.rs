use pdf_bundle::*;

#[test]
fn test_default_options() {
    let options = BundleOptions::default();
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.margin_mm, 20.0);
    assert_eq!(options.toc_heading, "Table of Contents");
    assert!(!options.mark_openings);
    assert!(options.validate().is_ok());
}

#[test]
fn test_orientation_swaps_dimensions() {
    let portrait = PaperSize::A4.dimensions_with_orientation(Orientation::Portrait);
    let landscape = PaperSize::A4.dimensions_with_orientation(Orientation::Landscape);
    assert_eq!(portrait, (210.0, 297.0));
    assert_eq!(landscape, (297.0, 210.0));
}

#[test]
fn test_page_dimensions_in_points() {
    let options = BundleOptions::default();
    let (w, h) = options.page_dimensions_pt();
    assert!((w - 595.27).abs() < 0.1);
    assert!((h - 841.88).abs() < 0.1);
}

#[test]
fn test_sheet_options_mirror_bundle_options() {
    let options = BundleOptions {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        margin_mm: 15.0,
        toc_heading: "Contents".to_string(),
        ..Default::default()
    };
    let sheets = options.sheet_options();
    assert_eq!(sheets.page_width_mm, 279.4);
    assert_eq!(sheets.page_height_mm, 215.9);
    assert_eq!(sheets.margin_mm, 15.0);
    assert_eq!(sheets.toc_heading, "Contents");
}

#[test]
fn test_default_toc_capacity_is_twenty_rows() {
    let options = BundleOptions::default();
    assert_eq!(options.sheet_options().toc_rows_per_page(), 20);
}

#[test]
fn test_validate_rejects_negative_margin() {
    let options = BundleOptions {
        margin_mm: -1.0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(BundleError::Input(_))));
}

#[test]
fn test_validate_rejects_margin_swallowing_page() {
    let options = BundleOptions {
        paper_size: PaperSize::A5,
        margin_mm: 80.0,
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(BundleError::Input(_))));
}

#[test]
fn test_validate_rejects_degenerate_custom_size() {
    let options = BundleOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(BundleError::Input(_))));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_save_load_roundtrip() {
    use tempfile::TempDir;

    let options = BundleOptions {
        paper_size: PaperSize::Legal,
        orientation: Orientation::Landscape,
        margin_mm: 12.5,
        numbering: NumberingStyle::Roman,
        cover_style: CoverStyle::Modern,
        toc_heading: "Exhibits".to_string(),
        mark_openings: true,
    };

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    options.save(&path).await.unwrap();

    let loaded = BundleOptions::load(&path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_load_rejects_bad_json() {
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    tokio::fs::write(&path, b"{not json").await.unwrap();

    let result = BundleOptions::load(&path).await;
    assert!(matches!(result, Err(BundleError::Input(_))));
}
