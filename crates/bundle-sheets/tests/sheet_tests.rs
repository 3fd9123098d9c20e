use bundle_sheets::*;
use lopdf::Document;

fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

fn entries(count: usize) -> Vec<TocEntry> {
    (1..=count)
        .map(|i| TocEntry {
            label: i.to_string(),
            title: format!("Document {}", i),
            cover_page: 10 + i,
        })
        .collect()
}

#[test]
fn test_default_toc_capacity() {
    // A4 with 20mm margins fits 20 rows per TOC page
    let options = SheetOptions::default();
    assert_eq!(options.toc_rows_per_page(), 20);
}

#[test]
fn test_toc_single_page() {
    let options = SheetOptions::default();
    let bytes = render_toc(&entries(1), &options);
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn test_toc_paginates_at_capacity() {
    let options = SheetOptions::default();
    let capacity = options.toc_rows_per_page();

    let full = render_toc(&entries(capacity), &options);
    assert_eq!(page_count(&full), 1);

    let overflow = render_toc(&entries(capacity + 1), &options);
    assert_eq!(page_count(&overflow), 2);

    let three_pages = render_toc(&entries(2 * capacity + 5), &options);
    assert_eq!(page_count(&three_pages), 3);
}

#[test]
fn test_toc_page_count_matches_ceil() {
    let options = SheetOptions::default();
    let capacity = options.toc_rows_per_page();

    for count in [1, 2, capacity - 1, capacity, capacity + 1, 3 * capacity] {
        let bytes = render_toc(&entries(count), &options);
        let expected = count.div_ceil(capacity);
        assert_eq!(
            page_count(&bytes),
            expected,
            "wrong page count for {} entries",
            count
        );
    }
}

#[test]
fn test_smaller_page_reduces_capacity() {
    let a5 = SheetOptions {
        page_width_mm: 148.0,
        page_height_mm: 210.0,
        ..Default::default()
    };
    assert!(a5.toc_rows_per_page() < SheetOptions::default().toc_rows_per_page());
    assert!(a5.toc_rows_per_page() >= 1);
}

#[test]
fn test_cover_is_single_page_in_every_style() {
    for style in [CoverStyle::Classic, CoverStyle::Modern, CoverStyle::Minimal] {
        let options = SheetOptions {
            cover_style: style,
            ..Default::default()
        };
        let cover = CoverSheet {
            label: "IV".to_string(),
            title: "Expert Report".to_string(),
            first_page: 12,
            last_page: 19,
        };
        let bytes = render_cover(&cover, &options);
        assert_eq!(page_count(&bytes), 1, "style {:?}", style);
    }
}

#[test]
fn test_cover_without_title() {
    let cover = CoverSheet {
        label: "1".to_string(),
        title: String::new(),
        first_page: 5,
        last_page: 5,
    };
    let bytes = render_cover(&cover, &SheetOptions::default());
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn test_arabic_labels() {
    assert_eq!(NumberingStyle::Arabic.label(1), "1");
    assert_eq!(NumberingStyle::Arabic.label(42), "42");
}

#[test]
fn test_roman_labels() {
    assert_eq!(NumberingStyle::Roman.label(1), "I");
    assert_eq!(NumberingStyle::Roman.label(4), "IV");
    assert_eq!(NumberingStyle::Roman.label(30), "XXX");
    // Falls back to digits past the table
    assert_eq!(NumberingStyle::Roman.label(31), "31");
}

#[test]
fn test_letter_labels() {
    assert_eq!(NumberingStyle::Letters.label(1), "A");
    assert_eq!(NumberingStyle::Letters.label(26), "Z");
    assert_eq!(NumberingStyle::Letters.label(27), "27");
}
