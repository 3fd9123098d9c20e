//! Pagination planning
//!
//! The TOC prints page numbers for sections that sit after the TOC
//! itself, so numbering has to be settled before anything is rendered.
//! This works in a single pass because the TOC's own length depends
//! only on how many appendices there are, never on their content:
//! compute the TOC page count from the appendix count, then walk the
//! appendices once assigning cover and content positions.

use crate::types::*;

/// One appendix's derived pagination. Page numbers are final printed
/// numbers, 1-based across the whole bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct AppendixEntry {
    /// 1-based ordinal in user order
    pub index: usize,
    pub title: String,
    /// Content pages contributed by the source document
    pub page_count: usize,
    /// Final page number of the generated cover sheet
    pub cover_page: usize,
    /// Final page number of the first content page, always cover_page + 1
    pub content_start: usize,
}

impl AppendixEntry {
    /// Final page number of the last content page
    pub fn content_end(&self) -> usize {
        self.content_start + self.page_count - 1
    }
}

/// The precomputed mapping from logical position to final printed page
/// number for every section of the bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct BundlePlan {
    pub main_page_count: usize,
    pub toc_page_count: usize,
    pub appendices: Vec<AppendixEntry>,
    pub total_page_count: usize,
}

/// Compute the pagination plan from page counts alone.
///
/// `rows_per_toc_page` must be the same capacity the TOC renderer
/// paginates on; [`crate::BundleOptions::sheet_options`] is the single
/// source for it.
pub fn plan(
    main_page_count: usize,
    appendices: &[(String, usize)],
    rows_per_toc_page: usize,
) -> Result<BundlePlan> {
    if appendices.is_empty() {
        return Err(BundleError::InvalidPlan(
            "A bundle needs at least one appendix".to_string(),
        ));
    }
    if main_page_count == 0 {
        return Err(BundleError::InvalidPlan(
            "Main document has no pages".to_string(),
        ));
    }
    if rows_per_toc_page == 0 {
        return Err(BundleError::InvalidPlan(
            "TOC row capacity must be positive".to_string(),
        ));
    }
    if let Some((title, _)) = appendices.iter().find(|(_, count)| *count == 0) {
        return Err(BundleError::InvalidPlan(format!(
            "Appendix '{}' has no pages",
            title
        )));
    }

    let toc_page_count = appendices.len().div_ceil(rows_per_toc_page);

    // Cursor starts right after the main document and the TOC; each
    // appendix occupies one cover sheet plus its content pages.
    let mut cursor = main_page_count + toc_page_count + 1;
    let mut entries = Vec::with_capacity(appendices.len());

    for (index, (title, page_count)) in appendices.iter().enumerate() {
        let entry = AppendixEntry {
            index: index + 1,
            title: title.clone(),
            page_count: *page_count,
            cover_page: cursor,
            content_start: cursor + 1,
        };
        cursor += 1 + page_count;
        entries.push(entry);
    }

    Ok(BundlePlan {
        main_page_count,
        toc_page_count,
        appendices: entries,
        total_page_count: cursor - 1,
    })
}
