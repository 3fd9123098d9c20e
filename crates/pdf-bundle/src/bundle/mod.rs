//! Bundle assembly pipeline
//!
//! This module orchestrates bundle generation:
//! 1. Adapt every source into renderable pages
//! 2. Compute the pagination plan from page counts alone
//! 3. Render the TOC and cover sheets with the planned numbers
//! 4. Assemble all sections and stamp continuous page numbers
//!
//! Any component failure aborts the whole pipeline; no partial output
//! is ever produced.

mod io;
mod merge;
mod stamp;

pub use io::{load_source, save_bundle};

use crate::options::BundleOptions;
use crate::plan::{self, BundlePlan};
use crate::source;
use crate::types::*;
use bundle_sheets::{CoverSheet, TocEntry};
use lopdf::Document;

/// Assemble a bundle from source documents.
///
/// Input invariants: at least two documents and exactly one marked as
/// main. Appendices keep their input order throughout: in the TOC, on
/// cover sheets and in physical placement.
pub async fn bundle(documents: &[SourceDocument], options: &BundleOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let documents = documents.to_vec();
    let options = options.clone();

    tokio::task::spawn_blocking(move || bundle_sync(&documents, &options)).await?
}

/// Synchronous pipeline behind [`bundle`].
pub fn bundle_sync(documents: &[SourceDocument], options: &BundleOptions) -> Result<Vec<u8>> {
    options.validate()?;
    let (main, appendices) = adapt_inputs(documents, options)?;

    let sheet_options = options.sheet_options();
    let counts: Vec<(String, usize)> = appendices
        .iter()
        .map(|(title, set)| (title.clone(), set.page_count()))
        .collect();
    let plan = plan::plan(
        main.page_count(),
        &counts,
        sheet_options.toc_rows_per_page(),
    )?;

    // Render generated sheets with the planned forward references
    let toc_entries: Vec<TocEntry> = plan
        .appendices
        .iter()
        .map(|entry| TocEntry {
            label: options.numbering.label(entry.index),
            title: entry.title.clone(),
            cover_page: entry.cover_page,
        })
        .collect();
    let toc = parse_sheet(bundle_sheets::render_toc(&toc_entries, &sheet_options))?;
    if toc.page_count() != plan.toc_page_count {
        return Err(BundleError::Assembly(format!(
            "TOC rendered {} pages but the plan expects {}",
            toc.page_count(),
            plan.toc_page_count
        )));
    }

    let mut covers = Vec::with_capacity(plan.appendices.len());
    for entry in &plan.appendices {
        let cover = CoverSheet {
            label: options.numbering.label(entry.index),
            title: entry.title.clone(),
            first_page: entry.cover_page,
            last_page: entry.content_end(),
        };
        let set = parse_sheet(bundle_sheets::render_cover(&cover, &sheet_options))?;
        if set.page_count() != 1 {
            return Err(BundleError::Assembly(format!(
                "Cover sheet for appendix {} rendered {} pages",
                entry.index,
                set.page_count()
            )));
        }
        covers.push(set);
    }

    let contents: Vec<PageSet> = appendices.into_iter().map(|(_, set)| set).collect();

    let mut output = merge::assemble(&plan, &main, &toc, &covers, &contents, options)?;
    stamp::stamp_page_numbers(&mut output)?;
    if options.mark_openings {
        stamp::mark_openings(&mut output, &plan, options.numbering)?;
    }

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Compute the pagination plan without generating any output.
pub fn plan_bundle(documents: &[SourceDocument], options: &BundleOptions) -> Result<BundlePlan> {
    options.validate()?;
    let (main, appendices) = adapt_inputs(documents, options)?;
    let counts: Vec<(String, usize)> = appendices
        .iter()
        .map(|(title, set)| (title.clone(), set.page_count()))
        .collect();
    plan::plan(
        main.page_count(),
        &counts,
        options.sheet_options().toc_rows_per_page(),
    )
}

/// Adapt all inputs, splitting the main document from the appendices
/// while preserving user order.
fn adapt_inputs(
    documents: &[SourceDocument],
    options: &BundleOptions,
) -> Result<(PageSet, Vec<(String, PageSet)>)> {
    if documents.len() < 2 {
        return Err(BundleError::Input(
            "A bundle needs a main document and at least one appendix".to_string(),
        ));
    }
    let main_count = documents.iter().filter(|d| d.is_main).count();
    if main_count != 1 {
        return Err(BundleError::Input(format!(
            "Exactly one document must be marked as main, found {}",
            main_count
        )));
    }

    let mut main = None;
    let mut appendices = Vec::new();
    for document in documents {
        let set = source::adapt(document, options)?;
        if document.is_main {
            main = Some(set);
        } else {
            appendices.push((document.title.clone(), set));
        }
    }

    let main =
        main.ok_or_else(|| BundleError::Input("No document marked as main".to_string()))?;
    Ok((main, appendices))
}

fn parse_sheet(bytes: Vec<u8>) -> Result<PageSet> {
    let document = Document::load_mem(&bytes)
        .map_err(|e| BundleError::Assembly(format!("Generated sheet failed to parse: {}", e)))?;
    Ok(PageSet::from_document(document))
}
