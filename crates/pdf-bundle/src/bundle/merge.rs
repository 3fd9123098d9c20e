//! Assembly of the final document
//!
//! Every output page is a fresh page of the uniform output size; the
//! corresponding source page (main content, generated sheet, or
//! appendix content) is converted to a Form XObject, deep-copied into
//! the output document, and placed scaled-to-fit and centered. Page
//! numbers are not written here; stamping is a separate uniform pass.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::options::BundleOptions;
use crate::plan::BundlePlan;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// Concatenate all sections in final order: main pages, TOC pages,
/// then per appendix its cover sheet followed by its content pages.
///
/// Fails with [`BundleError::Assembly`] if the assembled page count
/// disagrees with the plan, which is the consistency check between
/// planner and renderers.
pub(crate) fn assemble(
    plan: &BundlePlan,
    main: &PageSet,
    toc: &PageSet,
    covers: &[PageSet],
    contents: &[PageSet],
    options: &BundleOptions,
) -> Result<Document> {
    let (page_width, page_height) = options.page_dimensions_pt();

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::new();

    let mut sections: Vec<&PageSet> = vec![main, toc];
    for (cover, content) in covers.iter().zip(contents.iter()) {
        sections.push(cover);
        sections.push(content);
    }

    for set in sections {
        // Cache per source document: shared resources are copied once
        let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
        for &source_page_id in set.page_ids() {
            let page_id = place_source_page(
                &mut output,
                set.document(),
                source_page_id,
                pages_tree_id,
                page_width,
                page_height,
                &mut cache,
            )?;
            page_refs.push(Object::Reference(page_id));
        }
    }

    if page_refs.len() != plan.total_page_count {
        return Err(BundleError::Assembly(format!(
            "Assembled {} pages but the plan expects {}",
            page_refs.len(),
            plan.total_page_count
        )));
    }

    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// Create one uniform-size output page with the source page placed on
/// it, scaled to fit and centered. A source `/Rotate` flag rotates the
/// placement so the page reads upright at its declared orientation.
fn place_source_page(
    output: &mut Document,
    source: &Document,
    source_page_id: ObjectId,
    parent_pages_id: ObjectId,
    page_width: f32,
    page_height: f32,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let src = page_box(source, source_page_id)?;
    let rotation = page_rotation(source, source_page_id)?;

    // A quarter turn swaps the extents the page occupies on the sheet
    let (effective_width, effective_height) = match rotation {
        90 | 270 => (src.height, src.width),
        _ => (src.width, src.height),
    };

    let scale = (page_width / effective_width).min(page_height / effective_height);
    let x = (page_width - effective_width * scale) / 2.0;
    let y = (page_height - effective_height * scale) / 2.0;

    let xobject_id = page_to_xobject(output, source, source_page_id, cache)?;

    // One matrix composing rotation, scale, and the translation that
    // both centers the result and cancels the media box origin.
    let (a, b, c, d, e, f) = match rotation {
        90 => (
            0.0,
            -scale,
            scale,
            0.0,
            x - scale * src.y0,
            y + scale * (src.width + src.x0),
        ),
        180 => (
            -scale,
            0.0,
            0.0,
            -scale,
            x + scale * (src.width + src.x0),
            y + scale * (src.height + src.y0),
        ),
        270 => (
            0.0,
            scale,
            -scale,
            0.0,
            x + scale * (src.height + src.y0),
            y - scale * src.x0,
        ),
        _ => (
            scale,
            0.0,
            0.0,
            scale,
            x - scale * src.x0,
            y - scale * src.y0,
        ),
    };

    let content = format!("q {} {} {} {} {} {} cm /Pg Do Q\n", a, b, c, d, e, f);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set("Pg", Object::Reference(xobject_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width),
            Object::Real(page_height),
        ]),
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Convert a source page into a Form XObject in the output document.
fn page_to_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let page_dict = source.get_dictionary(page_id)?;

    let media_box = page_dict
        .get(b"MediaBox")
        .and_then(|obj| obj.as_array())
        .ok()
        .cloned()
        .unwrap_or_else(default_media_box);

    let content_data = page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set("BBox", Object::Array(media_box));
    xobject_dict.set("FormType", Object::Integer(1));

    if let Ok(resources) = page_dict.get(b"Resources") {
        xobject_dict.set("Resources", deep_copy(output, source, resources, cache)?);
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

fn default_media_box() -> Vec<Object> {
    vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.0 as i64),
        Object::Integer(DEFAULT_PAGE_DIMENSIONS.1 as i64),
    ]
}

/// Collect a page's content stream data, concatenating multi-part
/// streams. A page without contents is a blank page.
fn page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };

    match contents {
        Object::Reference(id) => single_content_stream(doc, *id),
        Object::Array(refs) => {
            let mut result = Vec::new();
            for obj in refs {
                if let Object::Reference(id) = obj {
                    let content = single_content_stream(doc, *id)?;
                    result.extend_from_slice(&content);
                    result.push(b'\n');
                }
            }
            Ok(result)
        }
        _ => Ok(Vec::new()),
    }
}

fn single_content_stream(doc: &Document, id: ObjectId) -> Result<Vec<u8>> {
    if let Ok(stream) = doc.get_object(id)?.as_stream() {
        Ok(stream
            .decompressed_content()
            .unwrap_or_else(|_| stream.content.clone()))
    } else {
        Ok(Vec::new())
    }
}

/// Deep copy an object from source to output, following references.
/// The cache keeps shared resources (fonts, images) single-copy.
fn deep_copy(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            // Reserve the target id before recursing so reference
            // cycles resolve through the cache instead of looping
            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = deep_copy(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in dict.iter() {
                new_dict.set(key.clone(), deep_copy(output, source, value, cache)?);
            }
            Ok(Object::Dictionary(new_dict))
        }
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| deep_copy(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let mut new_dict = Dictionary::new();
            for (key, value) in stream.dict.iter() {
                new_dict.set(key.clone(), deep_copy(output, source, value, cache)?);
            }
            Ok(Object::Stream(Stream {
                dict: new_dict,
                content: stream.content.clone(),
                allows_compression: stream.allows_compression,
                start_position: None,
            }))
        }
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

/// A page's media box, split into origin and extent. Extents are
/// corner differences, so a box like `[10 10 622 802]` measures
/// 612x792 with a (10, 10) origin.
struct PageBox {
    x0: f32,
    y0: f32,
    width: f32,
    height: f32,
}

impl PageBox {
    fn fallback() -> Self {
        Self {
            x0: 0.0,
            y0: 0.0,
            width: DEFAULT_PAGE_DIMENSIONS.0,
            height: DEFAULT_PAGE_DIMENSIONS.1,
        }
    }
}

/// Read a page's media box; a missing or degenerate box falls back to
/// US Letter at the origin.
fn page_box(doc: &Document, page_id: ObjectId) -> Result<PageBox> {
    let page_dict = doc.get_dictionary(page_id)?;

    if let Ok(media_box) = page_dict.get(b"MediaBox").and_then(|obj| obj.as_array()) {
        if media_box.len() >= 4 {
            let numbers: Vec<Option<f32>> = media_box.iter().take(4).map(extract_number).collect();
            if let [Some(x0), Some(y0), Some(x1), Some(y1)] = numbers[..] {
                let width = x1 - x0;
                let height = y1 - y0;
                if width > 0.0 && height > 0.0 {
                    return Ok(PageBox {
                        x0,
                        y0,
                        width,
                        height,
                    });
                }
            }
        }
    }
    Ok(PageBox::fallback())
}

/// Read a page's `/Rotate` flag, normalized to 0, 90, 180 or 270.
fn page_rotation(doc: &Document, page_id: ObjectId) -> Result<i64> {
    let page_dict = doc.get_dictionary(page_id)?;
    let rotation = page_dict
        .get(b"Rotate")
        .and_then(|obj| obj.as_i64())
        .unwrap_or(0);
    Ok(rotation.rem_euclid(360) / 90 * 90)
}

fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
