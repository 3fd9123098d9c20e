//! Page number and opening-mark overlays
//!
//! The only place printed page numbers are written. Assembly leaves
//! every page number-agnostic; this pass walks the finished document
//! once and overlays the continuous 1-based sequence, so cover and TOC
//! layout never needs to change when numbering does.

use crate::constants::{
    HELVETICA_CHAR_WIDTH_RATIO, OPENING_MARK_FONT_SIZE, OPENING_MARK_HEIGHT, OPENING_MARK_INSET,
    OPENING_MARK_WIDTH, PAGE_NUMBER_FONT_SIZE, PAGE_NUMBER_X, PAGE_NUMBER_Y,
};
use crate::plan::BundlePlan;
use crate::types::*;
use bundle_sheets::NumberingStyle;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Stamp page number `k` onto page `k` for every page, bottom-left.
pub(crate) fn stamp_page_numbers(doc: &mut Document) -> Result<()> {
    let font_id = add_builtin_font(doc, b"Helvetica");
    let pages: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();

    for (number, page_id) in pages {
        let ops = format!(
            "BT /Fpn {} Tf {} {} Td ({}) Tj ET\n",
            PAGE_NUMBER_FONT_SIZE, PAGE_NUMBER_X, PAGE_NUMBER_Y, number
        );
        append_overlay(doc, page_id, ops, &[("Fpn", font_id)])?;
    }

    Ok(())
}

/// Stamp a boxed "Appendix N" marking in the top-right corner of each
/// appendix's first content page.
pub(crate) fn mark_openings(
    doc: &mut Document,
    plan: &BundlePlan,
    numbering: NumberingStyle,
) -> Result<()> {
    let font_id = add_builtin_font(doc, b"Helvetica-Bold");
    let pages = doc.get_pages();

    for entry in &plan.appendices {
        let page_id = *pages
            .get(&(entry.content_start as u32))
            .ok_or_else(|| {
                BundleError::Assembly(format!(
                    "Appendix {} opening page {} not present in output",
                    entry.index, entry.content_start
                ))
            })?;

        let (page_width, page_height) = page_size(doc, page_id)?;
        let box_x = page_width - OPENING_MARK_WIDTH - OPENING_MARK_INSET;
        let box_y = page_height - OPENING_MARK_HEIGHT - OPENING_MARK_INSET;

        let text = format!("Appendix {}", numbering.label(entry.index));
        let text_width =
            text.chars().count() as f32 * OPENING_MARK_FONT_SIZE * HELVETICA_CHAR_WIDTH_RATIO;
        let text_x = box_x + (OPENING_MARK_WIDTH - text_width) / 2.0;
        let text_y = box_y + 10.0;

        let ops = format!(
            "q 0.96 0.96 0.96 rg {x} {y} {w} {h} re f \
             0 0 0 RG 1 w {x} {y} {w} {h} re S Q\n\
             BT /Fpb {size} Tf {tx} {ty} Td ({text}) Tj ET\n",
            x = box_x,
            y = box_y,
            w = OPENING_MARK_WIDTH,
            h = OPENING_MARK_HEIGHT,
            size = OPENING_MARK_FONT_SIZE,
            tx = text_x,
            ty = text_y,
            text = text,
        );
        append_overlay(doc, page_id, ops, &[("Fpb", font_id)])?;
    }

    Ok(())
}

/// Append an overlay content stream to a page and register the fonts
/// it uses in the page's resources.
fn append_overlay(
    doc: &mut Document,
    page_id: ObjectId,
    ops: String,
    fonts: &[(&str, ObjectId)],
) -> Result<()> {
    let overlay_id = doc.add_object(Stream::new(Dictionary::new(), ops.into_bytes()));

    let mut page_dict = doc.get_dictionary(page_id)?.clone();

    let contents = match page_dict.get(b"Contents") {
        Ok(Object::Reference(id)) => vec![Object::Reference(*id), Object::Reference(overlay_id)],
        Ok(Object::Array(existing)) => {
            let mut refs = existing.clone();
            refs.push(Object::Reference(overlay_id));
            refs
        }
        _ => vec![Object::Reference(overlay_id)],
    };
    page_dict.set("Contents", Object::Array(contents));

    let mut resources = match page_dict.get(b"Resources") {
        Ok(Object::Dictionary(dict)) => dict.clone(),
        Ok(Object::Reference(id)) => doc.get_dictionary(*id)?.clone(),
        _ => Dictionary::new(),
    };
    let mut font_dict = match resources.get(b"Font") {
        Ok(Object::Dictionary(dict)) => dict.clone(),
        _ => Dictionary::new(),
    };
    for (name, id) in fonts {
        font_dict.set(*name, Object::Reference(*id));
    }
    resources.set("Font", Object::Dictionary(font_dict));
    page_dict.set("Resources", Object::Dictionary(resources));

    doc.objects.insert(page_id, Object::Dictionary(page_dict));
    Ok(())
}

fn add_builtin_font(doc: &mut Document, base_font: &[u8]) -> ObjectId {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", Object::Name(b"Font".to_vec()));
    font_dict.set("Subtype", Object::Name(b"Type1".to_vec()));
    font_dict.set("BaseFont", Object::Name(base_font.to_vec()));
    doc.add_object(font_dict)
}

fn page_size(doc: &Document, page_id: ObjectId) -> Result<(f32, f32)> {
    let page_dict = doc.get_dictionary(page_id)?;
    let media_box = page_dict.get(b"MediaBox")?.as_array()?;
    let value = |obj: &Object| -> f32 {
        match obj {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            _ => 0.0,
        }
    };
    Ok((value(&media_box[2]), value(&media_box[3])))
}
