//! Page-source adapter
//!
//! Normalizes heterogeneous inputs into a [`PageSet`]: PDFs are parsed
//! as-is, raster images become a single page with the image embedded
//! as a DeviceRGB Image XObject. Only this module knows the concrete
//! source kind; the rest of the pipeline sees pages.

use crate::constants::{IMAGE_NATURAL_DPI, mm_to_pt};
use crate::options::BundleOptions;
use crate::types::*;
use lopdf::{Dictionary, Document, Object, Stream, dictionary};

/// Adapt one source document into renderable pages.
pub fn adapt(source: &SourceDocument, options: &BundleOptions) -> Result<PageSet> {
    match source.kind {
        SourceKind::Pdf => adapt_pdf(source),
        SourceKind::Image => adapt_image(source, options),
    }
}

fn adapt_pdf(source: &SourceDocument) -> Result<PageSet> {
    let document = Document::load_mem(&source.bytes).map_err(|e| BundleError::CorruptInput {
        title: source.title.clone(),
        reason: e.to_string(),
    })?;

    let set = PageSet::from_document(document);
    if set.page_count() == 0 {
        return Err(BundleError::CorruptInput {
            title: source.title.clone(),
            reason: "PDF contains no pages".to_string(),
        });
    }
    Ok(set)
}

/// Build a single-page document carrying the decoded image.
///
/// Fit rule (deterministic): the image's natural size is its pixel
/// dimensions at 96 DPI. It is scaled down to fit inside the page
/// margins, preserving aspect ratio, and never scaled up past natural
/// size. The result is centered on both axes.
fn adapt_image(source: &SourceDocument, options: &BundleOptions) -> Result<PageSet> {
    let decoded =
        image::load_from_memory(&source.bytes).map_err(|e| BundleError::CorruptInput {
            title: source.title.clone(),
            reason: e.to_string(),
        })?;

    let rgba = decoded.to_rgba8();
    let (px_width, px_height) = rgba.dimensions();
    if px_width == 0 || px_height == 0 {
        return Err(BundleError::CorruptInput {
            title: source.title.clone(),
            reason: "Image has zero dimensions".to_string(),
        });
    }

    // Flatten transparency onto a white background
    let mut rgb = Vec::with_capacity(px_width as usize * px_height as usize * 3);
    for pixel in rgba.pixels() {
        let alpha = pixel[3] as u16;
        for channel in 0..3 {
            let value = pixel[channel] as u16;
            rgb.push(((value * alpha + 255 * (255 - alpha) + 127) / 255) as u8);
        }
    }

    let (page_width, page_height) = options.page_dimensions_pt();
    let margin = mm_to_pt(options.margin_mm);
    let avail_width = page_width - 2.0 * margin;
    let avail_height = page_height - 2.0 * margin;

    let natural_width = px_width as f32 * 72.0 / IMAGE_NATURAL_DPI;
    let natural_height = px_height as f32 * 72.0 / IMAGE_NATURAL_DPI;
    let scale = (avail_width / natural_width)
        .min(avail_height / natural_height)
        .min(1.0);

    let draw_width = natural_width * scale;
    let draw_height = natural_height * scale;
    let x = (page_width - draw_width) / 2.0;
    let y = (page_height - draw_height) / 2.0;

    let mut doc = Document::with_version("1.7");

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => px_width as i64,
            "Height" => px_height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        rgb,
    ));

    let content = format!(
        "q {} 0 0 {} {} {} cm /Im0 Do Q\n",
        draw_width, draw_height, x, y
    );
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let pages_id = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(page_width),
            Object::Real(page_height),
        ],
        "Resources" => dictionary! {
            "XObject" => dictionary! {
                "Im0" => Object::Reference(image_id),
            },
        },
        "Contents" => Object::Reference(content_id),
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", catalog_id);

    Ok(PageSet::from_document(doc))
}
