//! Source loading and output saving
//!
//! File-type sniffing from the extension happens here, before the
//! pipeline proper: the pipeline only ever sees a typed
//! [`SourceDocument`].

use crate::types::*;
use std::path::Path;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "tif", "tiff"];

/// Load one source document, sniffing its kind from the file
/// extension. The title defaults to the file stem when not given.
pub async fn load_source(
    path: impl AsRef<Path>,
    title: Option<String>,
    is_main: bool,
) -> Result<SourceDocument> {
    let path = path.as_ref();
    let title = title.unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    });

    let kind = sniff_kind(path, &title)?;
    let bytes = tokio::fs::read(path).await?;

    Ok(SourceDocument {
        title,
        is_main,
        kind,
        bytes,
    })
}

/// Write the assembled bundle to disk.
pub async fn save_bundle(bytes: &[u8], path: impl AsRef<Path>) -> Result<()> {
    tokio::fs::write(path, bytes).await?;
    Ok(())
}

fn sniff_kind(path: &Path, title: &str) -> Result<SourceKind> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if extension == "pdf" {
        Ok(SourceKind::Pdf)
    } else if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(SourceKind::Image)
    } else {
        Err(BundleError::UnsupportedFormat {
            title: title.to_string(),
            detail: if extension.is_empty() {
                "no file extension".to_string()
            } else {
                format!("unrecognized extension '.{}'", extension)
            },
        })
    }
}
