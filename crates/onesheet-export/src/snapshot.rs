//! Markup compilation and the two export surfaces.
//!
//! Compiles transpiled markup once, then serves PDF bytes and rasterized
//! PNG from the same layout. A failure here leaves the caller export-ready;
//! retrying is always safe.

use tracing::info;
use typst::layout::PagedDocument;
use typst_as_lib::TypstEngine;

use crate::error::ExportError;

/// Default raster density for PNG export, print-ready.
pub const DEFAULT_PIXELS_PER_INCH: f32 = 300.0;

/// A laid-out one-pager, ready for export.
pub struct CompiledOnePager {
    document: PagedDocument,
}

/// Compile Typst markup into a laid-out one-pager.
///
/// The markup sets automatic page height, so anything other than exactly
/// one page is a bug in the transpiled layout and is rejected.
pub fn compile(markup: &str) -> Result<CompiledOnePager, ExportError> {
    let engine = TypstEngine::builder()
        .main_file(markup.to_string())
        .build();

    let compiled = engine.compile();
    let document: PagedDocument = compiled
        .output
        .map_err(|e| ExportError::Compile(format!("{e:?}")))?;

    if document.pages.len() != 1 {
        return Err(ExportError::Pagination(document.pages.len()));
    }

    Ok(CompiledOnePager { document })
}

impl CompiledOnePager {
    /// PDF bytes: one page at letter width, height proportional to content.
    pub fn to_pdf(&self) -> Result<Vec<u8>, ExportError> {
        let options = typst_pdf::PdfOptions::default();
        let bytes = typst_pdf::pdf(&self.document, &options)
            .map_err(|e| ExportError::Pdf(format!("{e:?}")))?;

        info!(size = bytes.len(), "pdf export complete");
        Ok(bytes.into())
    }

    /// Encoded PNG at the given density.
    pub fn to_png(&self, pixels_per_inch: f32) -> Result<Vec<u8>, ExportError> {
        let pixmap = self.rasterize(pixels_per_inch)?;
        let bytes = pixmap
            .encode_png()
            .map_err(|e| ExportError::Png(e.to_string()))?;

        info!(
            width = pixmap.width(),
            height = pixmap.height(),
            size = bytes.len(),
            "png export complete"
        );
        Ok(bytes)
    }

    /// Raster snapshot of the single page.
    pub fn rasterize(&self, pixels_per_inch: f32) -> Result<tiny_skia::Pixmap, ExportError> {
        let page = self
            .document
            .pages
            .first()
            .ok_or(ExportError::Pagination(0))?;
        Ok(typst_render::render(page, pixels_per_inch / 72.0))
    }
}
