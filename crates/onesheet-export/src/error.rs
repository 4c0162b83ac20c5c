use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("markup compilation failed: {0}")]
    Compile(String),

    #[error("expected a single page, layout produced {0}")]
    Pagination(usize),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("PNG encoding failed: {0}")]
    Png(String),
}
