//! Document I/O operations for generated planners

use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Serialize a document to PDF bytes
pub async fn pdf_bytes(mut doc: Document) -> Result<Vec<u8>> {
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, PlannerError>(writer)
    })
    .await??;
    Ok(bytes)
}

/// Save the planner document
pub async fn save_pdf(doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = pdf_bytes(doc).await?;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Load a PDF document, e.g. to inspect a generated planner
pub async fn load_pdf(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let doc = tokio::task::spawn_blocking(move || Document::load_mem(&bytes)).await??;
    Ok(doc)
}
