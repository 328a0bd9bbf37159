use crate::degree::Degree;
use crate::output_name::output_path;
use crate::page_selection::PageSelection;
use crate::pdf::document::page_ids;
use crate::pdf::rotation::{page_rotation, set_rotation};
use crate::pdf::PdfDocument;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct RotateOptions {
    pub path: String,
    pub degree: Degree,
    pub pages: PageSelection,
    /// Overrides the derived `<name>_rotateDDD.<ext>` path.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct RotateReport {
    pub input: String,
    pub output: PathBuf,
    pub degree: u16,
    pub page_count: u32,
    pub rotated_pages: Vec<u32>,
}

pub async fn run(options: &RotateOptions, json: bool) -> Result<()> {
    let report = rotate(options).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Rotated {} of {} page(s) by {}° to {}",
            report.rotated_pages.len(),
            report.page_count,
            report.degree,
            report.output.display()
        );
    }

    Ok(())
}

/// Copy every page of the input into a new PDF, rotate the selected ones and
/// write the result next to the input. The input file is never written.
pub async fn rotate(options: &RotateOptions) -> Result<RotateReport> {
    let bytes = tokio::fs::read(&options.path)
        .await
        .with_context(|| format!("Failed to read PDF: {}", options.path))?;
    let source = PdfDocument::from_bytes(&bytes, &options.path)?;
    info!(path = %options.path, pages = source.page_count(), "loaded PDF");

    let mut doc = source.copy_pages()?;
    let mut rotated_pages = Vec::new();
    for (number, page_id) in page_ids(&doc) {
        if options.pages.contains(number) {
            let previous = page_rotation(&doc, page_id);
            set_rotation(&mut doc, page_id, options.degree)?;
            debug!(page = number, from = %previous, to = %options.degree, "rotated page");
            rotated_pages.push(number);
        }
    }

    let out_bytes = PdfDocument::to_bytes(&mut doc)?;

    let output = match &options.output {
        Some(path) => path.clone(),
        None => PathBuf::from(output_path(&options.path, options.degree)),
    };
    if is_same_file(Path::new(&options.path), &output).await {
        anyhow::bail!("Refusing to overwrite the input PDF: {}", output.display());
    }

    write_atomic(&output, &out_bytes).await?;
    info!(
        output = %output.display(),
        rotated = rotated_pages.len(),
        bytes = out_bytes.len(),
        "wrote rotated PDF"
    );

    Ok(RotateReport {
        input: options.path.clone(),
        output,
        degree: options.degree.get(),
        page_count: source.page_count(),
        rotated_pages,
    })
}

async fn is_same_file(a: &Path, b: &Path) -> bool {
    match (tokio::fs::canonicalize(a).await, tokio::fs::canonicalize(b).await) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Write through a hidden sibling file and rename it into place, so a failed
/// write never leaves a truncated PDF at `path`.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let partial = partial_path(path);

    let written = match tokio::fs::write(&partial, bytes).await {
        Ok(()) => tokio::fs::rename(&partial, path).await,
        Err(e) => Err(e),
    };

    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e).with_context(|| format!("Failed to write PDF: {}", path.display()));
    }

    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("output.pdf");
    path.with_file_name(format!(".{}.partial", name))
}
