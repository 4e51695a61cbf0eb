/// Workbook to `sessions.json` export
///
/// Reads the sessions sheet, normalizes it, writes the output document and then
/// reads the summary sheet. Whatever goes wrong while processing the workbook,
/// a valid document is still written: the sample document replaces the real one.
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::sessions::{normalize_with, OutputDocument};
use crate::workbook::{extract_summary, SummaryReport, WorkbookError, WorkbookReader};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Workbook error: {0}")]
    Workbook(#[from] WorkbookError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub document: OutputDocument,
    /// `None` when the sample document was written instead
    pub summary: Option<SummaryReport>,
    pub skipped_rows: usize,
    pub failed_rows: usize,
    pub degraded: bool,
}

/// Run the export, writing the sample document if the workbook cannot be processed
///
/// Only a failure to write the sample document itself is returned as an error.
pub fn export(config: &Config) -> Result<ExportOutcome, PipelineError> {
    match process_workbook(config) {
        Ok(outcome) => Ok(outcome),
        Err(e) => {
            error!("Error processing workbook: {}", e);
            let document = OutputDocument::sample();
            write_document(&document, &config.output_path)?;
            warn!(
                "Created minimal {} with sample data",
                config.output_path.display()
            );
            Ok(ExportOutcome {
                document,
                summary: None,
                skipped_rows: 0,
                failed_rows: 0,
                degraded: true,
            })
        }
    }
}

/// Normalize the sessions sheet and write the document, without any fallback
pub fn process_workbook(config: &Config) -> Result<ExportOutcome, PipelineError> {
    let reader = WorkbookReader::new(config.workbook_path.clone());
    info!("Processing workbook {}", reader.path().display());
    let source = reader.read_sessions_sheet(&config.sessions_sheet)?;

    let normalized = normalize_with(&source.sheet, source.header_mode);
    let document = OutputDocument::new(normalized.sessions);
    write_document(&document, &config.output_path)?;

    info!("Successfully processed {} sessions", document.sessions.len());
    info!("Output saved to {}", config.output_path.display());

    let summary = read_summary(&reader, &config.summary_sheet);

    Ok(ExportOutcome {
        document,
        summary: Some(summary),
        skipped_rows: normalized.skipped_rows,
        failed_rows: normalized.failures.len(),
        degraded: false,
    })
}

/// Read the summary sheet, zeroing every value if the sheet is unavailable
pub fn read_summary(reader: &WorkbookReader, sheet_name: &str) -> SummaryReport {
    match reader.read_range(sheet_name) {
        Ok(range) => extract_summary(&range),
        Err(e) => {
            warn!("Error extracting summary: {}", e);
            SummaryReport::zeroed()
        }
    }
}

pub fn write_document(document: &OutputDocument, path: &Path) -> Result<(), PipelineError> {
    let json = document.to_json()?;
    fs::write(path, json)?;
    Ok(())
}
