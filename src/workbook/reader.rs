use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::sessions::HeaderMode;
use crate::workbook::sheet::Sheet;

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Workbook has no readable sheets")]
    NoSheets,
}

/// A cleaned sessions sheet together with how its header row should be found
#[derive(Debug, Clone)]
pub struct SessionsSheet {
    pub sheet_name: String,
    pub sheet: Sheet,
    pub header_mode: HeaderMode,
}

/// Reader for activation report workbooks (xlsx, xls or ods)
pub struct WorkbookReader {
    workbook_path: PathBuf,
}

impl WorkbookReader {
    pub fn new(workbook_path: impl Into<PathBuf>) -> Self {
        Self {
            workbook_path: workbook_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.workbook_path
    }

    fn open(&self) -> Result<Sheets<BufReader<File>>, WorkbookError> {
        open_workbook_auto(&self.workbook_path)
            .map_err(|e| WorkbookError::WorkbookOpen(e.to_string()))
    }

    /// Names of all sheets in workbook order
    pub fn sheet_names(&self) -> Result<Vec<String>, WorkbookError> {
        Ok(self.open()?.sheet_names())
    }

    /// Read a named sheet as a raw calamine range
    pub fn read_range(&self, sheet_name: &str) -> Result<Range<Data>, WorkbookError> {
        let mut workbook = self.open()?;
        workbook
            .worksheet_range(sheet_name)
            .map_err(|_| WorkbookError::SheetNotFound(sheet_name.to_string()))
    }

    /// Read the sessions sheet, falling back to the first sheet in the workbook
    ///
    /// The named sheet gets header detection; the fallback sheet always uses
    /// its first populated row as the header.
    pub fn read_sessions_sheet(&self, sheet_name: &str) -> Result<SessionsSheet, WorkbookError> {
        info!("Reading sheet: {}", sheet_name);

        match self.read_range(sheet_name) {
            Ok(range) => {
                let sheet = Sheet::from_range(&range);
                debug!(
                    "Sheet {} has {} populated rows, {} populated columns",
                    sheet_name,
                    sheet.height(),
                    sheet.width()
                );
                Ok(SessionsSheet {
                    sheet_name: sheet_name.to_string(),
                    sheet,
                    header_mode: HeaderMode::Detect,
                })
            }
            Err(e @ WorkbookError::SheetNotFound(_)) => {
                warn!("Error reading {} sheet: {}", sheet_name, e);
                self.read_first_sheet()
            }
            Err(e) => Err(e),
        }
    }

    fn read_first_sheet(&self) -> Result<SessionsSheet, WorkbookError> {
        let mut workbook = self.open()?;
        let first_name = workbook
            .sheet_names()
            .into_iter()
            .next()
            .ok_or(WorkbookError::NoSheets)?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(WorkbookError::NoSheets)?
            .map_err(|_| WorkbookError::SheetNotFound(first_name.clone()))?;

        info!("Falling back to first sheet: {}", first_name);
        Ok(SessionsSheet {
            sheet_name: first_name,
            sheet: Sheet::from_range(&range),
            header_mode: HeaderMode::FirstRow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_reader_creation() {
        let reader = WorkbookReader::new("report.xlsx");
        assert_eq!(reader.path(), Path::new("report.xlsx"));
    }

    #[test]
    fn test_missing_workbook_is_open_error() {
        let reader = WorkbookReader::new("/nonexistent/path/report.xlsx");
        assert!(matches!(
            reader.read_sessions_sheet("SUM"),
            Err(WorkbookError::WorkbookOpen(_))
        ));
    }
}
