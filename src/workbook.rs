// Workbook access
//
// Activation report workbooks contain:
// - SUM sheet: one row per session under a header row near the top
// - Overall Activation Summary sheet: campaign totals in fixed cells

pub mod reader;
pub mod sheet;
pub mod summary;

pub use reader::{SessionsSheet, WorkbookError, WorkbookReader};
pub use sheet::Sheet;
pub use summary::{extract_summary, SummaryField, SummaryReport};
