/// Overall Activation Summary extractor
///
/// The summary sheet keeps campaign totals in fixed cells of column B:
/// ```text
/// Row 2: Total Sessions
/// Row 3: Total Farmers
/// Row 4: Total Wheat Acres
/// Row 5: Farmers Knowing Buctril
/// Row 6: Farmers Will Definitely Use
/// ```
/// Each cell is read on its own and falls back to 0.
use calamine::{Data, Range};
use serde::Serialize;
use tracing::debug;

use crate::workbook::sheet::cell_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    TotalSessions,
    TotalFarmers,
    TotalWheatAcres,
    FarmersKnowingBuctril,
    FarmersWillDefinitelyUse,
}

impl SummaryField {
    pub const ALL: [SummaryField; 5] = [
        SummaryField::TotalSessions,
        SummaryField::TotalFarmers,
        SummaryField::TotalWheatAcres,
        SummaryField::FarmersKnowingBuctril,
        SummaryField::FarmersWillDefinitelyUse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SummaryField::TotalSessions => "Total Sessions",
            SummaryField::TotalFarmers => "Total Farmers",
            SummaryField::TotalWheatAcres => "Total Wheat Acres",
            SummaryField::FarmersKnowingBuctril => "Farmers Knowing Buctril",
            SummaryField::FarmersWillDefinitelyUse => "Farmers Will Definitely Use",
        }
    }

    /// Zero-based (row, column) worksheet position
    pub fn cell(self) -> (u32, u32) {
        match self {
            SummaryField::TotalSessions => (1, 1),
            SummaryField::TotalFarmers => (2, 1),
            SummaryField::TotalWheatAcres => (3, 1),
            SummaryField::FarmersKnowingBuctril => (4, 1),
            SummaryField::FarmersWillDefinitelyUse => (5, 1),
        }
    }
}

/// Campaign totals in label order
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    values: Vec<(SummaryField, f64)>,
}

impl SummaryReport {
    /// Report used when the summary sheet cannot be read at all
    pub fn zeroed() -> Self {
        Self {
            values: SummaryField::ALL.iter().map(|&field| (field, 0.0)).collect(),
        }
    }

    pub fn get(&self, field: SummaryField) -> f64 {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map_or(0.0, |(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.values.iter().map(|(field, value)| (field.label(), *value))
    }
}

impl Serialize for SummaryReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Read the summary cells from the summary sheet range
///
/// Positions are absolute worksheet coordinates, so leading blank rows or
/// columns in the sheet do not shift them.
pub fn extract_summary(range: &Range<Data>) -> SummaryReport {
    let values = SummaryField::ALL
        .iter()
        .map(|&field| {
            let value = range.get_value(field.cell()).and_then(cell_number);
            if value.is_none() {
                debug!("No numeric value for {:?} at {:?}", field, field.cell());
            }
            (field, value.unwrap_or(0.0))
        })
        .collect();

    SummaryReport { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_range(values: &[(u32, u32, Data)]) -> Range<Data> {
        let mut range = Range::new((0, 0), (6, 2));
        for (row, col, value) in values {
            range.set_value((*row, *col), value.clone());
        }
        range
    }

    #[test]
    fn test_extract_summary_reads_fixed_cells() {
        let range = summary_range(&[
            (1, 0, Data::String("Total Sessions".to_string())),
            (1, 1, Data::Float(12.0)),
            (2, 1, Data::Int(640)),
            (3, 1, Data::String("12,800".to_string())),
            (4, 1, Data::Float(450.0)),
            (5, 1, Data::Float(380.0)),
        ]);

        let summary = extract_summary(&range);
        assert_eq!(summary.get(SummaryField::TotalSessions), 12.0);
        assert_eq!(summary.get(SummaryField::TotalFarmers), 640.0);
        assert_eq!(summary.get(SummaryField::TotalWheatAcres), 12800.0);
        assert_eq!(summary.get(SummaryField::FarmersKnowingBuctril), 450.0);
        assert_eq!(summary.get(SummaryField::FarmersWillDefinitelyUse), 380.0);
    }

    #[test]
    fn test_extract_summary_defaults_each_cell() {
        let range = summary_range(&[
            (1, 1, Data::Float(3.0)),
            (2, 1, Data::String("pending".to_string())),
        ]);

        let summary = extract_summary(&range);
        assert_eq!(summary.get(SummaryField::TotalSessions), 3.0);
        assert_eq!(summary.get(SummaryField::TotalFarmers), 0.0);
        assert_eq!(summary.get(SummaryField::FarmersWillDefinitelyUse), 0.0);
    }

    #[test]
    fn test_extract_summary_out_of_range() {
        let range: Range<Data> = Range::new((0, 0), (1, 0));
        assert_eq!(extract_summary(&range), SummaryReport::zeroed());
    }

    #[test]
    fn test_summary_serializes_in_label_order() {
        let json = serde_json::to_string(&SummaryReport::zeroed()).unwrap();
        assert!(json.starts_with("{\"Total Sessions\":0.0"));
        assert!(json.ends_with("\"Farmers Will Definitely Use\":0.0}"));
    }
}
