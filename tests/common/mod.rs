// Fixture workbooks for integration tests
//
// Workbooks are written with rust_xlsxwriter into a temp directory and read
// back through calamine, the same way a real report would be.
#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Calendar date stored as an Excel serial with a `yyyy-mm-dd` number format
    Date(u16, u8, u8),
    Blank,
}

pub fn t(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

pub fn n(value: f64) -> Cell {
    Cell::Number(value)
}

pub const SUM_HEADER: [&str; 13] = [
    "SN",
    "City",
    "Session Location",
    "Date",
    "Total Farmers",
    "Total Wheat Acres",
    "Know Buctril",
    "Will Definitely Use",
    "Maybe",
    "Not Interested",
    "Top reason to use",
    "Top reason not to use",
    "Spot Coordinates",
];

pub fn sum_header() -> Vec<Cell> {
    SUM_HEADER.iter().map(|label| t(label)).collect()
}

/// The Multan session used across the end-to-end tests
pub fn multan_row() -> Vec<Cell> {
    vec![
        n(1.0),
        t("Multan"),
        t("Farm A"),
        t("2025-03-01"),
        n(50.0),
        n(1000.0),
        n(35.0),
        n(40.0),
        n(8.0),
        n(2.0),
        t("Yield"),
        t("Cost"),
        t("28°09'13.2\"N 69°48'59.7\"E"),
    ]
}

/// Summary sheet with totals in column B, rows 2-6
pub fn summary_rows(values: [f64; 5]) -> Vec<Vec<Cell>> {
    let labels = [
        "Total Sessions",
        "Total Farmers",
        "Total Wheat Acres",
        "Farmers Knowing Buctril",
        "Farmers Will Definitely Use",
    ];
    let mut rows = vec![vec![t("Overall Activation Summary")]];
    for (label, value) in labels.iter().zip(values) {
        rows.push(vec![t(label), n(value)]);
    }
    rows
}

pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Cell>>)]) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).expect("Failed to name worksheet");
        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (row_idx, col_idx) = (row_idx as u32, col_idx as u16);
                match cell {
                    Cell::Text(value) => {
                        worksheet
                            .write_string(row_idx, col_idx, value)
                            .expect("Failed to write string cell");
                    }
                    Cell::Number(value) => {
                        worksheet
                            .write_number(row_idx, col_idx, *value)
                            .expect("Failed to write number cell");
                    }
                    Cell::Date(year, month, day) => {
                        let date = ExcelDateTime::from_ymd(*year, *month, *day)
                            .expect("Invalid fixture date");
                        worksheet
                            .write_datetime_with_format(row_idx, col_idx, &date, &date_format)
                            .expect("Failed to write date cell");
                    }
                    Cell::Blank => {}
                }
            }
        }
    }
    workbook.save(path).expect("Failed to save fixture workbook");
}

/// Standard two-sheet activation workbook
pub fn activation_workbook(dir: &Path, sum_rows: Vec<Vec<Cell>>) -> PathBuf {
    let path = dir.join("activations.xlsx");
    write_workbook(
        &path,
        &[
            ("SUM", sum_rows),
            (
                "Overall Activation Summary",
                summary_rows([1.0, 50.0, 1000.0, 35.0, 40.0]),
            ),
        ],
    );
    path
}
