/// SUM sheet row normalizer
///
/// Turns a cleaned SUM sheet into `SessionRecord`s:
/// 1. Find the header row (first of the top `HEADER_SCAN_LIMIT` rows with an
///    "SN"-like cell, otherwise row 0)
/// 2. Map known header labels to canonical fields; other columns are ignored
/// 3. Build one record per data row that names a city or a spot
use calamine::Data;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::coordinates::parse_dms;
use crate::sessions::record::{percent_of_farmers, SessionRecord, CLARITY_PCT_PLACEHOLDER};
use crate::workbook::sheet::{cell_number, cell_text, is_missing, Sheet};

/// Header detection never looks further down than this
pub const HEADER_SCAN_LIMIT: usize = 10;

const HEADER_MARKERS: [&str; 2] = ["sn", "s.n"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sn,
    City,
    Spot,
    Date,
    Farmers,
    Acres,
    Awareness,
    Definite,
    Maybe,
    NotInterested,
    ReasonsUse,
    ReasonsNo,
    Coordinates,
}

/// Exact, case-sensitive header labels and the field each one fills
pub const COLUMN_LABELS: &[(&str, Field)] = &[
    ("S.N", Field::Sn),
    ("SN", Field::Sn),
    ("S.N.", Field::Sn),
    ("City", Field::City),
    ("Session Location", Field::Spot),
    ("Date", Field::Date),
    ("Total Farmers", Field::Farmers),
    ("Total Wheat Farmers", Field::Farmers),
    ("Total Wheat Acres", Field::Acres),
    ("Know Buctril", Field::Awareness),
    ("Will Definitely Use", Field::Definite),
    ("Maybe", Field::Maybe),
    ("Not Interested", Field::NotInterested),
    ("Top reason to use", Field::ReasonsUse),
    ("Top reason not to use", Field::ReasonsNo),
    ("Spot Coordinates", Field::Coordinates),
];

impl Field {
    pub fn from_label(label: &str) -> Option<Field> {
        COLUMN_LABELS
            .iter()
            .find(|(known, _)| *known == label)
            .map(|(_, field)| *field)
    }
}

/// How the header row of a sheet is located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// Scan the top rows for an "SN" marker
    Detect,
    /// Use the first populated row as-is
    FirstRow,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("Invalid sequence number at row {row}: {value}")]
    InvalidSequenceNumber { row: usize, value: String },
}

/// Result of normalizing one sheet
#[derive(Debug, Clone, Default)]
pub struct Normalized {
    pub sessions: Vec<SessionRecord>,
    /// Data rows without a city or a spot
    pub skipped_rows: usize,
    pub failures: Vec<RowError>,
}

/// Column index of each recognised field
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: Vec<(Field, usize)>,
}

impl ColumnMap {
    /// Map header labels to fields; the leftmost column wins for duplicate fields
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut columns: Vec<(Field, usize)> = Vec::new();
        for (col, label) in labels.iter().enumerate() {
            let Some(field) = Field::from_label(label.as_ref()) else {
                continue;
            };
            if columns.iter().any(|(f, _)| *f == field) {
                debug!("Ignoring duplicate column {:?} for {:?}", label.as_ref(), field);
                continue;
            }
            columns.push((field, col));
        }
        ColumnMap { columns }
    }

    pub fn column(&self, field: Field) -> Option<usize> {
        self.columns
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, col)| *col)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Index of the header row within the cleaned sheet
pub fn detect_header_row(sheet: &Sheet) -> usize {
    sheet
        .rows()
        .iter()
        .take(HEADER_SCAN_LIMIT)
        .position(|row| row.iter().any(is_header_marker))
        .unwrap_or(0)
}

fn is_header_marker(cell: &Data) -> bool {
    cell_text(cell)
        .map(|text| text.to_lowercase())
        .is_some_and(|text| HEADER_MARKERS.iter().any(|marker| text.contains(marker)))
}

/// Normalize a sheet whose header row should be detected
pub fn normalize(sheet: &Sheet) -> Normalized {
    normalize_with(sheet, HeaderMode::Detect)
}

pub fn normalize_with(sheet: &Sheet, header_mode: HeaderMode) -> Normalized {
    let mut result = Normalized::default();
    if sheet.is_empty() {
        warn!("Sheet is empty, no sessions to normalize");
        return result;
    }

    let header_row = match header_mode {
        HeaderMode::Detect => detect_header_row(sheet),
        HeaderMode::FirstRow => 0,
    };
    let labels: Vec<String> = sheet.rows()[header_row]
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    let columns = ColumnMap::from_labels(&labels);
    if columns.is_empty() {
        warn!("No known column labels in header row {}: {:?}", header_row, labels);
    }
    info!(
        "Using header row {} with {} recognised columns",
        header_row,
        columns.len()
    );

    for (idx, row) in sheet.rows()[header_row + 1..].iter().enumerate() {
        let row = RowView { cells: row, columns: &columns };

        if row.is_missing(Field::City) && row.is_missing(Field::Spot) {
            result.skipped_rows += 1;
            continue;
        }

        match build_record(&row, idx) {
            Ok(record) => result.sessions.push(record),
            Err(e) => {
                warn!("Error processing row {}: {}", idx, e);
                result.failures.push(e);
            }
        }
    }

    info!(
        "Normalized {} sessions ({} empty rows skipped, {} rows failed)",
        result.sessions.len(),
        result.skipped_rows,
        result.failures.len()
    );
    result
}

/// A data row read through the column map
struct RowView<'a> {
    cells: &'a [Data],
    columns: &'a ColumnMap,
}

impl RowView<'_> {
    fn cell(&self, field: Field) -> Option<&Data> {
        self.columns
            .column(field)
            .and_then(|col| self.cells.get(col))
            .filter(|cell| !is_missing(cell))
    }

    fn is_missing(&self, field: Field) -> bool {
        self.cell(field).is_none()
    }

    fn text(&self, field: Field) -> String {
        self.cell(field).and_then(cell_text).unwrap_or_default()
    }

    fn number(&self, field: Field) -> f64 {
        self.cell(field).and_then(cell_number).unwrap_or(0.0)
    }

    /// First whitespace-delimited token of the date cell, `YYYY-MM-DD` for real dates
    fn date(&self) -> String {
        match self.cell(Field::Date) {
            Some(Data::DateTime(dt)) => match dt.as_datetime() {
                Some(value) => value.date().format("%Y-%m-%d").to_string(),
                None => dt.as_f64().to_string(),
            },
            Some(Data::DateTimeIso(s)) => s
                .split(|c: char| c == 'T' || c.is_whitespace())
                .find(|part| !part.is_empty())
                .unwrap_or_default()
                .to_string(),
            Some(cell) => cell_text(cell)
                .and_then(|text| text.split_whitespace().next().map(str::to_string))
                .unwrap_or_default(),
            None => String::new(),
        }
    }

    /// Sequence number, or the 1-based data row position when the cell is empty
    fn sn(&self, idx: usize) -> Result<u64, RowError> {
        let Some(cell) = self.cell(Field::Sn) else {
            return Ok(idx as u64 + 1);
        };

        match cell_number(cell) {
            Some(value) if value >= 1.0 => Ok(value.trunc() as u64),
            _ => Err(RowError::InvalidSequenceNumber {
                row: idx,
                value: cell_text(cell).unwrap_or_default(),
            }),
        }
    }
}

fn build_record(row: &RowView<'_>, idx: usize) -> Result<SessionRecord, RowError> {
    let sn = row.sn(idx)?;

    let coordinates = row.cell(Field::Coordinates).and_then(cell_text);
    let (latitude, longitude) = parse_dms(coordinates.as_deref());

    let farmers = row.number(Field::Farmers);
    let definite = row.number(Field::Definite);
    let awareness = row.number(Field::Awareness);

    let record = SessionRecord {
        sn,
        city: row.text(Field::City),
        spot: row.text(Field::Spot),
        date: row.date(),
        farmers,
        acres: row.number(Field::Acres),
        definite,
        maybe: row.number(Field::Maybe),
        not_interested: row.number(Field::NotInterested),
        definite_pct: percent_of_farmers(definite, farmers),
        awareness_pct: percent_of_farmers(awareness, farmers),
        clarity_pct: CLARITY_PCT_PLACEHOLDER,
        lat: None,
        lon: None,
        lng: None,
        longitude: None,
        latitude: None,
        reasons_use: row.text(Field::ReasonsUse),
        reasons_no: row.text(Field::ReasonsNo),
    };

    Ok(record.with_coordinates(latitude, longitude))
}
