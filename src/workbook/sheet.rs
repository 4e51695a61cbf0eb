/// Cleaned in-memory view of a worksheet
///
/// Rows and columns that contain nothing but empty cells are dropped, so row
/// indices here are positions among the populated rows, not worksheet rows.
use calamine::{Data, DataType as _, Range};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<Data>>,
}

impl Sheet {
    /// Build a cleaned sheet from a calamine range
    pub fn from_range(range: &Range<Data>) -> Self {
        Self::from_rows(range.rows().map(|row| row.to_vec()).collect())
    }

    /// Build a cleaned sheet from raw rows (ragged rows are padded with empty cells)
    pub fn from_rows(rows: Vec<Vec<Data>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let rows: Vec<Vec<Data>> = rows
            .into_iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .map(|mut row| {
                row.resize(width, Data::Empty);
                row
            })
            .collect();

        let keep: Vec<usize> = (0..width)
            .filter(|&col| rows.iter().any(|row| !row[col].is_empty()))
            .collect();

        let rows = rows
            .into_iter()
            .map(|row| keep.iter().map(|&col| row[col].clone()).collect())
            .collect();

        Sheet { rows }
    }

    pub fn rows(&self) -> &[Vec<Data>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// True for cells that carry no usable value
pub fn is_missing(cell: &Data) -> bool {
    match cell {
        Data::Empty | Data::Error(_) => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Render a cell as trimmed text
///
/// Whole floats drop their fractional part so `12.0` reads as `12`.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
    };
    Some(text)
}

/// Coerce a cell to a finite number
///
/// Text cells may use thousands separators ("1,250").
pub fn cell_number(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::Bool(b) => f64::from(u8::from(*b)),
        Data::String(s) => s.trim().replace(',', "").parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}
