use activation_report::sessions::normalizer::{
    detect_header_row, ColumnMap, Field, HEADER_SCAN_LIMIT,
};
use activation_report::workbook::sheet::cell_text;
use activation_report::workbook::{Sheet, WorkbookReader};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let file_path = args
        .get(1)
        .map_or("Buctril_Super_Activations.xlsx", String::as_str);
    let sheet_name = args.get(2).map_or("SUM", String::as_str);

    println!("Opening workbook: {file_path}");
    let reader = WorkbookReader::new(file_path);

    println!("\nSheet names:");
    for (i, name) in reader.sheet_names()?.iter().enumerate() {
        println!("  {i}: {name}");
    }

    println!("\n\nExamining sheet: {sheet_name}");
    println!("{}", "=".repeat(100));

    let sheet = Sheet::from_range(&reader.read_range(sheet_name)?);
    println!(
        "Populated size: {} rows x {} columns",
        sheet.height(),
        sheet.width()
    );

    println!("\nFirst {} rows (showing first 10 columns):", HEADER_SCAN_LIMIT + 5);
    println!("{}", "=".repeat(100));
    for (row_idx, row) in sheet.rows().iter().enumerate().take(HEADER_SCAN_LIMIT + 5) {
        print!("Row {row_idx:3}: ");
        for cell in row.iter().take(10) {
            match cell_text(cell) {
                Some(text) => print!("[{text}] "),
                None => print!("[empty] "),
            }
        }
        println!();
    }

    if sheet.is_empty() {
        println!("\nSheet has no populated rows");
        return Ok(());
    }

    let header_row = detect_header_row(&sheet);
    let labels: Vec<String> = sheet.rows()[header_row]
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    let columns = ColumnMap::from_labels(&labels);

    println!("\n{}", "=".repeat(100));
    println!("Detected header row: {header_row}");
    println!("{}", "=".repeat(100));
    for (col_idx, label) in labels.iter().enumerate() {
        let mapped = Field::from_label(label)
            .filter(|field| columns.column(*field) == Some(col_idx));
        match mapped {
            Some(field) => println!("Col {col_idx:3}: {label} -> {field:?}"),
            None => println!("Col {col_idx:3}: {label} (ignored)"),
        }
    }

    Ok(())
}
