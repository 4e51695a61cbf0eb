use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_WORKBOOK: &str = "Buctril_Super_Activations.xlsx";
pub const DEFAULT_OUTPUT: &str = "sessions.json";
pub const DEFAULT_SESSIONS_SHEET: &str = "SUM";
pub const DEFAULT_SUMMARY_SHEET: &str = "Overall Activation Summary";

/// Command-line arguments, each falling back to an environment variable and then a default
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "activation-report")]
#[command(about = "Convert a field activation workbook into sessions.json", long_about = None)]
pub struct Config {
    /// Path to the activation workbook
    #[arg(env = "ACTIVATION_WORKBOOK", default_value = DEFAULT_WORKBOOK)]
    pub workbook_path: PathBuf,

    /// Where to write the sessions document
    #[arg(short, long = "output", env = "SESSIONS_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output_path: PathBuf,

    /// Name of the sheet holding one row per session
    #[arg(long = "sheet", env = "SESSIONS_SHEET", default_value = DEFAULT_SESSIONS_SHEET)]
    pub sessions_sheet: String,

    /// Name of the sheet holding campaign totals
    #[arg(long, env = "SUMMARY_SHEET", default_value = DEFAULT_SUMMARY_SHEET)]
    pub summary_sheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            workbook_path: PathBuf::from(DEFAULT_WORKBOOK),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            sessions_sheet: DEFAULT_SESSIONS_SHEET.to_string(),
            summary_sheet: DEFAULT_SUMMARY_SHEET.to_string(),
        }
    }
}
