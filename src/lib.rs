pub mod config;
pub mod coordinates;
pub mod pipeline;
pub mod sessions;
pub mod workbook;
