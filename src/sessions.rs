// Session records and the SUM sheet normalizer
//
// A SUM sheet holds one row per field-activation session. The normalizer turns
// those rows into `SessionRecord`s, which are written out as `sessions.json`.

pub mod normalizer;
pub mod record;

pub use normalizer::{normalize, normalize_with, HeaderMode, Normalized, RowError};
pub use record::{OutputDocument, SessionRecord};
