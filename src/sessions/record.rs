use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const OUTPUT_FORMAT: &str = "sessions_v1";

// TODO: replace with a clarity figure from the sheet once product defines one
pub const CLARITY_PCT_PLACEHOLDER: f64 = 60.0;

/// One normalized field-activation session
///
/// `lat`/`latitude` and `lon`/`lng`/`longitude` always hold the same values;
/// dashboards in the field read different aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub sn: u64,
    pub city: String,
    pub spot: String,
    pub date: String,
    pub farmers: f64,
    pub acres: f64,
    pub definite: f64,
    pub maybe: f64,
    pub not_interested: f64,
    pub definite_pct: f64,
    pub awareness_pct: f64,
    pub clarity_pct: f64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub lng: Option<f64>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub reasons_use: String,
    pub reasons_no: String,
}

impl SessionRecord {
    /// Set every coordinate alias at once
    pub fn with_coordinates(mut self, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        self.lat = latitude;
        self.latitude = latitude;
        self.lon = longitude;
        self.lng = longitude;
        self.longitude = longitude;
        self
    }

    /// Illustrative record written when a workbook cannot be processed
    pub fn sample() -> Self {
        SessionRecord {
            sn: 1,
            city: "Sample City".to_string(),
            spot: "Sample Spot".to_string(),
            date: "2025-01-01".to_string(),
            farmers: 50.0,
            acres: 1000.0,
            definite: 40.0,
            maybe: 8.0,
            not_interested: 2.0,
            definite_pct: 80.0,
            awareness_pct: 70.0,
            clarity_pct: CLARITY_PCT_PLACEHOLDER,
            lat: None,
            lon: None,
            lng: None,
            longitude: None,
            latitude: None,
            reasons_use: "Sample reason to use".to_string(),
            reasons_no: String::new(),
        }
        .with_coordinates(Some(30.3753), Some(69.3451))
    }
}

/// Percentage of `part` in `farmers`, 0 when there are no farmers
pub fn percent_of_farmers(part: f64, farmers: f64) -> f64 {
    if farmers > 0.0 {
        part / farmers * 100.0
    } else {
        0.0
    }
}

/// The `sessions.json` document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub format: String,
    pub generated_at: DateTime<Utc>,
    pub sessions: Vec<SessionRecord>,
}

impl OutputDocument {
    pub fn new(sessions: Vec<SessionRecord>) -> Self {
        Self {
            format: OUTPUT_FORMAT.to_string(),
            generated_at: Utc::now(),
            sessions,
        }
    }

    /// Minimal document holding only the sample record
    pub fn sample() -> Self {
        Self::new(vec![SessionRecord::sample()])
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
