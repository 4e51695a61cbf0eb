/// DMS (degrees, minutes, seconds) coordinate parsing
///
/// Session sheets record the spot location as a single free-text pair such as
/// `28°09'13.2"N 69°48'59.7"E`. The first token is latitude, the second is
/// longitude. Parsing is lenient: minutes and seconds may be omitted, and any
/// failure degrades to "no coordinates" instead of aborting the sheet.
use tracing::warn;

const DEGREE_SIGN: char = '°';
const MINUTE_MARK: char = '\'';
const SECOND_MARK: char = '"';

/// A decimal-degree latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("Coordinate text is empty")]
    Empty,

    #[error("Expected latitude and longitude tokens in: {0}")]
    MissingToken(String),

    #[error("No degrees component in token: {0}")]
    MissingDegrees(String),

    #[error("Invalid number {value:?} in token {token:?}")]
    InvalidNumber { token: String, value: String },
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// (positive, negative) hemisphere letters
    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }
}

fn is_mark(c: char) -> bool {
    c == MINUTE_MARK || c == SECOND_MARK
}

/// Parse a DMS pair, returning `(None, None)` when the text is missing or malformed
///
/// Failures are logged and swallowed so one bad cell never stops a batch.
///
/// # Examples
///
/// ```
/// use activation_report::coordinates::parse_dms;
///
/// let (lat, lon) = parse_dms(Some("33°30'0\"S 70°15'0\"W"));
/// assert_eq!(lat, Some(-33.5));
/// assert_eq!(lon, Some(-70.25));
///
/// assert_eq!(parse_dms(None), (None, None));
/// ```
pub fn parse_dms(text: Option<&str>) -> (Option<f64>, Option<f64>) {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return (None, None);
    };

    match try_parse_dms(text) {
        Ok(point) => (Some(point.latitude), Some(point.longitude)),
        Err(e) => {
            warn!("Error converting coordinates {:?}: {}", text, e);
            (None, None)
        }
    }
}

/// Parse a DMS pair into decimal degrees
///
/// Minute and second marks never contain whitespace, so splitting the pair on
/// whitespace gives the same tokens as stripping the marks first. Inside each
/// token the degree sign and the marks all act as component separators.
pub fn try_parse_dms(text: &str) -> Result<LatLon, CoordinateError> {
    if text.trim().is_empty() {
        return Err(CoordinateError::Empty);
    }

    let tokens: Vec<&str> = text
        .split_whitespace()
        .filter(|token| !token.chars().all(is_mark))
        .collect();

    let [lat_token, lon_token, ..] = tokens.as_slice() else {
        return Err(CoordinateError::MissingToken(text.to_string()));
    };

    Ok(LatLon {
        latitude: parse_axis(lat_token, Axis::Latitude)?,
        longitude: parse_axis(lon_token, Axis::Longitude)?,
    })
}

fn parse_axis(token: &str, axis: Axis) -> Result<f64, CoordinateError> {
    let (positive, negative) = axis.hemispheres();

    let cleaned: String = token
        .chars()
        .filter(|c| *c != positive && *c != negative)
        .map(|c| if c == DEGREE_SIGN || is_mark(c) { ' ' } else { c })
        .collect();

    let mut parts = cleaned.split_whitespace();
    let degrees = parts
        .next()
        .ok_or_else(|| CoordinateError::MissingDegrees(token.to_string()))
        .and_then(|part| parse_component(token, part))?;
    let minutes = parts
        .next()
        .map(|part| parse_component(token, part))
        .transpose()?
        .unwrap_or(0.0);
    let seconds = parts
        .next()
        .map(|part| parse_component(token, part))
        .transpose()?
        .unwrap_or(0.0);

    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if token.contains(negative) {
        Ok(-decimal)
    } else {
        Ok(decimal)
    }
}

fn parse_component(token: &str, value: &str) -> Result<f64, CoordinateError> {
    value
        .parse::<f64>()
        .map_err(|_| CoordinateError::InvalidNumber {
            token: token.to_string(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_parse_axis_full_dms() {
        let value = parse_axis("28°09'13.2\"N", Axis::Latitude).unwrap();
        assert_close(value, 28.0 + 9.0 / 60.0 + 13.2 / 3600.0);
    }

    #[test]
    fn test_parse_axis_degrees_only() {
        assert_close(parse_axis("31°N", Axis::Latitude).unwrap(), 31.0);
    }

    #[test]
    fn test_parse_axis_west_is_negative() {
        let value = parse_axis("70°15'W", Axis::Longitude).unwrap();
        assert_close(value, -70.25);
    }

    #[test]
    fn test_parse_axis_ignores_other_axis_letters() {
        // 'S' is not a longitude hemisphere, so it stays in the token and breaks the number
        assert!(parse_axis("70°15'S", Axis::Longitude).is_err());
    }

    #[test]
    fn test_parse_axis_missing_degrees() {
        assert_eq!(
            parse_axis("N", Axis::Latitude),
            Err(CoordinateError::MissingDegrees("N".to_string()))
        );
    }

    #[test]
    fn test_try_parse_dms_mark_only_tokens_are_dropped() {
        let point = try_parse_dms("28°09'13.2\"N \" 69°48'59.7\"E").unwrap();
        assert_close(point.longitude, 69.0 + 48.0 / 60.0 + 59.7 / 3600.0);
    }

    #[test]
    fn test_try_parse_dms_extra_tokens_ignored() {
        let point = try_parse_dms("10°N 20°E approx").unwrap();
        assert_eq!(point, LatLon { latitude: 10.0, longitude: 20.0 });
    }

    #[test]
    fn test_try_parse_dms_blank() {
        assert_eq!(try_parse_dms("   "), Err(CoordinateError::Empty));
    }

    #[test]
    fn test_parse_dms_whitespace_only_is_missing() {
        assert_eq!(parse_dms(Some("  \t ")), (None, None));
    }

    #[test]
    fn test_error_display() {
        let err = CoordinateError::InvalidNumber {
            token: "2x°N".to_string(),
            value: "2x".to_string(),
        };
        assert!(err.to_string().contains("2x°N"));
    }
}
