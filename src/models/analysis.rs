use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis payload returned by `POST /analyze`.
///
/// The backend owns the statistics; this side only checks that the series
/// line up before anything is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub trend: String,
    pub slope: f64,
    pub highest: f64,
    pub lowest: f64,
    pub average: f64,
    pub count: usize,
    pub dates: Vec<String>,
    pub prices: Vec<f64>,
    /// Day-to-day change; element 0 carries no information.
    pub changes: Vec<f64>,
}

/// Reasons a decoded payload is refused before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `dates`, `prices` and `changes` are not index-aligned
    LengthMismatch {
        dates: usize,
        prices: usize,
        changes: usize,
    },
    /// `count` disagrees with the length of the series
    CountMismatch { count: usize, series: usize },
    /// A summary scalar is NaN or infinite
    NonFinite { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::LengthMismatch {
                dates,
                prices,
                changes,
            } => write!(
                f,
                "series lengths differ (dates {}, prices {}, changes {})",
                dates, prices, changes
            ),
            ValidationError::CountMismatch { count, series } => {
                write!(f, "count is {} but the series has {} points", count, series)
            }
            ValidationError::NonFinite { field } => write!(f, "{} is not a finite number", field),
        }
    }
}

impl std::error::Error for ValidationError {}

impl AnalysisResult {
    /// Number of aligned points in the series.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (dates, prices, changes) = (self.dates.len(), self.prices.len(), self.changes.len());
        if dates != prices || prices != changes {
            return Err(ValidationError::LengthMismatch {
                dates,
                prices,
                changes,
            });
        }
        if self.count != prices {
            return Err(ValidationError::CountMismatch {
                count: self.count,
                series: prices,
            });
        }

        let scalars = [
            ("slope", self.slope),
            ("highest", self.highest),
            ("lowest", self.lowest),
            ("average", self.average),
        ];
        if let Some((field, _)) = scalars.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ValidationError::NonFinite { field });
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_result() -> AnalysisResult {
        AnalysisResult {
            trend: "upward".to_string(),
            slope: 0.0321,
            highest: 105.0,
            lowest: 98.0,
            average: 101.2,
            count: 3,
            dates: vec!["d1".into(), "d2".into(), "d3".into()],
            prices: vec![98.0, 100.0, 105.0],
            changes: vec![0.0, 2.0, 5.0],
        }
    }

    #[test]
    fn decodes_backend_payload() {
        let body = r#"{
            "trend": "UPWARD TREND",
            "slope": 3.5,
            "prices": [98.0, 100.0, 105.0],
            "highest": 105.0,
            "lowest": 98.0,
            "average": 101.0,
            "count": 3,
            "changes": [0.0, 2.0, 5.0],
            "dates": ["15-10-2026", "16-10-2026", "17-10-2026"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.trend, "UPWARD TREND");
        assert_eq!(result.len(), 3);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn integer_scalars_decode_as_floats() {
        let body = r#"{"trend":"NO DATA","slope":0,"highest":0,"lowest":0,"average":0,
                       "count":0,"dates":[],"prices":[],"changes":[]}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();
        assert!(result.is_empty());
        assert!(result.validate().is_ok());
    }

    #[test]
    fn missing_series_is_a_decode_error() {
        let body = r#"{"trend":"SIDEWAYS","slope":0.1,"highest":1,"lowest":1,"average":1,"count":1}"#;
        assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
    }

    #[test]
    fn misaligned_series_are_rejected() {
        let mut result = sample_result();
        result.changes.pop();
        assert_eq!(
            result.validate(),
            Err(ValidationError::LengthMismatch {
                dates: 3,
                prices: 3,
                changes: 2
            })
        );
    }

    #[test]
    fn count_must_match_series() {
        let mut result = sample_result();
        result.count = 5;
        assert_eq!(
            result.validate(),
            Err(ValidationError::CountMismatch { count: 5, series: 3 })
        );
    }

    #[test]
    fn non_finite_scalars_are_rejected() {
        let mut result = sample_result();
        result.average = f64::NAN;
        assert_eq!(
            result.validate(),
            Err(ValidationError::NonFinite { field: "average" })
        );
    }
}
