use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A biometric snapshot. Entries are immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: Uuid,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub workout_performance: Option<i64>,
}

/// Metrics as submitted by a client. Each field may be a number, a numeric
/// string, or anything else (which is treated as absent).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetricsInput {
    pub weight: Option<Value>,
    pub body_fat: Option<Value>,
    pub muscle_mass: Option<Value>,
    pub waist: Option<Value>,
    pub hips: Option<Value>,
    pub workout_performance: Option<Value>,
}

/// Metrics after coercion to their numeric types.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressMetrics {
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub workout_performance: Option<i64>,
}

impl ProgressMetrics {
    pub fn is_empty(&self) -> bool {
        self.weight.is_none()
            && self.body_fat.is_none()
            && self.muscle_mass.is_none()
            && self.waist.is_none()
            && self.hips.is_none()
            && self.workout_performance.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    Week,
    Month,
    Year,
    All,
}

impl TimeRange {
    /// Missing or unrecognised ranges select every entry.
    pub fn from_query(range: Option<&str>) -> Self {
        match range.map(|r| r.trim().to_lowercase()).as_deref() {
            Some("week") => TimeRange::Week,
            Some("month") => TimeRange::Month,
            Some("year") => TimeRange::Year,
            _ => TimeRange::All,
        }
    }

    /// Earliest timestamp included in the range, or `None` for no lower bound.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            TimeRange::Week => Some(now - Duration::days(7)),
            TimeRange::Month => now.checked_sub_months(Months::new(1)),
            TimeRange::Year => now.checked_sub_months(Months::new(12)),
            TimeRange::All => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressQuery {
    pub range: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_range_parsing() {
        assert_eq!(TimeRange::from_query(Some("week")), TimeRange::Week);
        assert_eq!(TimeRange::from_query(Some("Month")), TimeRange::Month);
        assert_eq!(TimeRange::from_query(Some("year")), TimeRange::Year);
        assert_eq!(TimeRange::from_query(Some("decade")), TimeRange::All);
        assert_eq!(TimeRange::from_query(None), TimeRange::All);
    }

    #[test]
    fn test_calendar_cutoffs() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();

        assert_eq!(
            TimeRange::Week.cutoff(now),
            Some(Utc.with_ymd_and_hms(2024, 3, 24, 12, 0, 0).unwrap())
        );
        // Month arithmetic clamps to the last day of the shorter month.
        assert_eq!(
            TimeRange::Month.cutoff(now),
            Some(Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap())
        );
        assert_eq!(
            TimeRange::Year.cutoff(now),
            Some(Utc.with_ymd_and_hms(2023, 3, 31, 12, 0, 0).unwrap())
        );
        assert_eq!(TimeRange::All.cutoff(now), None);
    }

    #[test]
    fn test_entry_wire_shape() {
        let entry = ProgressEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            weight: Some(70.0),
            body_fat: None,
            muscle_mass: None,
            waist: None,
            hips: None,
            workout_performance: Some(7),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("date").is_some());
        assert_eq!(json["weight"], 70.0);
        assert!(json["bodyFat"].is_null());
        assert_eq!(json["workoutPerformance"], 7);
    }
}
