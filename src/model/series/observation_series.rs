use crate::common::*;

use crate::error::tracking_error::*;
use crate::utils_modules::time_utils::*;

#[doc = r#"
    On-disk shape of the observation series:
    `{"dates": [string...], "values": [[int,int,int]...]}`.

    Both keys default to empty so a partially written document still
    deserializes; the length invariant is checked when the stored form is
    lifted into `ObservationSeries`.
"#]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredSeries {
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub values: Vec<[i64; 3]>,
}

#[doc = r#"
    In-memory observation series: parallel vectors of timestamps and counter
    triples, insertion ordered. dates.len() == values.len() holds for every
    value of this type; the stored form is validated on load.
"#]
#[derive(Debug, Clone, Default, Getters)]
#[getset(get = "pub")]
pub struct ObservationSeries {
    dates: Vec<DateTime<FixedOffset>>,
    values: Vec<[i64; 3]>,
}

impl ObservationSeries {
    #[doc = r#"
        Lifts the stored document into the in-memory series.

        A length mismatch between the two arrays or an unparseable date string
        makes the whole document corrupt; callers decide whether to degrade to
        an empty series.
    "#]
    pub fn from_stored(
        stored: &StoredSeries,
        timezone: FixedOffset,
    ) -> Result<Self, TrackingError> {
        if stored.dates.len() != stored.values.len() {
            return Err(TrackingError::StoreCorrupt(format!(
                "dates/values length mismatch: {} vs {}",
                stored.dates.len(),
                stored.values.len()
            )));
        }

        let mut dates: Vec<DateTime<FixedOffset>> = Vec::with_capacity(stored.dates.len());

        for raw in &stored.dates {
            let parsed: DateTime<FixedOffset> = parse_stored_date(raw, timezone)
                .map_err(|e| TrackingError::StoreCorrupt(format!("{:?}", e)))?;
            dates.push(parsed);
        }

        Ok(ObservationSeries {
            dates,
            values: stored.values.clone(),
        })
    }

    #[doc = "Serializes the series back into the stored string form"]
    pub fn to_stored(&self) -> StoredSeries {
        StoredSeries {
            dates: self.dates.iter().map(format_stored_date).collect(),
            values: self.values.clone(),
        }
    }

    #[doc = "Appends one observation at the given timestamp"]
    pub fn push(&mut self, date: DateTime<FixedOffset>, values: [i64; 3]) {
        self.dates.push(date);
        self.values.push(values);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[doc = "Largest counter value across the whole series, 0 when empty"]
    pub fn max_value(&self) -> i64 {
        self.values
            .iter()
            .flat_map(|triple| triple.iter().copied())
            .max()
            .unwrap_or(0)
    }

    #[doc = "At most the newest `window_size` observations, oldest first"]
    pub fn last_window(&self, window_size: usize) -> (&[DateTime<FixedOffset>], &[[i64; 3]]) {
        let start: usize = self.dates.len().saturating_sub(window_size);
        (&self.dates[start..], &self.values[start..])
    }

    #[doc = "Drops the oldest observations until at most `max_points` remain"]
    pub fn prune_to(&mut self, max_points: usize) {
        if self.dates.len() > max_points {
            let drop_count: usize = self.dates.len() - max_points;
            self.dates.drain(..drop_count);
            self.values.drain(..drop_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jakarta() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn sample_series(point_count: usize) -> ObservationSeries {
        let tz: FixedOffset = jakarta();
        let mut series = ObservationSeries::default();

        for idx in 0..point_count {
            let date: DateTime<FixedOffset> = tz
                .with_ymd_and_hms(2026, 8, 1, 10, idx as u32 % 60, 0)
                .unwrap();
            let base: i64 = idx as i64;
            series.push(date, [base, base * 2, base * 3]);
        }

        series
    }

    #[test]
    fn stored_round_trip_preserves_dates_and_values() {
        let tz: FixedOffset = jakarta();
        let series: ObservationSeries = sample_series(3);

        let stored: StoredSeries = series.to_stored();
        let reloaded: ObservationSeries = ObservationSeries::from_stored(&stored, tz).unwrap();

        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.values(), series.values());
        assert_eq!(reloaded.to_stored().dates, stored.dates);
    }

    #[test]
    fn length_mismatch_is_corrupt() {
        let stored = StoredSeries {
            dates: vec!["26-08-01\n10:00".to_string()],
            values: vec![],
        };

        let result = ObservationSeries::from_stored(&stored, jakarta());
        assert!(matches!(result, Err(TrackingError::StoreCorrupt(_))));
    }

    #[test]
    fn unparseable_date_is_corrupt() {
        let stored = StoredSeries {
            dates: vec!["???".to_string()],
            values: vec![[1, 2, 3]],
        };

        let result = ObservationSeries::from_stored(&stored, jakarta());
        assert!(matches!(result, Err(TrackingError::StoreCorrupt(_))));
    }

    #[test]
    fn legacy_rfc3339_dates_load_and_resave_in_fixed_pattern() {
        let stored = StoredSeries {
            dates: vec!["2025-01-02T03:04:05+00:00".to_string()],
            values: vec![[1, 2, 3]],
        };

        let series: ObservationSeries =
            ObservationSeries::from_stored(&stored, jakarta()).unwrap();

        assert_eq!(series.to_stored().dates, vec!["25-01-02\n10:04".to_string()]);
    }

    #[test]
    fn last_window_bounds_to_newest_entries() {
        let series: ObservationSeries = sample_series(16);

        let (dates, values) = series.last_window(10);
        assert_eq!(dates.len(), 10);
        assert_eq!(values.len(), 10);
        assert_eq!(values[0], [6, 12, 18]);
        assert_eq!(values[9], [15, 30, 45]);

        let short_series = sample_series(4);
        let (short_dates, short_values) = short_series.last_window(10);
        assert_eq!(short_dates.len(), 4);
        assert_eq!(short_values.len(), 4);
    }

    #[test]
    fn max_value_spans_all_triples() {
        let series: ObservationSeries = sample_series(5);
        assert_eq!(series.max_value(), 12);
        assert_eq!(ObservationSeries::default().max_value(), 0);
    }

    #[test]
    fn prune_to_drops_oldest_entries() {
        let mut series: ObservationSeries = sample_series(6);

        series.prune_to(4);
        assert_eq!(series.len(), 4);
        assert_eq!(series.values()[0], [2, 4, 6]);

        series.prune_to(10);
        assert_eq!(series.len(), 4);
    }
}
