use crate::common::*;

#[doc = "Date pattern used inside the persisted JSON document. The embedded newline splits the axis tick into date and time lines in the legacy renderer, so it is kept as-is."]
pub const STORED_DATE_FORMAT: &str = "%y-%m-%d\n%H:%M";

#[doc = "Single-line variant of the stored pattern, used for chart axis labels"]
pub const AXIS_LABEL_FORMAT: &str = "%y-%m-%d %H:%M";

#[doc = "Builds the fixed-offset timezone the series timestamps are interpreted in"]
pub fn fixed_offset_from_hours(offset_hours: i32) -> anyhow::Result<FixedOffset> {
    FixedOffset::east_opt(offset_hours * 3600).ok_or_else(|| {
        anyhow!(
            "[time_utils->fixed_offset_from_hours] invalid utc offset hours: {}",
            offset_hours
        )
    })
}

#[doc = "Current time in the configured fixed-offset timezone"]
pub fn get_current_time_in(timezone: FixedOffset) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&timezone)
}

#[doc = "Serializes a series timestamp into the stored string pattern"]
pub fn format_stored_date(date: &DateTime<FixedOffset>) -> String {
    date.format(STORED_DATE_FORMAT).to_string()
}

#[doc = r#"
    Parses one stored date string back into a timestamp.

    The current store format is `STORED_DATE_FORMAT`. A previous revision of
    the store serialized timestamps as RFC3339 strings; those are still
    accepted here and get rewritten in the fixed pattern on the next save.

    # Arguments
    * `raw` - Stored date string
    * `timezone` - Fixed-offset timezone the naive pattern is interpreted in

    # Returns
    * `Result<DateTime<FixedOffset>, anyhow::Error>`
"#]
pub fn parse_stored_date(raw: &str, timezone: FixedOffset) -> anyhow::Result<DateTime<FixedOffset>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, STORED_DATE_FORMAT) {
        return timezone.from_local_datetime(&naive).single().ok_or_else(|| {
            anyhow!(
                "[time_utils->parse_stored_date] ambiguous local datetime: {}",
                raw.escape_debug()
            )
        });
    }

    let legacy: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(raw).map_err(|e| {
        anyhow!(
            "[time_utils->parse_stored_date] unparseable date '{}': {:?}",
            raw.escape_debug(),
            e
        )
    })?;

    Ok(legacy.with_timezone(&timezone))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jakarta() -> FixedOffset {
        fixed_offset_from_hours(7).unwrap()
    }

    #[test]
    fn stored_date_round_trips_to_string_precision() {
        let tz: FixedOffset = jakarta();
        let original: DateTime<FixedOffset> = tz.with_ymd_and_hms(2026, 8, 29, 13, 45, 59).unwrap();

        let stored: String = format_stored_date(&original);
        assert_eq!(stored, "26-08-29\n13:45");

        let reparsed: DateTime<FixedOffset> = parse_stored_date(&stored, tz).unwrap();
        assert_eq!(format_stored_date(&reparsed), stored);
    }

    #[test]
    fn legacy_rfc3339_dates_are_accepted() {
        let tz: FixedOffset = jakarta();
        let parsed: DateTime<FixedOffset> =
            parse_stored_date("2025-01-02T03:04:05+00:00", tz).unwrap();

        assert_eq!(format_stored_date(&parsed), "25-01-02\n10:04");
    }

    #[test]
    fn garbage_dates_are_rejected() {
        assert!(parse_stored_date("not a date", jakarta()).is_err());
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        assert!(fixed_offset_from_hours(25).is_err());
        assert!(fixed_offset_from_hours(7).is_ok());
    }
}
