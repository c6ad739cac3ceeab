use crate::common::*;

#[doc = r#"
    System-wide settings.

    `utc_offset_hours` fixes the timezone observation timestamps are recorded
    and displayed in. `max_points`, when set, caps the persisted series to the
    newest N entries instead of letting the store grow without bound.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub utc_offset_hours: i32,
    pub max_points: Option<usize>,
}
