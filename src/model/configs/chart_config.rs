use crate::common::*;

#[doc = r#"
    Rendering settings for the returned line chart.

    `window_size` bounds how many of the newest observations are drawn.
    `y_floor` and `y_headroom` drive the value-axis ceiling policy:
    `max(max_value + y_headroom, y_floor)`.
"#]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    pub title: String,
    pub series_labels: [String; 3],
    pub width: u32,
    pub height: u32,
    pub window_size: usize,
    pub y_floor: i64,
    pub y_headroom: i64,
}
