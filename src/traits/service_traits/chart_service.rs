use crate::common::*;

use crate::error::tracking_error::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "Value-axis ceiling for the given observed maximum"]
    fn compute_y_ceiling(&self, max_value: i64) -> i64;

    #[doc = "
        Render the windowed observations as a PNG line chart held in memory
        # Arguments
        * `x_labels` - Axis label per observation, oldest first
        * `values` - Counter triples, parallel to `x_labels`
        * `y_ceiling` - Upper bound of the value axis
    "]
    async fn render_line_chart(
        &self,
        x_labels: Vec<String>,
        values: Vec<[i64; 3]>,
        y_ceiling: i64,
    ) -> Result<Vec<u8>, TrackingError>;
}
