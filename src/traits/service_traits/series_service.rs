use crate::common::*;

use crate::error::tracking_error::*;
use crate::model::series::observation_series::*;

#[async_trait]
pub trait SeriesService: Send + Sync {
    #[doc = "Loads the current series. A missing or corrupt store degrades to an empty series; I/O and remote API failures surface as errors."]
    async fn load_series(&self) -> Result<ObservationSeries, TrackingError>;

    #[doc = "Persists the whole series, timestamps serialized in the stored string pattern"]
    async fn save_series(&self, series: &ObservationSeries) -> Result<(), TrackingError>;

    #[doc = "Now, in the configured fixed-offset timezone"]
    fn current_timestamp(&self) -> DateTime<FixedOffset>;
}
