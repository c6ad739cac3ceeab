use crate::common::*;

use crate::error::tracking_error::*;
use crate::model::series::observation_series::*;
use crate::traits::repository_traits::store_repository::*;
use crate::traits::service_traits::series_service::*;
use crate::utils_modules::time_utils::*;

#[doc = "Lifts the raw store document into the typed series and back, on top of whichever store backend was configured"]
#[derive(Debug, Clone, new)]
pub struct SeriesServiceImpl<R: StoreRepository> {
    store_repository: R,
    timezone: FixedOffset,
}

#[async_trait]
impl<R: StoreRepository> SeriesService for SeriesServiceImpl<R> {
    async fn load_series(&self) -> Result<ObservationSeries, TrackingError> {
        let raw_document: String = match self.store_repository.read_document().await {
            Ok(raw_document) => raw_document,
            Err(TrackingError::StoreMissing(location)) => {
                info!(
                    "[SeriesServiceImpl->load_series] store not found yet, starting empty: {}",
                    location
                );
                return Ok(ObservationSeries::default());
            }
            Err(e) => return Err(e),
        };

        let stored: StoredSeries = match serde_json::from_str(&raw_document) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(
                    "[SeriesServiceImpl->load_series] store document is not valid JSON, treating as empty: {:?}",
                    e
                );
                return Ok(ObservationSeries::default());
            }
        };

        match ObservationSeries::from_stored(&stored, self.timezone) {
            Ok(series) => Ok(series),
            Err(e) => {
                warn!(
                    "[SeriesServiceImpl->load_series] store document is corrupt, treating as empty: {:?}",
                    e
                );
                Ok(ObservationSeries::default())
            }
        }
    }

    async fn save_series(&self, series: &ObservationSeries) -> Result<(), TrackingError> {
        let raw_document: String = serde_json::to_string(&series.to_stored())
            .map_err(|e| TrackingError::Persist(format!("failed to serialize series: {:?}", e)))?;

        self.store_repository.write_document(&raw_document).await
    }

    fn current_timestamp(&self) -> DateTime<FixedOffset> {
        get_current_time_in(self.timezone)
    }
}
