use crate::common::*;

use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use tokio::net::TcpListener;

use crate::dto::update_query::*;
use crate::error::tracking_error::*;
use crate::model::configs::server_config::*;
use crate::model::series::observation_series::*;
use crate::traits::service_traits::{chart_service::*, series_service::*};
use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct MainController<S: SeriesService, C: ChartService> {
    series_service: S,
    chart_service: C,
    window_size: usize,
    max_points: Option<usize>,
}

impl<S, C> MainController<S, C>
where
    S: SeriesService + 'static,
    C: ChartService + 'static,
{
    #[doc = "Builds the HTTP routing table on top of this controller"]
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/update_data", get(Self::update_data))
            .with_state(self)
    }

    #[doc = "Binds the configured address and serves requests until the process is stopped"]
    pub async fn run(self, server_config: &ServerConfig) -> anyhow::Result<()> {
        let bind_addr: String = format!("{}:{}", server_config.host(), server_config.port());
        let listener: TcpListener = TcpListener::bind(&bind_addr).await?;

        info!("Listening on {}", bind_addr);

        axum::serve(listener, Arc::new(self).router()).await?;

        Ok(())
    }

    #[doc = r#"
        `GET /update_data?number1=<int>&number2=<int>&number3=<int>`

        1. Load the persisted series (missing/corrupt store starts empty)
        2. Append the three counters at the current timestamp
        3. Apply the optional retention cap
        4. Compute the value-axis ceiling over the whole series
        5. Persist the series
        6. Render the newest window and stream it back as `image/png`

        Any typed failure surfaces as `500` with a JSON error body.
    "#]
    async fn update_data(
        State(controller): State<Arc<Self>>,
        Query(params): Query<UpdateQuery>,
    ) -> Result<impl IntoResponse, TrackingError> {
        let mut series: ObservationSeries = controller.series_service.load_series().await?;

        series.push(
            controller.series_service.current_timestamp(),
            params.as_triple(),
        );

        if let Some(max_points) = controller.max_points {
            series.prune_to(max_points);
        }

        let y_ceiling: i64 = controller
            .chart_service
            .compute_y_ceiling(series.max_value());

        /* Persisted before rendering; the observation must survive a render failure. */
        controller.series_service.save_series(&series).await?;

        let (window_dates, window_values) = series.last_window(controller.window_size);
        let x_labels: Vec<String> = window_dates
            .iter()
            .map(|date| date.format(AXIS_LABEL_FORMAT).to_string())
            .collect();

        let png_bytes: Vec<u8> = controller
            .chart_service
            .render_line_chart(x_labels, window_values.to_vec(), y_ceiling)
            .await?;

        Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::model::configs::chart_config::*;
    use crate::repository::local_store_repository_impl::*;
    use crate::service::{chart_service_impl::*, series_service_impl::*};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    fn test_chart_config() -> ChartConfig {
        ChartConfig {
            title: "HanBotz".to_string(),
            series_labels: [
                "Pengguna".to_string(),
                "Pesan diterima".to_string(),
                "Perintah digunakan".to_string(),
            ],
            width: 640,
            height: 400,
            window_size: 10,
            y_floor: 4000,
            y_headroom: 150,
        }
    }

    fn build_router(data_path: String) -> Router {
        let timezone: FixedOffset = FixedOffset::east_opt(7 * 3600).unwrap();
        let series_service =
            SeriesServiceImpl::new(LocalStoreRepositoryImpl::new(data_path), timezone);
        let chart_service = ChartServiceImpl::new(test_chart_config());

        Arc::new(MainController::new(series_service, chart_service, 10, None)).router()
    }

    async fn get_response(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    fn stored_series_at(path: &std::path::Path) -> StoredSeries {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn first_call_appends_one_point_and_streams_png() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("data.json");
        let app = build_router(data_path.to_string_lossy().into_owned());

        let response =
            get_response(app, "/update_data?number1=1&number2=2&number3=3").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "image/png"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..8], &PNG_SIGNATURE);

        let stored: StoredSeries = stored_series_at(&data_path);
        assert_eq!(stored.dates.len(), 1);
        assert_eq!(stored.values, vec![[1, 2, 3]]);
    }

    #[tokio::test]
    async fn every_call_grows_the_series_by_one() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("data.json");

        let prior = StoredSeries {
            dates: (0..15).map(|i| format!("26-08-01\n10:{:02}", i)).collect(),
            values: (0..15).map(|i| [i, i, i]).collect(),
        };
        std::fs::write(&data_path, serde_json::to_string(&prior).unwrap()).unwrap();

        let app = build_router(data_path.to_string_lossy().into_owned());
        let response =
            get_response(app, "/update_data?number1=7&number2=8&number3=9").await;

        assert_eq!(response.status(), StatusCode::OK);

        let stored: StoredSeries = stored_series_at(&data_path);
        assert_eq!(stored.dates.len(), 16);
        assert_eq!(stored.values[15], [7, 8, 9]);
    }

    #[tokio::test]
    async fn corrupt_store_is_replaced_by_a_fresh_series() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("data.json");
        std::fs::write(&data_path, "not json at all").unwrap();

        let app = build_router(data_path.to_string_lossy().into_owned());
        let response =
            get_response(app, "/update_data?number1=4&number2=5&number3=6").await;

        assert_eq!(response.status(), StatusCode::OK);

        let stored: StoredSeries = stored_series_at(&data_path);
        assert_eq!(stored.dates.len(), 1);
        assert_eq!(stored.values, vec![[4, 5, 6]]);
    }

    #[tokio::test]
    async fn missing_parameter_is_rejected_by_the_framework() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("data.json");
        let app = build_router(data_path.to_string_lossy().into_owned());

        let response = get_response(app, "/update_data?number1=1&number2=2").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!data_path.exists());
    }
}
