use crate::common::*;

use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::error::tracking_error::*;
use crate::model::configs::chart_config::*;
use crate::traits::service_traits::chart_service::*;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    chart_config: ChartConfig,
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    fn compute_y_ceiling(&self, max_value: i64) -> i64 {
        (max_value + self.chart_config.y_headroom).max(self.chart_config.y_floor)
    }

    async fn render_line_chart(
        &self,
        x_labels: Vec<String>,
        values: Vec<[i64; 3]>,
        y_ceiling: i64,
    ) -> Result<Vec<u8>, TrackingError> {
        if x_labels.len() != values.len() {
            return Err(TrackingError::Render(format!(
                "[ChartServiceImpl->render_line_chart] X labels and value rows must have the same length: {} vs {}",
                x_labels.len(),
                values.len()
            )));
        }

        if x_labels.is_empty() {
            return Err(TrackingError::Render(
                "[ChartServiceImpl->render_line_chart] Cannot render chart with empty data"
                    .to_string(),
            ));
        }

        let chart_config: ChartConfig = self.chart_config.clone();

        let handle: tokio::task::JoinHandle<Result<Vec<u8>, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let width: u32 = chart_config.width;
                let height: u32 = chart_config.height;

                let mut frame_buf: Vec<u8> =
                    vec![0u8; (width as usize) * (height as usize) * 3];

                {
                    let root =
                        BitMapBackend::with_buffer(&mut frame_buf, (width, height))
                            .into_drawing_area();
                    root.fill(&WHITE)?;

                    /* A single observation still needs a non-degenerate axis. */
                    let x_max: usize = x_labels.len().saturating_sub(1).max(1);

                    let mut chart = ChartBuilder::on(&root)
                        .caption(&chart_config.title, ("sans-serif", 36).into_font())
                        .margin(24)
                        .x_label_area_size(110)
                        .y_label_area_size(70)
                        .build_cartesian_2d(0..x_max, 0i64..y_ceiling)?;

                    chart
                        .configure_mesh()
                        .x_desc(format!("Year {}", Utc::now().year()))
                        .y_desc("Value")
                        .x_labels(x_labels.len())
                        .x_label_style(
                            ("sans-serif", 14)
                                .into_font()
                                .transform(FontTransform::Rotate90),
                        )
                        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
                        .draw()?;

                    let series_colors: [RGBColor; 3] = [BLUE, GREEN, RED];

                    for (series_idx, color) in series_colors.into_iter().enumerate() {
                        let series_points: Vec<(usize, i64)> = values
                            .iter()
                            .enumerate()
                            .map(|(point_idx, triple)| (point_idx, triple[series_idx]))
                            .collect();

                        chart
                            .draw_series(LineSeries::new(
                                series_points.clone(),
                                ShapeStyle::from(&color).stroke_width(2),
                            ))?
                            .label(chart_config.series_labels[series_idx].clone())
                            .legend(move |(x, y)| {
                                PathElement::new(vec![(x, y), (x + 20, y)], color)
                            });

                        chart.draw_series(
                            series_points
                                .iter()
                                .map(|&(x, y)| Circle::new((x, y), 4, color.filled())),
                        )?;
                    }

                    chart
                        .configure_series_labels()
                        .position(SeriesLabelPosition::UpperLeft)
                        .background_style(WHITE.mix(0.8))
                        .border_style(BLACK)
                        .draw()?;

                    root.present()?;
                }

                let image: image::RgbImage = image::RgbImage::from_raw(width, height, frame_buf)
                    .ok_or_else(|| anyhow!("rendered frame buffer has unexpected size"))?;

                let mut png_bytes: Vec<u8> = Vec::new();
                image::DynamicImage::ImageRgb8(image).write_to(
                    &mut std::io::Cursor::new(&mut png_bytes),
                    image::ImageOutputFormat::Png,
                )?;

                Ok(png_bytes)
            });

        let drawing_result: Result<Vec<u8>, anyhow::Error> = handle.await.map_err(|e| {
            TrackingError::Render(format!(
                "[ChartServiceImpl->render_line_chart] blocking task join failed (panic/cancelled): {:?}",
                e
            ))
        })?;

        drawing_result.map_err(|e| {
            TrackingError::Render(format!(
                "[ChartServiceImpl->render_line_chart] drawing/encode failed: {:?}",
                e
            ))
        })
    }
}
