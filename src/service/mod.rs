pub mod chart_service_impl;
pub mod series_service_impl;
