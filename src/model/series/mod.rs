pub mod observation_series;
