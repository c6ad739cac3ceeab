pub mod configs;
pub mod series;
