pub mod tracking_error;
