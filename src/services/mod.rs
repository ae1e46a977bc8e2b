pub mod calibration;
pub mod server;
