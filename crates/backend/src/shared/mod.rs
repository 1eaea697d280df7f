pub mod config;
pub mod data;
pub mod request_logger;
