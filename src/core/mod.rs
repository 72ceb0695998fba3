pub mod app_data;
pub mod backup;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod export;
pub mod import;
pub mod log;
pub mod stats;
pub mod store;
