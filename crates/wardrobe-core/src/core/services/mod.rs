pub mod batch_service;
pub mod config_service;
pub mod types;
