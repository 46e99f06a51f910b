#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod validation_service;

pub use app_services::AppServices;
pub use config::{AppConfig, Timings};
pub use error::{AppServicesError, ConfigError, ValidationError};
pub use validation_service::ValidationService;
