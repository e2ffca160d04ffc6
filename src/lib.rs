pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod service;
pub mod source;

pub use api::{router, AppState};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use service::{aggregate, DashboardService, PhotoProber, ReturnsClient};
