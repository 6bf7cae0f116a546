use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod model;
pub mod platform;
pub mod store;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use model::{AdRecord, FundingOrganization, OrganizationRef};
pub use platform::{Funder, Platform, SyncStatus};
pub use store::{OrganizationGroup, PlatformGroup, RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
