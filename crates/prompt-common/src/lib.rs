//! # prompt-common
//!
//! Shared utilities including configuration, error handling, password hashing, and telemetry.

pub mod config;
pub mod error;
pub mod security;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use config::{
    AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, RateLimitConfig,
    ServerConfig, ViewCounterConfig,
};
pub use error::{AppError, AppResult};
pub use security::{hash_password, validate_password, verify_password, MIN_PASSWORD_LENGTH};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
