//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (buffer and backlog > 0)
//! - Check the bind address is an IP address
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.address {0:?} is not an IP address")]
    InvalidAddress(String),

    #[error("listener.read_buffer_bytes must be greater than zero")]
    ZeroReadBuffer,

    #[error("listener.backlog must be greater than zero")]
    ZeroBacklog,

    #[error("observability.log_filter must not be empty")]
    EmptyLogFilter,
}

/// Check a configuration, collecting every error found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let listener = &config.listener;

    if listener.socket_addr().is_err() {
        errors.push(ValidationError::InvalidAddress(listener.address.clone()));
    }
    if listener.read_buffer_bytes == 0 {
        errors.push(ValidationError::ZeroReadBuffer);
    }
    if listener.backlog == 0 {
        errors.push(ValidationError::ZeroBacklog);
    }
    if config.observability.log_filter.trim().is_empty() {
        errors.push(ValidationError::EmptyLogFilter);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
