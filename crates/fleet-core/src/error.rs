//! Error types for the fleet console core.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    /// Acknowledge was called with an id the store has never seen.
    #[error("alert not found: {0}")]
    AlertNotFound(String),
    /// Zone failed validation at creation time.
    #[error("invalid zone: {0}")]
    InvalidZone(String),
}
