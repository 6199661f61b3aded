//! Dispatcher error taxonomy.
//!
//! These cover everything that can go wrong before the runner process is
//! spawned. Argument-level problems (no `--provider`, unknown flags) are
//! reported by clap itself, and a failing runner is not an error at this
//! layer: its exit status is propagated unchanged.

use thiserror::Error;

/// Configuration-time failures, all detected before any process is spawned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The provider name is not one of the known profiles.
    #[error("unknown provider '{0}', expected one of: {known}", known = crate::provider::PROVIDER_NAMES.join(", "))]
    UnknownProvider(String),

    /// One or more required environment variables are unset or empty.
    /// Every missing name is collected so an operator can fix the whole
    /// set in one correction cycle.
    #[error("missing required configuration for provider '{provider}': {vars}", vars = .missing.join(", "))]
    MissingConfiguration {
        provider: &'static str,
        missing: Vec<String>,
    },
}
