//! Driven port for the discovery backend.
//!
//! The [`DiscoveryService`] trait defines the contract for reading a user's
//! saved places. Adapters implement it against the real discovery backend;
//! unit tests substitute mocks or the fixture implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Discovery, UserId};

/// Errors raised by discovery service adapters.
///
/// The saved-places controller treats every variant identically (a failed
/// fetch), so the split exists for adapter diagnostics, not for control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryServiceError {
    /// Transport to the discovery backend could not be established.
    #[error("discovery service connection failed: {message}")]
    Connection {
        /// Adapter-supplied diagnostic detail.
        message: String,
    },
    /// The backend was reached but failed to execute the query.
    #[error("discovery service query failed: {message}")]
    Backend {
        /// Adapter-supplied diagnostic detail.
        message: String,
    },
    /// The backend answered with a payload the adapter could not decode.
    #[error("discovery service returned a malformed response: {message}")]
    MalformedResponse {
        /// Adapter-supplied diagnostic detail.
        message: String,
    },
}

impl DiscoveryServiceError {
    /// Construct a [`DiscoveryServiceError::Connection`] error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Construct a [`DiscoveryServiceError::Backend`] error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Construct a [`DiscoveryServiceError::MalformedResponse`] error.
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }
}

/// Response envelope returned by [`DiscoveryService::get_saved_places`].
///
/// The backend signals application-level failure in-band via `success`;
/// transport-level failure arrives as [`DiscoveryServiceError`] instead.
/// Consumers must treat both shapes the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlacesEnvelope {
    /// Whether the backend executed the query.
    pub success: bool,
    /// Saved discoveries in backend order; empty when `success` is false.
    #[serde(default)]
    pub discoveries: Vec<Discovery>,
}

impl SavedPlacesEnvelope {
    /// Envelope for a successful query.
    pub fn ok(discoveries: Vec<Discovery>) -> Self {
        Self {
            success: true,
            discoveries,
        }
    }

    /// Envelope for a backend-declared failure.
    pub fn failed() -> Self {
        Self {
            success: false,
            discoveries: Vec::new(),
        }
    }
}

/// Port for reading a user's saved places from the discovery backend.
///
/// # Examples
///
/// ```rust,no_run
/// # async fn example() -> Result<(), backend::domain::ports::DiscoveryServiceError> {
/// use backend::domain::UserId;
/// use backend::domain::ports::{DiscoveryService, FixtureDiscoveryService};
///
/// let service = FixtureDiscoveryService;
/// let user = UserId::new("u1").expect("valid identity");
/// let envelope = service.get_saved_places(&user).await?;
/// assert!(envelope.success);
/// assert!(envelope.discoveries.is_empty());
/// # Ok(())
/// # }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscoveryService: Send + Sync {
    /// Fetch the full saved-places collection for one user.
    ///
    /// Ordering is meaningful: callers store the sequence exactly as
    /// returned.
    async fn get_saved_places(
        &self,
        user_id: &UserId,
    ) -> Result<SavedPlacesEnvelope, DiscoveryServiceError>;
}

/// Fixture implementation for testing without a real backend.
///
/// Always reports a successful, empty saved-places collection. Use it in
/// tests where discovery behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDiscoveryService;

#[async_trait]
impl DiscoveryService for FixtureDiscoveryService {
    async fn get_saved_places(
        &self,
        _user_id: &UserId,
    ) -> Result<SavedPlacesEnvelope, DiscoveryServiceError> {
        Ok(SavedPlacesEnvelope::ok(Vec::new()))
    }
}
