//! Saved-places domain service.
//!
//! This module implements the user-scoped saved-places controller: a list of
//! saved discoveries, a visibility flag for the owning screen, and a
//! best-effort refresh against the discovery backend. Refresh failures are
//! absorbed here so the screen degrades to stale data instead of an error
//! state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use tracing::{debug, warn};

use crate::domain::ports::{DiscoveryService, SavedPlacesEnvelope};
use crate::domain::{Discovery, UserId};

/// Callback mirroring the saved-places list to a parent state owner.
///
/// Invoked exactly once per successful refresh, with the same sequence the
/// controller stored locally.
pub type MirrorCallback = Arc<dyn Fn(&[Discovery]) + Send + Sync>;

/// Outcome of a [`SavedPlacesController::refresh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    /// No refresh has been attempted yet.
    Idle,
    /// No user identity is set; the discovery backend was not called.
    Skipped,
    /// The list was replaced with a fresh snapshot from the backend.
    Applied,
    /// The fetch failed; the previous list was kept.
    Failed,
}

/// User-scoped saved-places list with a visibility flag and best-effort
/// refresh.
///
/// The controller owns its state exclusively and is mutated through
/// `&mut self`, matching the single-owner UI-turn model: refreshes cannot
/// interleave within one instance, and each completed refresh replaces the
/// list wholesale.
///
/// ## Invariants
/// - `places` holds the most recent successful snapshot for the current
///   user, or its prior value when a fetch fails or no user is set. It is
///   never cleared on failure.
/// - `visible` changes only through [`Self::toggle_visibility`]; it is
///   independent of `places`.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// use backend::domain::ports::FixtureDiscoveryService;
/// use backend::domain::{RefreshStatus, SavedPlacesController, UserId};
///
/// # async fn example() {
/// let mut controller = SavedPlacesController::builder(Arc::new(FixtureDiscoveryService))
///     .user(UserId::new("u1").expect("valid identity"))
///     .build();
///
/// let status = controller.refresh().await;
/// assert_eq!(status, RefreshStatus::Applied);
/// assert!(controller.places().is_empty());
/// # }
/// ```
pub struct SavedPlacesController<D> {
    discovery: Arc<D>,
    clock: Arc<dyn Clock>,
    user: Option<UserId>,
    places: Vec<Discovery>,
    visible: bool,
    mirror: Option<MirrorCallback>,
    last_refresh: RefreshStatus,
    refreshed_at: Option<DateTime<Utc>>,
}

impl<D> SavedPlacesController<D> {
    /// Start building a controller around the given discovery service.
    pub fn builder(discovery: Arc<D>) -> SavedPlacesControllerBuilder<D> {
        SavedPlacesControllerBuilder {
            discovery,
            clock: Arc::new(DefaultClock),
            user: None,
            visible: false,
            mirror: None,
        }
    }

    /// Saved discoveries from the most recent successful refresh, in backend
    /// order.
    pub fn places(&self) -> &[Discovery] {
        &self.places
    }

    /// Whether the saved-places list is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Identity the list is scoped to, if one is set.
    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// Outcome of the most recent refresh attempt.
    pub fn last_refresh(&self) -> RefreshStatus {
        self.last_refresh
    }

    /// When the list was last replaced by a successful refresh.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// Flip the visibility flag and return the new value.
    ///
    /// Toggling twice restores the original value; `places` is untouched.
    pub fn toggle_visibility(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Replace the identity the list is scoped to.
    ///
    /// The current list is kept as-is; the next [`Self::refresh`] re-scopes
    /// it to the new identity. Passing `None` turns subsequent refreshes
    /// into no-ops.
    pub fn set_user(&mut self, user: Option<UserId>) {
        self.user = user;
    }
}

impl<D> SavedPlacesController<D>
where
    D: DiscoveryService,
{
    /// Refresh the saved-places list from the discovery backend.
    ///
    /// With no user set this is a no-op and the backend is not called. On
    /// success the list is replaced wholesale (an empty snapshot is valid)
    /// and the mirror callback, if configured, receives the new sequence.
    /// On any failure shape the previous list is kept.
    ///
    /// Errors never escape this method. The discard is deliberate policy:
    /// the screen shows stale data rather than an error state. Callers that
    /// care can inspect the returned [`RefreshStatus`].
    pub async fn refresh(&mut self) -> RefreshStatus {
        let Some(user) = self.user.clone() else {
            self.last_refresh = RefreshStatus::Skipped;
            return RefreshStatus::Skipped;
        };

        let status = match self.discovery.get_saved_places(&user).await {
            Ok(SavedPlacesEnvelope {
                success: true,
                discoveries,
            }) => {
                debug!(user_id = %user, count = discoveries.len(), "saved places refreshed");
                self.places = discoveries;
                self.refreshed_at = Some(self.clock.utc());
                if let Some(mirror) = &self.mirror {
                    mirror(&self.places);
                }
                RefreshStatus::Applied
            }
            Ok(SavedPlacesEnvelope { success: false, .. }) => {
                warn!(user_id = %user, "discovery backend declined the query; keeping previous saved places");
                RefreshStatus::Failed
            }
            Err(error) => {
                warn!(user_id = %user, error = %error, "saved places fetch failed; keeping previous saved places");
                RefreshStatus::Failed
            }
        };
        self.last_refresh = status;
        status
    }
}

impl<D> fmt::Debug for SavedPlacesController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedPlacesController")
            .field("user", &self.user)
            .field("places", &self.places.len())
            .field("visible", &self.visible)
            .field("mirror", &self.mirror.is_some())
            .field("last_refresh", &self.last_refresh)
            .field("refreshed_at", &self.refreshed_at)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SavedPlacesController`].
pub struct SavedPlacesControllerBuilder<D> {
    discovery: Arc<D>,
    clock: Arc<dyn Clock>,
    user: Option<UserId>,
    visible: bool,
    mirror: Option<MirrorCallback>,
}

impl<D> SavedPlacesControllerBuilder<D> {
    /// Scope the list to the given identity from the start.
    pub fn user(mut self, user: UserId) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the initial visibility of the list. Defaults to hidden.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Mirror every successful refresh to a parent state owner.
    pub fn mirror(mut self, mirror: MirrorCallback) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Substitute the clock used for refresh timestamps.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Finish building the controller.
    pub fn build(self) -> SavedPlacesController<D> {
        SavedPlacesController {
            discovery: self.discovery,
            clock: self.clock,
            user: self.user,
            places: Vec::new(),
            visible: self.visible,
            mirror: self.mirror,
            last_refresh: RefreshStatus::Idle,
            refreshed_at: None,
        }
    }
}

impl<D> fmt::Debug for SavedPlacesControllerBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedPlacesControllerBuilder")
            .field("user", &self.user)
            .field("visible", &self.visible)
            .field("mirror", &self.mirror.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "saved_places_tests.rs"]
mod tests;
