//! Domain primitives and services for saved-place discovery.
//!
//! Purpose: Define strongly typed domain entities and the saved-places
//! controller used by inbound adapters. Keep types immutable where possible
//! and document invariants and serialisation contracts (serde) in each type's
//! Rustdoc.
//!
//! Public surface:
//! - [`Discovery`] — opaque saved-place record scoped to one user.
//! - [`UserId`] — opaque user identity used to scope discovery queries.
//! - [`SavedPlacesController`] — user-scoped saved-places list, visibility
//!   flag, and best-effort refresh against the discovery backend.
//! - [`ports`] — driven ports for the hexagonal boundary.

pub mod discovery;
pub mod ports;
pub mod saved_places;
pub mod user;

pub use self::discovery::{Discovery, DiscoveryValidationError};
pub use self::saved_places::{
    MirrorCallback, RefreshStatus, SavedPlacesController, SavedPlacesControllerBuilder,
};
pub use self::user::{UserId, UserIdValidationError};
