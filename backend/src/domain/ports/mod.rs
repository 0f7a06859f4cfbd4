//! Domain ports and supporting types for the hexagonal boundary.

mod discovery_service;

#[cfg(test)]
pub use discovery_service::MockDiscoveryService;
pub use discovery_service::{
    DiscoveryService, DiscoveryServiceError, FixtureDiscoveryService, SavedPlacesEnvelope,
};
