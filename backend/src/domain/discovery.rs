//! Saved discovery model.
//!
//! Purpose: represent a saved place as the discovery backend returns it. The
//! record is opaque to this crate: beyond the identifier, place metadata is
//! carried verbatim as a JSON map and never interpreted.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Validation errors returned by the [`Discovery`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryValidationError {
    /// Returned when the discovery identifier is empty.
    EmptyId,
}

impl fmt::Display for DiscoveryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "discovery id must not be empty"),
        }
    }
}

impl std::error::Error for DiscoveryValidationError {}

/// Opaque saved-place record associated with one user.
///
/// Serialisation contract: the identifier appears as `id`; all remaining
/// place metadata is flattened alongside it, so `{"id": "a", "name": "Well"}`
/// round-trips without loss.
///
/// # Examples
/// ```
/// use backend::domain::Discovery;
///
/// let discovery = Discovery::new("a").expect("valid id");
/// assert_eq!(discovery.id(), "a");
/// assert!(discovery.place().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DiscoveryPayload", into = "DiscoveryPayload")]
pub struct Discovery {
    id: String,
    place: Map<String, Value>,
}

impl Discovery {
    /// Construct a discovery with no place metadata.
    pub fn new(id: impl Into<String>) -> Result<Self, DiscoveryValidationError> {
        Self::with_place(id, Map::new())
    }

    /// Construct a discovery carrying place metadata from the backend.
    pub fn with_place(
        id: impl Into<String>,
        place: Map<String, Value>,
    ) -> Result<Self, DiscoveryValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(DiscoveryValidationError::EmptyId);
        }
        Ok(Self { id, place })
    }

    /// Stable identifier of the saved place.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Opaque place metadata exactly as the backend returned it.
    pub fn place(&self) -> &Map<String, Value> {
        &self.place
    }
}

/// Wire shape backing the [`Discovery`] serde contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiscoveryPayload {
    id: String,
    #[serde(flatten)]
    place: Map<String, Value>,
}

impl TryFrom<DiscoveryPayload> for Discovery {
    type Error = DiscoveryValidationError;

    fn try_from(value: DiscoveryPayload) -> Result<Self, Self::Error> {
        Self::with_place(value.id, value.place)
    }
}

impl From<Discovery> for DiscoveryPayload {
    fn from(value: Discovery) -> Self {
        let Discovery { id, place } = value;
        Self { id, place }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(
            Discovery::new("").expect_err("empty id must fail"),
            DiscoveryValidationError::EmptyId,
        );
    }

    #[test]
    fn metadata_flattens_alongside_the_identifier() {
        let parsed: Discovery = serde_json::from_value(json!({
            "id": "a",
            "name": "Old Town Well",
            "category": "landmark",
        }))
        .expect("payload should parse");

        assert_eq!(parsed.id(), "a");
        assert_eq!(
            parsed.place().get("name"),
            Some(&Value::String("Old Town Well".into())),
        );

        let round_tripped = serde_json::to_value(&parsed).expect("serialise");
        assert_eq!(round_tripped.get("category"), Some(&json!("landmark")));
    }

    #[test]
    fn deserialisation_rejects_empty_identifier() {
        let result: Result<Discovery, _> = serde_json::from_value(json!({ "id": "" }));
        assert!(result.is_err());
    }
}
