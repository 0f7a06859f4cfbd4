//! User identity model.
//!
//! Purpose: represent the opaque user reference that scopes saved-place
//! queries. Identities are issued by the authentication provider and are not
//! interpreted here beyond basic shape validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdValidationError {
    /// Returned when the provided identity is empty.
    EmptyId,
    /// Returned when the identity carries surrounding whitespace.
    PaddedId,
}

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::PaddedId => write!(f, "user id must not contain surrounding whitespace"),
        }
    }
}

impl std::error::Error for UserIdValidationError {}

/// Opaque user identity that scopes saved-place queries.
///
/// Identities are treated as stable strings; the backend issues them and this
/// crate only forwards them. No UUID shape is assumed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserId;
    ///
    /// let user = UserId::new("u1").expect("valid identity");
    /// assert_eq!(user.as_ref(), "u1");
    /// assert!(UserId::new("").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserIdValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, UserIdValidationError> {
        if id.is_empty() {
            return Err(UserIdValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::PaddedId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("u1")]
    #[case("auth0|5f3a9c")]
    #[case("1d8c2f44-9a61-4f27-9d8e-6a3d0c5b7e21")]
    fn accepts_backend_issued_identities(#[case] raw: &str) {
        let user = UserId::new(raw).expect("identity should validate");
        assert_eq!(user.as_ref(), raw);
        assert_eq!(user.to_string(), raw);
    }

    #[rstest]
    #[case("", UserIdValidationError::EmptyId)]
    #[case(" u1", UserIdValidationError::PaddedId)]
    #[case("u1 ", UserIdValidationError::PaddedId)]
    #[case("\tu1", UserIdValidationError::PaddedId)]
    fn rejects_malformed_identities(#[case] raw: &str, #[case] expected: UserIdValidationError) {
        assert_eq!(UserId::new(raw).expect_err("identity must fail"), expected);
    }

    #[test]
    fn serialises_as_plain_string() {
        let user = UserId::new("u1").expect("valid identity");
        let json = serde_json::to_string(&user).expect("serialise");
        assert_eq!(json, "\"u1\"");

        let parsed: UserId = serde_json::from_str("\"u1\"").expect("deserialise");
        assert_eq!(parsed, user);
    }

    #[test]
    fn deserialisation_applies_validation() {
        let result: Result<UserId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
