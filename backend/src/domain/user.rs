//! User data model.
//!
//! A user is a store-assigned identifier plus three required text fields.
//! Validation happens here so adapters never persist a partial record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of bytes in a store-assigned user identifier.
pub const USER_ID_LEN: usize = 12;

/// Validation errors raised while building user values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier is not 24 hexadecimal digits.
    #[error("user id must be a 24-character hexadecimal object id")]
    InvalidId,
    /// `name` is empty once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// `location` is empty once trimmed.
    #[error("location must not be empty")]
    EmptyLocation,
    /// `title` is empty once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Store-assigned user identifier.
///
/// Held as the 12 raw bytes of a document-store object id and rendered as
/// lowercase hexadecimal.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id = UserId::new("65A1F0C2B3D4E5F601234567").expect("valid id");
/// assert_eq!(id.to_string(), "65a1f0c2b3d4e5f601234567");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId([u8; USER_ID_LEN]);

impl UserId {
    /// Parse an identifier from its wire representation.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let mut bytes = [0_u8; USER_ID_LEN];
        hex::decode_to_slice(id.as_ref(), &mut bytes).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(bytes))
    }

    /// Wrap raw identifier bytes produced by the store.
    pub const fn from_bytes(bytes: [u8; USER_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw identifier bytes for store queries.
    pub const fn to_bytes(self) -> [u8; USER_ID_LEN] {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The mutable part of a user: `name`, `location` and `title`.
///
/// ## Invariants
/// - every field is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    name: String,
    location: String,
    title: String,
}

impl UserDetails {
    /// Validate the three required fields.
    ///
    /// Values are kept as supplied; only blankness is checked. The first
    /// blank field, in `name`, `location`, `title` order, is reported.
    ///
    /// # Examples
    /// ```
    /// use users_api::domain::{UserDetails, UserValidationError};
    ///
    /// let details = UserDetails::try_from_parts("Ann", "NYC", "Eng").expect("valid");
    /// assert_eq!(details.name(), "Ann");
    ///
    /// let err = UserDetails::try_from_parts("Ann", " ", "Eng").expect_err("blank location");
    /// assert_eq!(err, UserValidationError::EmptyLocation);
    /// ```
    pub fn try_from_parts(
        name: impl Into<String>,
        location: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = required(name.into(), UserValidationError::EmptyName)?;
        let location = required(location.into(), UserValidationError::EmptyLocation)?;
        let title = required(title.into(), UserValidationError::EmptyTitle)?;
        Ok(Self {
            name,
            location,
            title,
        })
    }

    /// The user's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Where the user is based.
    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    /// The user's job title.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}

fn required(value: String, error: UserValidationError) -> Result<String, UserValidationError> {
    if value.trim().is_empty() {
        return Err(error);
    }
    Ok(value)
}

/// A persisted user.
///
/// Serialises to `{"id", "name", "location", "title"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    details: UserDetails,
}

impl User {
    /// Pair an identifier with validated details.
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Validated text fields.
    pub fn details(&self) -> &UserDetails {
        &self.details
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: UserId,
    name: String,
    location: String,
    title: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, details } = value;
        let UserDetails {
            name,
            location,
            title,
        } = details;
        Self {
            id,
            name,
            location,
            title,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            location,
            title,
        } = value;
        let details = UserDetails::try_from_parts(name, location, title)?;
        Ok(Self::new(id, details))
    }
}
