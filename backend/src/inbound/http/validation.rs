//! Request validation helpers for the users endpoints.
//!
//! Every failure becomes an `invalid_request` domain error before any
//! persistence call is made.

use crate::domain::{Error, UserDetails, UserId, UserValidationError};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const LOCATION: FieldName = FieldName::new("location");
pub(crate) const TITLE: FieldName = FieldName::new("title");
pub(crate) const USER_ID: FieldName = FieldName::new("userId");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("missing required field: {}", field.as_str()))
}

pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn invalid_user(err: UserValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

/// Parse the `userId` path segment.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| {
        Error::invalid_request(format!(
            "{} must be a 24-character hexadecimal object id: {raw}",
            USER_ID.as_str()
        ))
    })
}

/// Validate the three optional request fields into [`UserDetails`].
pub(crate) fn user_details(
    name: Option<String>,
    location: Option<String>,
    title: Option<String>,
) -> Result<UserDetails, Error> {
    let name = require(name, NAME)?;
    let location = require(location, LOCATION)?;
    let title = require(title, TITLE)?;
    UserDetails::try_from_parts(name, location, title).map_err(invalid_user)
}
