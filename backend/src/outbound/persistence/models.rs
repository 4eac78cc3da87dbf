//! BSON document shapes for the user collection.
//!
//! These types are internal to the persistence adapter and never reach the
//! domain layer.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{User, UserDetails, UserId};

/// Stored form of a user.
///
/// `_id` is omitted on insert so the store assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub location: String,
    pub title: String,
}

impl UserDocument {
    /// Document for a fresh insert.
    pub fn for_insert(details: &UserDetails) -> Self {
        Self {
            id: None,
            name: details.name().to_owned(),
            location: details.location().to_owned(),
            title: details.title().to_owned(),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = UserPersistenceError;

    fn try_from(document: UserDocument) -> Result<Self, Self::Error> {
        let UserDocument {
            id,
            name,
            location,
            title,
        } = document;
        let id = id.ok_or_else(|| UserPersistenceError::decode("document has no _id"))?;
        let details = UserDetails::try_from_parts(name, location, title).map_err(|err| {
            UserPersistenceError::decode(format!("document {} is invalid: {err}", id.to_hex()))
        })?;
        Ok(User::new(to_user_id(id), details))
    }
}

pub(crate) fn to_object_id(id: &UserId) -> ObjectId {
    ObjectId::from_bytes(id.to_bytes())
}

pub(crate) fn to_user_id(id: ObjectId) -> UserId {
    UserId::from_bytes(id.bytes())
}
