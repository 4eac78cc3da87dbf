//! MongoDB-backed implementation of the `UserRepository` port.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, doc};
use mongodb::error::{Error as DriverError, ErrorKind};
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserId};

use super::MongoGateway;
use super::models::{UserDocument, to_object_id, to_user_id};

/// Default collection holding user documents.
pub const DEFAULT_USER_COLLECTION: &str = "user";

/// User repository over a single MongoDB collection.
#[derive(Clone, Debug)]
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Bind the repository to `collection` within the gateway's database.
    pub fn new(gateway: &MongoGateway, collection: &str) -> Self {
        Self {
            collection: gateway.collection(collection),
        }
    }
}

fn map_driver_error(error: DriverError) -> UserPersistenceError {
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            UserPersistenceError::connection(error.to_string())
        }
        ErrorKind::BsonDeserialization(_) => UserPersistenceError::decode(error.to_string()),
        _ => UserPersistenceError::query(error.to_string()),
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn insert(&self, details: &UserDetails) -> Result<UserId, UserPersistenceError> {
        let result = self
            .collection
            .insert_one(UserDocument::for_insert(details))
            .await
            .map_err(map_driver_error)?;
        match result.inserted_id {
            Bson::ObjectId(id) => {
                debug!(user_id = %id, "user inserted");
                Ok(to_user_id(id))
            }
            other => Err(UserPersistenceError::query(format!(
                "store assigned a non-ObjectId identifier: {other}"
            ))),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        self.collection
            .find_one(doc! { "_id": to_object_id(id) })
            .await
            .map_err(map_driver_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn update(
        &self,
        id: &UserId,
        details: &UserDetails,
    ) -> Result<u64, UserPersistenceError> {
        let update = doc! {
            "$set": {
                "name": details.name(),
                "location": details.location(),
                "title": details.title(),
            }
        };
        let result = self
            .collection
            .update_one(doc! { "_id": to_object_id(id) }, update)
            .await
            .map_err(map_driver_error)?;
        Ok(result.matched_count)
    }

    async fn delete(&self, id: &UserId) -> Result<u64, UserPersistenceError> {
        let result = self
            .collection
            .delete_one(doc! { "_id": to_object_id(id) })
            .await
            .map_err(map_driver_error)?;
        Ok(result.deleted_count)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(map_driver_error)?;
        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await.map_err(map_driver_error)? {
            users.push(User::try_from(document)?);
        }
        Ok(users)
    }
}
