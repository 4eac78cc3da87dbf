//! Users API handlers.
//!
//! ```text
//! POST   /user            {"name":"Ann","location":"NYC","title":"Eng"}
//! GET    /user/{userId}
//! PUT    /user/{userId}   {"name":"Ann","location":"LDN","title":"Eng"}
//! DELETE /user/{userId}
//! GET    /users
//! ```
//!
//! Every response, including failures, is an [`Envelope`].

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::UpdateOutcome;
use crate::domain::{User, UserDetails, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{
    InsertedEnvelopeSchema, MessageEnvelopeSchema, UserEnvelopeSchema, UserListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_user_id, user_details};

/// Confirmation returned by a successful delete.
pub const USER_DELETED_MESSAGE: &str = "User successfully deleted!";

/// Request body for `POST /user` and `PUT /user/{userId}`.
///
/// Example JSON:
/// `{"name":"Ann","location":"NYC","title":"Eng"}`
///
/// Only JSON objects are accepted; each field must be a string or absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(try_from = "RequestObject")]
pub struct UserRequest {
    /// Required, non-blank.
    #[schema(example = "Ann")]
    pub name: Option<String>,
    /// Required, non-blank.
    #[schema(example = "NYC")]
    pub location: Option<String>,
    /// Required, non-blank.
    #[schema(example = "Eng")]
    pub title: Option<String>,
}

type RequestObject = serde_json::Map<String, serde_json::Value>;

fn string_field(object: &mut RequestObject, field: &str) -> Result<Option<String>, String> {
    match object.remove(field) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(format!(
            "invalid type for field `{field}`: expected a string, found {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl TryFrom<RequestObject> for UserRequest {
    type Error = String;

    fn try_from(mut object: RequestObject) -> Result<Self, Self::Error> {
        Ok(Self {
            name: string_field(&mut object, "name")?,
            location: string_field(&mut object, "location")?,
            title: string_field(&mut object, "title")?,
        })
    }
}

impl UserRequest {
    fn into_details(self) -> ApiResult<UserDetails> {
        let Self {
            name,
            location,
            title,
        } = self;
        user_details(name, location, title)
    }
}

/// Payload of the create response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedUser {
    /// Store-assigned identifier of the new record.
    #[serde(rename = "InsertedID")]
    pub inserted_id: UserId,
}

/// Empty record returned when an update matched nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmptyRecord {}

/// Payload of the update response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UpdatedUser {
    /// The record as stored after the update.
    Record(User),
    /// No record matched; serialised as `{}`.
    Empty(EmptyRecord),
}

impl From<UpdateOutcome> for UpdatedUser {
    fn from(value: UpdateOutcome) -> Self {
        match value {
            UpdateOutcome::Updated(user) => Self::Record(user),
            UpdateOutcome::NoMatch => Self::Empty(EmptyRecord {}),
        }
    }
}

/// JSON extractor settings answering body errors with an error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = Envelope::error(StatusCode::BAD_REQUEST, err.to_string()).into_response();
        InternalError::from_response(err, response).into()
    })
}

/// Register the user routes and their JSON settings.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(list_users);
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = InsertedEnvelopeSchema),
        (status = 400, description = "Validation or insert failure", body = MessageEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<Envelope<InsertedUser>> {
    let details = payload.into_inner().into_details()?;
    let inserted_id = state.users.create(details).await?;
    Ok(Envelope::created(InsertedUser { inserted_id }))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/user/{userId}",
    params(("userId" = String, Path, description = "24-character hexadecimal user id")),
    responses(
        (status = 200, description = "User", body = UserEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = MessageEnvelopeSchema),
        (status = 500, description = "Not found or store failure", body = MessageEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{userId}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<Envelope<User>> {
    let id = parse_user_id(&path.into_inner())?;
    let user = state.users.get(&id).await?;
    Ok(Envelope::ok(user))
}

/// Overwrite a user's fields.
#[utoipa::path(
    put,
    path = "/user/{userId}",
    params(("userId" = String, Path, description = "24-character hexadecimal user id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user, or {} when nothing matched", body = UserEnvelopeSchema),
        (status = 400, description = "Validation failure or malformed identifier", body = MessageEnvelopeSchema),
        (status = 500, description = "Store failure", body = MessageEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{userId}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<Envelope<UpdatedUser>> {
    let id = parse_user_id(&path.into_inner())?;
    let details = payload.into_inner().into_details()?;
    let outcome = state.users.update(&id, details).await?;
    Ok(Envelope::ok(outcome.into()))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/user/{userId}",
    params(("userId" = String, Path, description = "24-character hexadecimal user id")),
    responses(
        (status = 200, description = "User deleted", body = MessageEnvelopeSchema),
        (status = 400, description = "Malformed identifier", body = MessageEnvelopeSchema),
        (status = 404, description = "No such user", body = MessageEnvelopeSchema),
        (status = 500, description = "Store failure", body = MessageEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{userId}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<Envelope<String>> {
    let id = parse_user_id(&path.into_inner())?;
    state.users.delete(&id).await?;
    Ok(Envelope::ok(USER_DELETED_MESSAGE.to_owned()))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users in store order", body = UserListEnvelopeSchema),
        (status = 500, description = "Store failure", body = MessageEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<Envelope<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Envelope::ok(users))
}

#[cfg(test)]
mod tests;
