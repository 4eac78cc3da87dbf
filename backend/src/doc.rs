//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users and health endpoints together with the
//! envelope schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds and `cargo run --bin openapi-dump` prints it for
//! external tooling.

use crate::inbound::http::schemas::{
    InsertedDataSchema, InsertedEnvelopeSchema, InsertedUserSchema, MessageDataSchema,
    MessageEnvelopeSchema, UserDataSchema, UserEnvelopeSchema, UserListDataSchema,
    UserListEnvelopeSchema, UserSchema,
};
use crate::inbound::http::users::UserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "CRUD over user records kept in a document store, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRequest,
        UserSchema,
        InsertedUserSchema,
        UserDataSchema,
        UserEnvelopeSchema,
        UserListDataSchema,
        UserListEnvelopeSchema,
        InsertedDataSchema,
        InsertedEnvelopeSchema,
        MessageDataSchema,
        MessageEnvelopeSchema
    )),
    tags(
        (name = "users", description = "User record operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
