//! OpenAPI schema definitions for envelope and domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror the serialised shape of each response so the
//! generated document matches what clients receive.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// 24-character hexadecimal identifier.
    #[schema(example = "65a1f0c2b3d4e5f601234567")]
    id: String,
    #[schema(example = "Ann")]
    name: String,
    #[schema(example = "NYC")]
    location: String,
    #[schema(example = "Eng")]
    title: String,
}

/// Payload of the create response.
#[derive(ToSchema)]
#[schema(as = crate::inbound::http::users::InsertedUser)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct InsertedUserSchema {
    #[schema(rename = "InsertedID", example = "65a1f0c2b3d4e5f601234567")]
    inserted_id: String,
}

macro_rules! envelope_schema {
    ($(#[$meta:meta])* $name:ident, $data:ident, $payload:ty) => {
        #[derive(ToSchema)]
        #[expect(
            dead_code,
            reason = "Used only for OpenAPI schema generation via utoipa"
        )]
        #[doc = concat!("Inner `data` wrapper of [`", stringify!($name), "`].")]
        pub struct $data {
            data: $payload,
        }

        $(#[$meta])*
        #[derive(ToSchema)]
        #[expect(
            dead_code,
            reason = "Used only for OpenAPI schema generation via utoipa"
        )]
        pub struct $name {
            /// HTTP status code repeated in the body.
            #[schema(example = 200)]
            status: u16,
            /// `success`, `Success` or `error`.
            #[schema(example = "success")]
            message: String,
            data: $data,
        }
    };
}

envelope_schema!(
    /// Envelope carrying a single user.
    UserEnvelopeSchema,
    UserDataSchema,
    UserSchema
);
envelope_schema!(
    /// Envelope carrying every user.
    UserListEnvelopeSchema,
    UserListDataSchema,
    Vec<UserSchema>
);
envelope_schema!(
    /// Envelope carrying the identifier of a created user.
    InsertedEnvelopeSchema,
    InsertedDataSchema,
    InsertedUserSchema
);
envelope_schema!(
    /// Envelope carrying a description string, used by errors and deletes.
    MessageEnvelopeSchema,
    MessageDataSchema,
    String
);
