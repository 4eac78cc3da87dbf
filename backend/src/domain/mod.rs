//! Domain primitives, ports and services.
//!
//! Purpose: define the user record and its validation rules, the ports that
//! separate HTTP and persistence adapters from the use cases, and the service
//! implementing those use cases. Nothing in here knows about Actix or MongoDB.
//!
//! Public surface:
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `User`, `UserId`, `UserDetails`: the record model.
//! - `UserDirectoryService`: the CRUD use cases over a `UserRepository`.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_directory_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{USER_ID_LEN, User, UserDetails, UserId, UserValidationError};
pub use self::user_directory_service::{
    DEFAULT_OPERATION_TIMEOUT, NO_DOCUMENTS_MESSAGE, USER_NOT_FOUND_MESSAGE, UserDirectoryService,
};
