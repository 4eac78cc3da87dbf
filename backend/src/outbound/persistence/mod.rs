//! MongoDB persistence adapters.
//!
//! # Architecture
//!
//! - **One client per process**: [`MongoGateway`] is built once at startup
//!   and handed to repositories; nothing reaches for a global connection.
//! - **Thin adapters**: [`MongoUserRepository`] only translates between BSON
//!   documents and domain types. No business logic resides here.
//! - **Internal models**: document structs (`models.rs`) never leave this
//!   module.
//! - **Strongly typed errors**: driver errors are mapped to
//!   `UserPersistenceError` variants.
//!
//! # Example
//!
//! ```no_run
//! use users_api::outbound::persistence::{GatewayConfig, MongoGateway, MongoUserRepository};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = MongoGateway::connect(GatewayConfig::new("mongodb://localhost:27017")).await?;
//! let repository = MongoUserRepository::new(&gateway, "user");
//! # Ok(())
//! # }
//! ```

mod models;
mod mongo_gateway;
mod mongo_user_repository;

pub use mongo_gateway::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_DATABASE, GatewayConfig, GatewayError, MongoGateway,
};
pub use mongo_user_repository::{DEFAULT_USER_COLLECTION, MongoUserRepository};
