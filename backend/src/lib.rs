//! Users API library modules.
//!
//! The binary in `main.rs` wires these together: settings, the MongoDB
//! gateway and repository, the user directory service, and the Actix
//! handlers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
