//! Opt-in access to a live MongoDB deployment.
//!
//! Suites that need a real server read `USERS_API_TEST_MONGO_URI`. When it is
//! unset they print a skip marker and return early, so the default test run
//! needs no database.

use users_api::outbound::persistence::{GatewayConfig, MongoGateway};
use uuid::Uuid;

/// Environment variable naming the test deployment.
pub const TEST_MONGO_URI_ENV: &str = "USERS_API_TEST_MONGO_URI";

/// Connect to the test deployment, or `None` when none is configured.
///
/// Each call selects a fresh database so suites never share state.
pub async fn connect_or_skip(suite: &str) -> Option<MongoGateway> {
    let Ok(uri) = std::env::var(TEST_MONGO_URI_ENV) else {
        eprintln!("SKIP-MONGO: {TEST_MONGO_URI_ENV} unset; skipping {suite}");
        return None;
    };
    let database = format!("users_api_test_{}", Uuid::new_v4().simple());
    let gateway = MongoGateway::connect(GatewayConfig::new(uri).with_database(database))
        .await
        .unwrap_or_else(|err| panic!("{TEST_MONGO_URI_ENV} is set but unusable: {err}"));
    Some(gateway)
}
