//! In-process HTTP harness wiring the full router to an in-memory store.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;
use users_api::Trace;
use users_api::domain::UserDirectoryService;
use users_api::inbound::http::state::HttpState;
use users_api::inbound::http::users;
use users_api::test_support::InMemoryUserRepository;

/// Status and decoded body of one exchange.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
}

impl Reply {
    /// `data.data` of the envelope.
    pub fn payload(&self) -> &Value {
        self.body.pointer("/data/data").unwrap_or(&Value::Null)
    }

    pub fn label(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

/// The users router over `repository`, wrapped in the trace middleware.
pub fn users_app(
    repository: Arc<InMemoryUserRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let directory = UserDirectoryService::new(repository);
    let state = web::Data::new(HttpState::new(Arc::new(directory)));
    App::new()
        .app_data(state)
        .wrap(Trace)
        .configure(users::configure)
}

/// Send `request` and decode the envelope.
pub async fn exchange<S, R, B>(app: &S, request: R) -> Reply
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    assert!(
        response.headers().contains_key("trace-id"),
        "every response carries a trace id"
    );
    let bytes = test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).expect("envelope body");
    Reply { status, body }
}
