use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::http::entry::entry;
use backend::state::app_state::AppState;

/// Build a test service with the same single-entry wiring `main.rs` uses:
/// every request funnels through the crate's own dispatcher.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let data = web::Data::new(state);
    test::init_service(App::new().app_data(data).default_service(web::route().to(entry))).await
}
