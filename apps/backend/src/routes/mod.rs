use actix_web::http::Method;

use crate::http::router::Router;

pub mod auth;
pub mod saves;

/// Build the process-wide route table. Populated once at startup and
/// read-only for the process lifetime.
pub fn build_router() -> Router {
    let mut router = Router::new();
    router.register(Method::POST, "/api/auth", auth::auth, false);
    router.register(Method::POST, "/api/save", saves::save, true);
    router.register(Method::GET, "/api/loadList", saves::load_list, true);
    router.register(Method::GET, "/api/loadDataById", saves::load_data_by_id, true);
    router
}
