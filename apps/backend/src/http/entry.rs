//! Single transport entry point.
//!
//! Every inbound request, regardless of method or path, funnels through this
//! handler into the route table; actix performs no routing of its own.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::http::respond;
use crate::http::router::ApiRequest;
use crate::state::app_state::AppState;

pub async fn entry(req: HttpRequest, body: web::Bytes, state: web::Data<AppState>) -> HttpResponse {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let api_req = ApiRequest {
        method: req.method().clone(),
        target,
        headers: req.headers().clone(),
        body,
    };

    let state = state.into_inner();
    let resp = state.router.dispatch(api_req, state.clone()).await;
    respond::to_http(resp)
}
