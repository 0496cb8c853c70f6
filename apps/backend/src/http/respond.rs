//! Conversion of router outcomes into transport responses.
//!
//! Every response (success, error, preflight) carries a JSON content type
//! and permissive CORS headers, matching what browser clients expect from
//! this API.

use actix_web::http::header;
use actix_web::HttpResponse;

use crate::http::router::ApiResponse;

pub fn to_http(resp: ApiResponse) -> HttpResponse {
    let mut builder = HttpResponse::build(resp.status);
    builder
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"))
        .insert_header(header::ContentType::json());

    match resp.body {
        Some(body) => builder.json(body),
        None => builder.finish(),
    }
}
