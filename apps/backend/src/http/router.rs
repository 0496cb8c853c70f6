//! Exact-match request router with an integrated auth gate.
//!
//! The route table is built once at startup and shared read-only across all
//! request-handling tasks; `dispatch` mutates nothing and is safe to call
//! concurrently without locking.

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::http::header::HeaderMap;
use actix_web::http::{Method, StatusCode};
use bytes::Bytes;
use futures_util::future::BoxFuture;
use serde_json::{json, Value};

use crate::auth::{gate, token};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A registered handler: a plain function reference so the table stays an
/// immutable map of first-class values.
pub type HandlerFn = fn(HandlerCtx) -> BoxFuture<'static, Result<Value, AppError>>;

/// Per-request context threaded through the call chain. Never stored on
/// shared state; dropped when the request completes.
pub struct HandlerCtx {
    pub state: Arc<AppState>,
    /// Caller identity resolved by the auth gate; `None` on public routes
    pub identity: Option<i64>,
    /// Raw request body
    pub body: Bytes,
    /// Raw query string, without the leading `?`
    pub query: Option<String>,
}

#[derive(Clone)]
struct Route {
    handler: HandlerFn,
    auth_required: bool,
}

/// The inbound request as the router sees it: method, the full request
/// target (path + optional query/fragment), headers, and body bytes.
pub struct ApiRequest {
    pub method: Method,
    pub target: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Outcome of a dispatch: a status and an optional JSON body. Converted to
/// the transport response in one place (`http::respond`).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: StatusCode::OK, body: Some(body) }
    }

    /// Empty success, used for the CORS preflight short-circuit.
    pub fn empty() -> Self {
        Self { status: StatusCode::OK, body: None }
    }
}

impl From<AppError> for ApiResponse {
    fn from(e: AppError) -> Self {
        Self {
            status: e.status(),
            body: Some(json!({ "error": e.detail() })),
        }
    }
}

/// Registry of `"METHOD /path"` → handler + auth flag. Exact string match
/// only; no wildcard or prefix routing.
#[derive(Default, Clone)]
pub struct Router {
    routes: HashMap<String, Route>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Re-registering the same (method, path) overwrites
    /// the previous entry: last registration wins.
    pub fn register(&mut self, method: Method, path: &str, handler: HandlerFn, auth_required: bool) {
        self.routes
            .insert(route_key(&method, path), Route { handler, auth_required });
    }

    /// Resolve one request to one response.
    ///
    /// Ordering is fixed: OPTIONS short-circuit → route lookup → auth gate →
    /// handler. Any gate failure returns before the handler is invoked.
    pub async fn dispatch(&self, req: ApiRequest, state: Arc<AppState>) -> ApiResponse {
        // Preflight requests never consult the route table
        if req.method == Method::OPTIONS {
            return ApiResponse::empty();
        }

        let (path, query) = split_target(&req.target);
        let route = match self.routes.get(&route_key(&req.method, path)) {
            Some(route) => route,
            None => return error_response(AppError::not_found("Not found")),
        };

        let identity = if route.auth_required {
            match gate::authenticate(&req.headers, token::unix_now(), &state.security) {
                Ok(uid) => Some(uid),
                Err(e) => return error_response(e),
            }
        } else {
            None
        };

        tracing::debug!(method = %req.method, path, authenticated = identity.is_some(), "dispatch");

        let ctx = HandlerCtx {
            state,
            identity,
            body: req.body,
            query: query.map(str::to_string),
        };

        match (route.handler)(ctx).await {
            Ok(body) => ApiResponse::ok(body),
            Err(e) => error_response(e),
        }
    }
}

fn route_key(method: &Method, path: &str) -> String {
    format!("{method} {path}")
}

/// Split a request target into its path component and raw query string,
/// dropping any fragment. Route lookup keys on the path alone.
fn split_target(target: &str) -> (&str, Option<&str>) {
    let without_fragment = match target.split_once('#') {
        Some((before, _)) => before,
        None => target,
    };
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    }
}

fn error_response(e: AppError) -> ApiResponse {
    if e.status().is_server_error() {
        tracing::error!(error = %e, "request failed");
    } else {
        tracing::debug!(error = %e, "request rejected");
    }
    e.into()
}
