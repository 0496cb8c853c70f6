use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::token;
use crate::error::AppError;
use crate::http::router::HandlerCtx;

#[derive(Debug, Default, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
}

pub fn auth(ctx: HandlerCtx) -> BoxFuture<'static, Result<Value, AppError>> {
    Box::pin(handle_auth(ctx))
}

/// Create-or-verify: an unknown username registers a new account, a known
/// one must present the matching password. Either way the response is a
/// freshly issued token.
async fn handle_auth(ctx: HandlerCtx) -> Result<Value, AppError> {
    // Malformed JSON degrades to empty fields, which fail the length check
    let req: AuthRequest = serde_json::from_slice(&ctx.body).unwrap_or_default();

    if req.username.len() < 3 || req.password.len() < 3 {
        return Err(AppError::bad_request("invalid input"));
    }

    let store = ctx.state.store()?;
    let uid = match store.find_user_by_name(&req.username).await? {
        Some(_) => store
            .verify_password(&req.username, &req.password)
            .await?
            .ok_or_else(|| AppError::auth_failed("bad password"))?,
        None => store.create_user(&req.username, &req.password).await?,
    };

    tracing::info!(uid, "issued token");

    let token = token::issue(uid, token::unix_now(), &ctx.state.security)?;
    Ok(serde_json::to_value(AuthResponse { token })?)
}
