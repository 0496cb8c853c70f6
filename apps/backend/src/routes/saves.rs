use std::collections::HashMap;

use actix_web::web;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::http::router::HandlerCtx;
use crate::repos::store::SaveInput;

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub level: i32,
    #[serde(rename = "asciiMap")]
    pub ascii_map: String,
    #[serde(rename = "heroPosition")]
    pub hero_position: HeroPosition,
}

#[derive(Debug, Deserialize)]
pub struct HeroPosition {
    #[serde(rename = "positionTileX")]
    pub position_tile_x: i32,
    #[serde(rename = "positionTileY")]
    pub position_tile_y: i32,
}

#[derive(Debug, Serialize)]
pub struct SaveDetailResponse {
    pub id: i64,
    pub map_level: i32,
    pub ascii_map: String,
    #[serde(rename = "char")]
    pub char_sheet: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub updated: OffsetDateTime,
    #[serde(rename = "positionTileX")]
    pub position_tile_x: i32,
    #[serde(rename = "positionTileY")]
    pub position_tile_y: i32,
}

pub fn save(ctx: HandlerCtx) -> BoxFuture<'static, Result<Value, AppError>> {
    Box::pin(handle_save(ctx))
}

pub fn load_list(ctx: HandlerCtx) -> BoxFuture<'static, Result<Value, AppError>> {
    Box::pin(handle_load_list(ctx))
}

pub fn load_data_by_id(ctx: HandlerCtx) -> BoxFuture<'static, Result<Value, AppError>> {
    Box::pin(handle_load_data_by_id(ctx))
}

async fn handle_save(ctx: HandlerCtx) -> Result<Value, AppError> {
    let req: SaveRequest =
        serde_json::from_slice(&ctx.body).map_err(|_| AppError::bad_request("invalid input"))?;
    let uid = caller(&ctx)?;

    // TODO: persist the hero sheet once the client starts sending a `char` field
    let save = SaveInput {
        level: req.level,
        ascii_map: req.ascii_map,
        char_json: "[]".to_string(),
        position_tile_x: req.hero_position.position_tile_x,
        position_tile_y: req.hero_position.position_tile_y,
    };

    ctx.state.store()?.upsert_save(uid, save).await?;
    Ok(json!({ "ok": true }))
}

async fn handle_load_list(ctx: HandlerCtx) -> Result<Value, AppError> {
    let uid = caller(&ctx)?;
    let saves = ctx.state.store()?.list_recent_saves(uid).await?;

    // An empty list reads as "nothing saved yet"
    if saves.is_empty() {
        return Err(AppError::not_found("no data"));
    }

    Ok(serde_json::to_value(saves)?)
}

async fn handle_load_data_by_id(ctx: HandlerCtx) -> Result<Value, AppError> {
    let id = parse_id(ctx.query.as_deref())?;
    let uid = caller(&ctx)?;

    let save = ctx
        .state
        .store()?
        .get_save_by_id(uid, id)
        .await?
        .ok_or_else(|| AppError::not_found("no data"))?;

    let response = SaveDetailResponse {
        id: save.id,
        map_level: save.map_level,
        ascii_map: save.ascii_map,
        char_sheet: serde_json::from_str(&save.char_json).unwrap_or(Value::Null),
        updated: save.updated,
        position_tile_x: save.position_tile_x,
        position_tile_y: save.position_tile_y,
    };
    Ok(serde_json::to_value(response)?)
}

/// The gate runs before any of these handlers, so a missing identity is a
/// wiring bug, not a client error.
fn caller(ctx: &HandlerCtx) -> Result<i64, AppError> {
    ctx.identity
        .ok_or_else(|| AppError::internal("caller identity missing on protected route"))
}

fn parse_id(query: Option<&str>) -> Result<i64, AppError> {
    let id = query
        .and_then(|q| web::Query::<HashMap<String, String>>::from_query(q).ok())
        .and_then(|params| params.get("id").cloned())
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0);

    if id <= 0 {
        return Err(AppError::bad_request("bad id"));
    }
    Ok(id)
}
