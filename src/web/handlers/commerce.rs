//! Commerce handlers: coupons and orders
//!
//! Both collections are paginated by the upstream API, so listings run
//! the table engine in server mode and forward page, limit and search
//! verbatim.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::errors::AppResult;
use crate::models::{CouponCreateRequest, OrderStatusUpdateRequest};
use crate::web::extractors::TableQueryParams;
use crate::web::responses::{created, no_content, ok};
use crate::web::AppState;

use super::server_mode_response;

pub async fn list_coupons(
    State(state): State<AppState>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .coupons
        .refresh(state.client.list_coupons(params.page, params.limit, Some(params.search())))
        .await?;
    server_mode_response(&snapshot.items, snapshot.pagination.as_ref())
}

pub async fn create_coupon(
    State(state): State<AppState>,
    Json(payload): Json<CouponCreateRequest>,
) -> AppResult<Response> {
    let coupon = state.client.create_coupon(&payload).await?;
    state.stores.coupons.upsert(coupon.clone()).await;
    Ok(created(coupon))
}

pub async fn update_coupon(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CouponCreateRequest>,
) -> AppResult<Response> {
    let coupon = state.client.update_coupon(&id, &payload).await?;
    state.stores.coupons.upsert(coupon.clone()).await;
    Ok(ok(coupon))
}

pub async fn delete_coupon(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    state.client.delete_coupon(&id).await?;
    state.stores.coupons.remove(&id).await;
    Ok(no_content())
}

#[derive(Debug, Deserialize)]
pub struct OrderFilter {
    pub status: Option<String>,
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(filter): Query<OrderFilter>,
    params: TableQueryParams,
) -> AppResult<Response> {
    let snapshot = state
        .stores
        .orders
        .refresh(state.client.list_orders(
            params.page,
            params.limit,
            Some(params.search()),
            filter.status.as_deref(),
        ))
        .await?;
    server_mode_response(&snapshot.items, snapshot.pagination.as_ref())
}

pub async fn get_order(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> AppResult<Response> {
    let order = state.client.get_order(&id).await?;
    Ok(ok(order))
}

pub async fn update_order_status(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<OrderStatusUpdateRequest>,
) -> AppResult<Response> {
    let order = state.client.update_order_status(&id, &payload).await?;
    state.stores.orders.upsert(order.clone()).await;
    Ok(ok(order))
}
