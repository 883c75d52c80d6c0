use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::application::dto::OrderDto;
use crate::application::order_service::OrderApiService;
use crate::domain::order::Order;
use crate::domain::query::OrderQueryDto;
use crate::domain::search::{OrderSearch, Page};
use crate::errors::AppError;

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Index of the first order to return. Defaults to 0.
    #[serde(default)]
    pub offset: u32,
    /// Maximum number of orders to return. Defaults to 100.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /api/v1/orders
///
/// Order entities with buyer, delivery and lines resolved one lookup at a
/// time.
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(OrderSearch),
    responses(
        (status = 200, description = "Order entities", body = [Order]),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v1(
    service: web::Data<OrderApiService>,
    query: web::Query<OrderSearch>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner();

    let orders = web::block(move || service.orders_v1(&search))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/v2/orders
///
/// Same reads as v1, mapped to `OrderDto`.
#[utoipa::path(
    get,
    path = "/api/v2/orders",
    params(OrderSearch),
    responses(
        (status = 200, description = "Orders", body = [OrderDto]),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v2(
    service: web::Data<OrderApiService>,
    query: web::Query<OrderSearch>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner();

    let orders = web::block(move || service.orders_v2(&search))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/v3/orders
///
/// Single fetch join over every relation. Not pageable.
#[utoipa::path(
    get,
    path = "/api/v3/orders",
    responses(
        (status = 200, description = "Orders", body = [OrderDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v3(service: web::Data<OrderApiService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.orders_v3())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/v3.1/orders
///
/// Buyer and delivery joined, paged by order; lines loaded in batches.
#[utoipa::path(
    get,
    path = "/api/v3.1/orders",
    params(PageParams),
    responses(
        (status = 200, description = "One page of orders", body = [OrderDto]),
        (status = 400, description = "Malformed offset or limit"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v3_page(
    service: web::Data<OrderApiService>,
    query: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let page = Page::new(params.offset, params.limit);

    let orders = web::block(move || service.orders_v3_page(page))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/v4/orders
#[utoipa::path(
    get,
    path = "/api/v4/orders",
    responses(
        (status = 200, description = "Projected orders, lines read per order", body = [OrderQueryDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v4(service: web::Data<OrderApiService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.orders_v4())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/v5/orders
#[utoipa::path(
    get,
    path = "/api/v5/orders",
    responses(
        (status = 200, description = "Projected orders, lines read in one query", body = [OrderQueryDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v5(service: web::Data<OrderApiService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.orders_v5())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

/// GET /api/v6/orders
///
/// One flat order × line join, regrouped per order.
#[utoipa::path(
    get,
    path = "/api/v6/orders",
    responses(
        (status = 200, description = "Projected orders from a flat join", body = [OrderQueryDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn orders_v6(service: web::Data<OrderApiService>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.orders_v6())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}
