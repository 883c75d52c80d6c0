use actix_web::{web, HttpResponse};

use crate::application::dto::SimpleOrderDto;
use crate::application::simple_order_service::OrderSimpleApiService;
use crate::domain::order::Order;
use crate::domain::query::OrderSimpleQueryDto;
use crate::domain::search::OrderSearch;
use crate::errors::AppError;

/// GET /api/v1/simple-orders
///
/// Order entities with buyer and delivery resolved; lines are omitted.
#[utoipa::path(
    get,
    path = "/api/v1/simple-orders",
    params(OrderSearch),
    responses(
        (status = 200, description = "Order entities without lines", body = [Order]),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "simple-orders"
)]
pub async fn simple_orders_v1(
    service: web::Data<OrderSimpleApiService>,
    query: web::Query<OrderSearch>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner();

    let orders = web::block(move || service.orders_v1(&search))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

#[utoipa::path(
    get,
    path = "/api/v2/simple-orders",
    params(OrderSearch),
    responses(
        (status = 200, description = "Order headers", body = [SimpleOrderDto]),
        (status = 400, description = "Malformed query parameter"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "simple-orders"
)]
pub async fn simple_orders_v2(
    service: web::Data<OrderSimpleApiService>,
    query: web::Query<OrderSearch>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner();

    let orders = web::block(move || service.orders_v2(&search))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

#[utoipa::path(
    get,
    path = "/api/v3/simple-orders",
    responses(
        (status = 200, description = "Order headers from a fetch join", body = [SimpleOrderDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "simple-orders"
)]
pub async fn simple_orders_v3(
    service: web::Data<OrderSimpleApiService>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.orders_v3())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}

#[utoipa::path(
    get,
    path = "/api/v4/simple-orders",
    responses(
        (status = 200, description = "Narrow order projection", body = [OrderSimpleQueryDto]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "simple-orders"
)]
pub async fn simple_orders_v4(
    service: web::Data<OrderSimpleApiService>,
) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || service.orders_v4())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(orders))
}
