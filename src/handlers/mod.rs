pub mod openapi;
pub mod orders;
pub mod simple_orders;

use actix_web::web;

use crate::errors::AppError;

/// Registers every listing endpoint. Expects `OrderApiService` and
/// `OrderSimpleApiService` in the app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/v1/orders", web::get().to(orders::orders_v1))
            .route("/v2/orders", web::get().to(orders::orders_v2))
            .route("/v3/orders", web::get().to(orders::orders_v3))
            .route("/v3.1/orders", web::get().to(orders::orders_v3_page))
            .route("/v4/orders", web::get().to(orders::orders_v4))
            .route("/v5/orders", web::get().to(orders::orders_v5))
            .route("/v6/orders", web::get().to(orders::orders_v6))
            .route("/v1/simple-orders", web::get().to(simple_orders::simple_orders_v1))
            .route("/v2/simple-orders", web::get().to(simple_orders::simple_orders_v2))
            .route("/v3/simple-orders", web::get().to(simple_orders::simple_orders_v3))
            .route("/v4/simple-orders", web::get().to(simple_orders::simple_orders_v4)),
    );
}

/// Reports query-string binding failures as JSON 400s.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
