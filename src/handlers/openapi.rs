use utoipa::OpenApi;

use super::{orders, simple_orders};
use crate::application::dto::{OrderDto, OrderItemDto, SimpleOrderDto};
use crate::domain::order::{Address, Delivery, Item, Member, Order, OrderItem, OrderStatus};
use crate::domain::query::{OrderItemQueryDto, OrderQueryDto, OrderSimpleQueryDto};

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Catalog API",
        version = "0.1.0",
        description = "Read-only order listings served through alternative retrieval strategies."
    ),
    paths(
        orders::orders_v1,
        orders::orders_v2,
        orders::orders_v3,
        orders::orders_v3_page,
        orders::orders_v4,
        orders::orders_v5,
        orders::orders_v6,
        simple_orders::simple_orders_v1,
        simple_orders::simple_orders_v2,
        simple_orders::simple_orders_v3,
        simple_orders::simple_orders_v4,
    ),
    components(schemas(
        Address,
        Member,
        Delivery,
        Item,
        OrderItem,
        Order,
        OrderStatus,
        OrderDto,
        OrderItemDto,
        SimpleOrderDto,
        OrderQueryDto,
        OrderItemQueryDto,
        OrderSimpleQueryDto,
    )),
    tags(
        (name = "orders", description = "Orders with their lines"),
        (name = "simple-orders", description = "Order headers without lines"),
    )
)]
pub struct ApiDoc;
