//! Projection shapes read straight from the store, bypassing entity
//! materialization.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::order::{Address, OrderStatus};

/// Order header plus its lines, as served by the projection endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderQueryDto {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
    pub order_items: Vec<OrderItemQueryDto>,
}

impl OrderQueryDto {
    /// A header with no lines attached yet.
    pub fn header(key: OrderKey) -> Self {
        Self {
            order_id: key.order_id,
            name: key.name,
            order_date: key.order_date,
            order_status: key.order_status,
            address: key.address,
            order_items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemQueryDto {
    #[serde(skip)]
    pub order_id: i64,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

/// One row of the flat order × order-item join.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFlatDto {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

impl OrderFlatDto {
    /// Splits the row into its order-header key and its line.
    pub fn into_parts(self) -> (OrderKey, OrderItemQueryDto) {
        let item = OrderItemQueryDto {
            order_id: self.order_id,
            item_name: self.item_name,
            order_price: self.order_price,
            count: self.count,
        };
        let key = OrderKey {
            order_id: self.order_id,
            name: self.name,
            order_date: self.order_date,
            order_status: self.order_status,
            address: self.address,
        };
        (key, item)
    }
}

/// Composite identity of an order header in the flat join. Two rows belong to
/// the same order only when every field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderKey {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
}

/// Narrow projection for the simplified listing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSimpleQueryDto {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
}
