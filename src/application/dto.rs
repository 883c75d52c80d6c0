//! Wire shapes built from entities. Each one is a copy taken at construction
//! and holds nothing that could reach back into the store.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::order::{Address, Order, OrderItem, OrderStatus};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
    pub order_items: Vec<OrderItemDto>,
}

impl TryFrom<&Order> for OrderDto {
    type Error = DomainError;

    /// Fails if the order was read without its lines.
    fn try_from(order: &Order) -> Result<Self, Self::Error> {
        let items = order.order_items.as_ref().ok_or_else(|| {
            DomainError::CorruptRecord(format!("order {} was read without its lines", order.id))
        })?;

        Ok(Self {
            order_id: order.id,
            name: order.member.name.clone(),
            order_date: order.order_date,
            order_status: order.status,
            address: order.delivery.address.clone(),
            order_items: items.iter().map(OrderItemDto::from).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub item_name: String,
    pub order_price: i32,
    pub count: i32,
}

impl From<&OrderItem> for OrderItemDto {
    fn from(line: &OrderItem) -> Self {
        Self {
            item_name: line.item.name.clone(),
            order_price: line.order_price,
            count: line.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimpleOrderDto {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub order_status: OrderStatus,
    pub address: Address,
}

impl From<&Order> for SimpleOrderDto {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            name: order.member.name.clone(),
            order_date: order.order_date,
            order_status: order.status,
            address: order.delivery.address.clone(),
        }
    }
}
