use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::{deliveries, items, members, order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MemberRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = members)]
pub struct NewMemberRow {
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = deliveries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeliveryRow {
    pub id: i64,
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = deliveries)]
pub struct NewDeliveryRow {
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = items)]
pub struct NewItemRow {
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub member_id: i64,
    pub delivery_id: i64,
    pub order_date: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub member_id: i64,
    pub delivery_id: i64,
    pub order_date: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub item_id: i64,
    pub order_price: i32,
    pub quantity: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub order_id: i64,
    pub item_id: i64,
    pub order_price: i32,
    pub quantity: i32,
}

// ── Projections ──────────────────────────────────────────────────────────────

/// `(orders.id, members.name, orders.order_date, orders.status,
/// deliveries.city, deliveries.street, deliveries.zipcode)`
#[derive(Debug, Queryable)]
pub struct OrderHeaderRow {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub city: String,
    pub street: String,
    pub zipcode: String,
}

/// `(order_items.order_id, items.name, order_items.order_price,
/// order_items.quantity)`
#[derive(Debug, Queryable)]
pub struct OrderLineRow {
    pub order_id: i64,
    pub item_name: String,
    pub order_price: i32,
    pub quantity: i32,
}

/// Header columns followed by line columns.
#[derive(Debug, Queryable)]
pub struct OrderFlatRow {
    pub order_id: i64,
    pub name: String,
    pub order_date: NaiveDateTime,
    pub status: String,
    pub city: String,
    pub street: String,
    pub zipcode: String,
    pub item_name: String,
    pub order_price: i32,
    pub quantity: i32,
}
