//! Sample catalog used for local runs and database-backed tests.

use chrono::Local;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::OrderStatus;
use crate::schema::{deliveries, items, members, order_items, orders};

use super::models::{NewDeliveryRow, NewItemRow, NewMemberRow, NewOrderItemRow, NewOrderRow};

pub struct SampleOrder {
    pub buyer: &'static str,
    pub city: &'static str,
    pub street: &'static str,
    pub zipcode: &'static str,
    /// `(item name, order price, count)`
    pub lines: &'static [(&'static str, i32, i32)],
}

pub const SAMPLE_ORDERS: [SampleOrder; 2] = [
    SampleOrder {
        buyer: "userA",
        city: "Seoul",
        street: "1",
        zipcode: "1111",
        lines: &[("JPA1 BOOK", 10000, 1), ("JPA2 BOOK", 20000, 2)],
    },
    SampleOrder {
        buyer: "userB",
        city: "Busan",
        street: "2",
        zipcode: "2222",
        lines: &[("SPRING1 BOOK", 20000, 3), ("SPRING2 BOOK", 40000, 4)],
    },
];

/// Inserts [`SAMPLE_ORDERS`] in one transaction unless orders already exist.
/// Returns whether anything was inserted.
pub fn seed_sample_data(pool: &DbPool) -> Result<bool, DomainError> {
    let mut conn = pool.get()?;

    conn.transaction::<_, DomainError, _>(|conn| {
        let existing: i64 = orders::table.count().get_result(conn)?;
        if existing > 0 {
            return Ok(false);
        }
        for sample in &SAMPLE_ORDERS {
            insert_order(conn, sample)?;
        }
        Ok(true)
    })
}

/// Inserts one order with its own buyer, delivery and items.
pub fn insert_order(conn: &mut PgConnection, sample: &SampleOrder) -> Result<i64, DomainError> {
    let member_id: i64 = diesel::insert_into(members::table)
        .values(&NewMemberRow {
            name: sample.buyer.to_string(),
        })
        .returning(members::id)
        .get_result(conn)?;

    let delivery_id: i64 = diesel::insert_into(deliveries::table)
        .values(&NewDeliveryRow {
            city: sample.city.to_string(),
            street: sample.street.to_string(),
            zipcode: sample.zipcode.to_string(),
        })
        .returning(deliveries::id)
        .get_result(conn)?;

    let order_id: i64 = diesel::insert_into(orders::table)
        .values(&NewOrderRow {
            member_id,
            delivery_id,
            order_date: Local::now().naive_local(),
            status: OrderStatus::Ordered.as_str().to_string(),
        })
        .returning(orders::id)
        .get_result(conn)?;

    for (name, price, count) in sample.lines {
        let item_id: i64 = diesel::insert_into(items::table)
            .values(&NewItemRow {
                name: name.to_string(),
            })
            .returning(items::id)
            .get_result(conn)?;

        diesel::insert_into(order_items::table)
            .values(&NewOrderItemRow {
                order_id,
                item_id,
                order_price: *price,
                quantity: *count,
            })
            .execute(conn)?;
    }

    Ok(order_id)
}
