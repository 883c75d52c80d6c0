use std::sync::Arc;

use log::debug;

use super::dto::OrderDto;
use super::eager::{resolve_orders, Lines};
use crate::domain::errors::DomainError;
use crate::domain::grouping::{group_flat_rows, load_in_batches};
use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::OrderStore;
use crate::domain::query::{OrderItemQueryDto, OrderQueryDto};
use crate::domain::search::{OrderSearch, Page};

/// Full order listing: header, buyer, address and lines, via six retrieval
/// strategies that return the same logical result.
pub struct OrderApiService {
    store: Arc<dyn OrderStore>,
    batch_size: usize,
}

impl OrderApiService {
    /// `batch_size` bounds the id list of each line query issued by
    /// [`Self::orders_v3_page`].
    pub fn new(store: Arc<dyn OrderStore>, batch_size: usize) -> Self {
        Self {
            store,
            batch_size: batch_size.max(1),
        }
    }

    /// Raw entities, every relation resolved by its own lookup.
    pub fn orders_v1(&self, search: &OrderSearch) -> Result<Vec<Order>, DomainError> {
        let orders = resolve_orders(self.store.as_ref(), search, Lines::Resolve)?;
        debug!("orders v1: resolved {} orders one relation at a time", orders.len());
        Ok(orders)
    }

    pub fn orders_v2(&self, search: &OrderSearch) -> Result<Vec<OrderDto>, DomainError> {
        let orders = resolve_orders(self.store.as_ref(), search, Lines::Resolve)?;
        debug!("orders v2: mapping {} resolved orders", orders.len());
        orders.iter().map(OrderDto::try_from).collect()
    }

    /// One fetch-join query over every relation. Not pageable.
    pub fn orders_v3(&self) -> Result<Vec<OrderDto>, DomainError> {
        let orders = self.store.find_all_with_item()?;
        debug!("orders v3: fetch join returned {} orders", orders.len());
        orders.iter().map(OrderDto::try_from).collect()
    }

    /// To-one relations joined and paged by order; lines loaded in batches of
    /// `batch_size` order ids.
    pub fn orders_v3_page(&self, page: Page) -> Result<Vec<OrderDto>, DomainError> {
        let mut orders = self.store.find_all_with_member_delivery(Some(page))?;
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();

        let mut lines = load_in_batches(
            &ids,
            self.batch_size,
            |batch| self.store.find_order_items_in(batch),
            |line: &OrderItem| line.order_id,
        )?;
        for order in &mut orders {
            order.order_items = Some(lines.remove(&order.id).unwrap_or_default());
        }

        debug!(
            "orders v3.1: offset={} limit={} returned {} orders, batch size {}",
            page.offset,
            page.limit,
            orders.len(),
            self.batch_size
        );
        orders.iter().map(OrderDto::try_from).collect()
    }

    /// Header projection, then one line query per order.
    pub fn orders_v4(&self) -> Result<Vec<OrderQueryDto>, DomainError> {
        let mut orders = self.store.find_order_headers()?;
        for order in &mut orders {
            order.order_items = self.store.find_order_item_dtos(order.order_id)?;
        }
        debug!("orders v4: {} headers, one line query each", orders.len());
        Ok(orders)
    }

    /// Header projection, then a single line query covering every order id.
    pub fn orders_v5(&self) -> Result<Vec<OrderQueryDto>, DomainError> {
        let mut orders = self.store.find_order_headers()?;
        let ids: Vec<i64> = orders.iter().map(|o| o.order_id).collect();

        let mut lines = load_in_batches(
            &ids,
            ids.len(),
            |batch| self.store.find_order_item_dtos_in(batch),
            |line: &OrderItemQueryDto| line.order_id,
        )?;
        for order in &mut orders {
            order.order_items = lines.remove(&order.order_id).unwrap_or_default();
        }

        debug!("orders v5: {} headers, lines in one query", orders.len());
        Ok(orders)
    }

    /// One flat join, regrouped in memory.
    pub fn orders_v6(&self) -> Result<Vec<OrderQueryDto>, DomainError> {
        let rows = self.store.find_all_flat()?;
        let row_count = rows.len();
        let orders = group_flat_rows(rows);
        debug!("orders v6: grouped {} rows into {} orders", row_count, orders.len());
        Ok(orders)
    }
}
