use std::sync::Arc;

use log::debug;

use super::dto::SimpleOrderDto;
use super::eager::{resolve_orders, Lines};
use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::OrderStore;
use crate::domain::query::OrderSimpleQueryDto;
use crate::domain::search::OrderSearch;

/// Order headers with buyer name and address, no lines.
pub struct OrderSimpleApiService {
    store: Arc<dyn OrderStore>,
}

impl OrderSimpleApiService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Raw entities with buyer and delivery resolved per order. Lines are not
    /// read and do not appear in the output.
    pub fn orders_v1(&self, search: &OrderSearch) -> Result<Vec<Order>, DomainError> {
        let orders = resolve_orders(self.store.as_ref(), search, Lines::Skip)?;
        debug!("simple orders v1: resolved {} orders", orders.len());
        Ok(orders)
    }

    pub fn orders_v2(&self, search: &OrderSearch) -> Result<Vec<SimpleOrderDto>, DomainError> {
        let orders = resolve_orders(self.store.as_ref(), search, Lines::Skip)?;
        debug!("simple orders v2: mapping {} orders", orders.len());
        Ok(orders.iter().map(SimpleOrderDto::from).collect())
    }

    pub fn orders_v3(&self) -> Result<Vec<SimpleOrderDto>, DomainError> {
        let orders = self.store.find_all_with_member_delivery(None)?;
        debug!("simple orders v3: fetch join returned {} orders", orders.len());
        Ok(orders.iter().map(SimpleOrderDto::from).collect())
    }

    pub fn orders_v4(&self) -> Result<Vec<OrderSimpleQueryDto>, DomainError> {
        let orders = self.store.find_order_dtos()?;
        debug!("simple orders v4: projected {} orders", orders.len());
        Ok(orders)
    }
}
