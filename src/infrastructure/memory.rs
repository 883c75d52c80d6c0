//! Store double for unit tests. Every port call counts as one round trip.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::domain::errors::DomainError;
use crate::domain::order::{
    Address, Delivery, Item, Member, Order, OrderItem, OrderItemRecord, OrderRecord, OrderStatus,
};
use crate::domain::ports::{OrderQueryRepository, OrderRepository, OrderSimpleQueryRepository};
use crate::domain::query::{OrderFlatDto, OrderItemQueryDto, OrderQueryDto, OrderSimpleQueryDto};
use crate::domain::search::{OrderSearch, Page, SEARCH_RESULT_LIMIT};

#[derive(Default)]
pub struct InMemoryOrderStore {
    members: Vec<Member>,
    deliveries: Vec<Delivery>,
    items: Vec<Item>,
    orders: Vec<OrderRecord>,
    lines: Vec<OrderItemRecord>,
    round_trips: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alice orders Book×1@10 and Pen×3@2; Bob orders Book×2@10.
    pub fn sample() -> Self {
        let mut store = Self::new();
        store.add_order("Alice", "Seoul", OrderStatus::Ordered, &[("Book", 10, 1), ("Pen", 2, 3)]);
        store.add_order("Bob", "Busan", OrderStatus::Ordered, &[("Book", 10, 2)]);
        store
    }

    /// Adds an order for a new buyer. Items are shared by name.
    pub fn add_order(
        &mut self,
        buyer: &str,
        city: &str,
        status: OrderStatus,
        lines: &[(&str, i32, i32)],
    ) -> i64 {
        let member_id = self.members.len() as i64 + 1;
        self.members.push(Member {
            id: member_id,
            name: buyer.to_string(),
        });

        let delivery_id = self.deliveries.len() as i64 + 1;
        self.deliveries.push(Delivery {
            id: delivery_id,
            address: Address {
                city: city.to_string(),
                street: format!("{buyer} street"),
                zipcode: format!("{:05}", delivery_id),
            },
        });

        let order_id = self.orders.len() as i64 + 1;
        self.orders.push(OrderRecord {
            id: order_id,
            member_id,
            delivery_id,
            order_date: base_date() + Duration::minutes(order_id),
            status,
        });

        for (name, price, count) in lines {
            let item_id = self.item_id(name);
            self.lines.push(OrderItemRecord {
                id: self.lines.len() as i64 + 1,
                order_id,
                item_id,
                order_price: *price,
                count: *count,
            });
        }

        order_id
    }

    pub fn round_trips(&self) -> usize {
        self.round_trips.load(Ordering::SeqCst)
    }

    pub fn reset_round_trips(&self) {
        self.round_trips.store(0, Ordering::SeqCst);
    }

    /// Makes every subsequent call fail with a store error.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn item_id(&mut self, name: &str) -> i64 {
        if let Some(item) = self.items.iter().find(|i| i.name == name) {
            return item.id;
        }
        let id = self.items.len() as i64 + 1;
        self.items.push(Item {
            id,
            name: name.to_string(),
        });
        id
    }

    fn hit(&self) -> Result<(), DomainError> {
        self.round_trips.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Store("connection refused".to_string()));
        }
        Ok(())
    }

    fn member(&self, id: i64) -> Result<Member, DomainError> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| DomainError::CorruptRecord(format!("member {id} missing")))
    }

    fn delivery(&self, id: i64) -> Result<Delivery, DomainError> {
        self.deliveries
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| DomainError::CorruptRecord(format!("delivery {id} missing")))
    }

    fn item(&self, id: i64) -> Result<Item, DomainError> {
        self.items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| DomainError::CorruptRecord(format!("item {id} missing")))
    }

    fn line(&self, record: &OrderItemRecord) -> Result<OrderItem, DomainError> {
        Ok(OrderItem {
            id: record.id,
            order_id: record.order_id,
            item: self.item(record.item_id)?,
            order_price: record.order_price,
            count: record.count,
        })
    }

    fn lines_of<'a>(&'a self, order_ids: &'a [i64]) -> impl Iterator<Item = &'a OrderItemRecord> {
        self.lines.iter().filter(move |l| order_ids.contains(&l.order_id))
    }

    fn order(&self, record: &OrderRecord, with_lines: bool) -> Result<Order, DomainError> {
        let order_items = if with_lines {
            Some(
                self.lines_of(&[record.id])
                    .map(|l| self.line(l))
                    .collect::<Result<Vec<_>, _>>()?,
            )
        } else {
            None
        };
        Ok(Order {
            id: record.id,
            member: self.member(record.member_id)?,
            delivery: self.delivery(record.delivery_id)?,
            order_items,
            order_date: record.order_date,
            status: record.status,
        })
    }

    fn header(&self, record: &OrderRecord) -> Result<OrderQueryDto, DomainError> {
        Ok(OrderQueryDto {
            order_id: record.id,
            name: self.member(record.member_id)?.name,
            order_date: record.order_date,
            order_status: record.status,
            address: self.delivery(record.delivery_id)?.address,
            order_items: Vec::new(),
        })
    }

    fn item_dto(&self, record: &OrderItemRecord) -> Result<OrderItemQueryDto, DomainError> {
        Ok(OrderItemQueryDto {
            order_id: record.order_id,
            item_name: self.item(record.item_id)?.name,
            order_price: record.order_price,
            count: record.count,
        })
    }
}

fn base_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid base date")
}

impl OrderRepository for InMemoryOrderStore {
    fn find_orders(&self, search: &OrderSearch) -> Result<Vec<OrderRecord>, DomainError> {
        self.hit()?;
        let mut found = Vec::new();
        for record in &self.orders {
            if search.matches(&self.member(record.member_id)?.name, record.status) {
                found.push(record.clone());
            }
        }
        found.truncate(SEARCH_RESULT_LIMIT as usize);
        Ok(found)
    }

    fn find_member(&self, id: i64) -> Result<Member, DomainError> {
        self.hit()?;
        self.member(id)
    }

    fn find_delivery(&self, id: i64) -> Result<Delivery, DomainError> {
        self.hit()?;
        self.delivery(id)
    }

    fn find_order_items(&self, order_id: i64) -> Result<Vec<OrderItemRecord>, DomainError> {
        self.hit()?;
        Ok(self.lines_of(&[order_id]).cloned().collect())
    }

    fn find_item(&self, id: i64) -> Result<Item, DomainError> {
        self.hit()?;
        self.item(id)
    }

    fn find_all_with_item(&self) -> Result<Vec<Order>, DomainError> {
        self.hit()?;
        self.orders.iter().map(|o| self.order(o, true)).collect()
    }

    fn find_all_with_member_delivery(
        &self,
        page: Option<Page>,
    ) -> Result<Vec<Order>, DomainError> {
        self.hit()?;
        let (skip, take) = match page {
            Some(p) => (p.offset as usize, p.limit as usize),
            None => (0, usize::MAX),
        };
        self.orders
            .iter()
            .skip(skip)
            .take(take)
            .map(|o| self.order(o, false))
            .collect()
    }

    fn find_order_items_in(&self, order_ids: &[i64]) -> Result<Vec<OrderItem>, DomainError> {
        self.hit()?;
        self.lines_of(order_ids).map(|l| self.line(l)).collect()
    }
}

impl OrderQueryRepository for InMemoryOrderStore {
    fn find_order_headers(&self) -> Result<Vec<OrderQueryDto>, DomainError> {
        self.hit()?;
        self.orders.iter().map(|o| self.header(o)).collect()
    }

    fn find_order_item_dtos(&self, order_id: i64) -> Result<Vec<OrderItemQueryDto>, DomainError> {
        self.hit()?;
        self.lines_of(&[order_id]).map(|l| self.item_dto(l)).collect()
    }

    fn find_order_item_dtos_in(
        &self,
        order_ids: &[i64],
    ) -> Result<Vec<OrderItemQueryDto>, DomainError> {
        self.hit()?;
        self.lines_of(order_ids).map(|l| self.item_dto(l)).collect()
    }

    fn find_all_flat(&self) -> Result<Vec<OrderFlatDto>, DomainError> {
        self.hit()?;
        let mut rows = Vec::new();
        for record in &self.orders {
            let header = self.header(record)?;
            for line in self.lines_of(&[record.id]) {
                let item = self.item_dto(line)?;
                rows.push(OrderFlatDto {
                    order_id: header.order_id,
                    name: header.name.clone(),
                    order_date: header.order_date,
                    order_status: header.order_status,
                    address: header.address.clone(),
                    item_name: item.item_name,
                    order_price: item.order_price,
                    count: item.count,
                });
            }
        }
        Ok(rows)
    }
}

impl OrderSimpleQueryRepository for InMemoryOrderStore {
    fn find_order_dtos(&self) -> Result<Vec<OrderSimpleQueryDto>, DomainError> {
        self.hit()?;
        self.orders
            .iter()
            .map(|o| {
                let header = self.header(o)?;
                Ok(OrderSimpleQueryDto {
                    order_id: header.order_id,
                    name: header.name,
                    order_date: header.order_date,
                    order_status: header.order_status,
                    address: header.address,
                })
            })
            .collect()
    }
}
