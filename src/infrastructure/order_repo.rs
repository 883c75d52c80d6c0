use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::grouping::group_ordered;
use crate::domain::order::{
    Address, Delivery, Item, Member, Order, OrderItem, OrderItemRecord, OrderRecord,
};
use crate::domain::ports::{OrderQueryRepository, OrderRepository, OrderSimpleQueryRepository};
use crate::domain::query::{OrderFlatDto, OrderItemQueryDto, OrderQueryDto, OrderSimpleQueryDto};
use crate::domain::search::{OrderSearch, Page, SEARCH_RESULT_LIMIT};
use crate::schema::{deliveries, items, members, order_items, orders};

use super::models::{
    DeliveryRow, ItemRow, MemberRow, OrderFlatRow, OrderHeaderRow, OrderItemRow, OrderLineRow,
    OrderRow,
};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Store(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Store(e.to_string())
    }
}

// ── Row conversions ──────────────────────────────────────────────────────────

impl TryFrom<OrderRow> for OrderRecord {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(OrderRecord {
            id: row.id,
            member_id: row.member_id,
            delivery_id: row.delivery_id,
            order_date: row.order_date,
            status: row.status.parse()?,
        })
    }
}

impl From<OrderItemRow> for OrderItemRecord {
    fn from(row: OrderItemRow) -> Self {
        OrderItemRecord {
            id: row.id,
            order_id: row.order_id,
            item_id: row.item_id,
            order_price: row.order_price,
            count: row.quantity,
        }
    }
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<DeliveryRow> for Delivery {
    fn from(row: DeliveryRow) -> Self {
        Delivery {
            id: row.id,
            address: Address {
                city: row.city,
                street: row.street,
                zipcode: row.zipcode,
            },
        }
    }
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
        }
    }
}

impl TryFrom<OrderHeaderRow> for OrderQueryDto {
    type Error = DomainError;

    fn try_from(row: OrderHeaderRow) -> Result<Self, Self::Error> {
        Ok(OrderQueryDto {
            order_id: row.order_id,
            name: row.name,
            order_date: row.order_date,
            order_status: row.status.parse()?,
            address: Address {
                city: row.city,
                street: row.street,
                zipcode: row.zipcode,
            },
            order_items: Vec::new(),
        })
    }
}

impl TryFrom<OrderHeaderRow> for OrderSimpleQueryDto {
    type Error = DomainError;

    fn try_from(row: OrderHeaderRow) -> Result<Self, Self::Error> {
        Ok(OrderSimpleQueryDto {
            order_id: row.order_id,
            name: row.name,
            order_date: row.order_date,
            order_status: row.status.parse()?,
            address: Address {
                city: row.city,
                street: row.street,
                zipcode: row.zipcode,
            },
        })
    }
}

impl From<OrderLineRow> for OrderItemQueryDto {
    fn from(row: OrderLineRow) -> Self {
        OrderItemQueryDto {
            order_id: row.order_id,
            item_name: row.item_name,
            order_price: row.order_price,
            count: row.quantity,
        }
    }
}

impl TryFrom<OrderFlatRow> for OrderFlatDto {
    type Error = DomainError;

    fn try_from(row: OrderFlatRow) -> Result<Self, Self::Error> {
        Ok(OrderFlatDto {
            order_id: row.order_id,
            name: row.name,
            order_date: row.order_date,
            order_status: row.status.parse()?,
            address: Address {
                city: row.city,
                street: row.street,
                zipcode: row.zipcode,
            },
            item_name: row.item_name,
            order_price: row.order_price,
            count: row.quantity,
        })
    }
}

fn order_item(line: OrderItemRow, item: ItemRow) -> OrderItem {
    OrderItem {
        id: line.id,
        order_id: line.order_id,
        item: item.into(),
        order_price: line.order_price,
        count: line.quantity,
    }
}

fn order(
    row: OrderRow,
    member: MemberRow,
    delivery: DeliveryRow,
    order_items: Option<Vec<OrderItem>>,
) -> Result<Order, DomainError> {
    Ok(Order {
        id: row.id,
        member: member.into(),
        delivery: delivery.into(),
        order_items,
        order_date: row.order_date,
        status: row.status.parse()?,
    })
}

fn missing(what: &str, id: i64) -> DomainError {
    DomainError::CorruptRecord(format!("{what} {id} referenced but not found"))
}

// ── Store ────────────────────────────────────────────────────────────────────

/// PostgreSQL-backed implementation of every read port.
#[derive(Clone)]
pub struct DieselOrderStore {
    pool: DbPool,
}

impl DieselOrderStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderStore {
    fn find_orders(&self, search: &OrderSearch) -> Result<Vec<OrderRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = orders::table
            .inner_join(members::table)
            .select(OrderRow::as_select())
            .order(orders::id.asc())
            .limit(SEARCH_RESULT_LIMIT)
            .into_boxed();
        if let Some(status) = search.order_status {
            query = query.filter(orders::status.eq(status.as_str()));
        }
        if let Some(pattern) = search.member_name_pattern() {
            query = query.filter(members::name.like(pattern));
        }

        query
            .load::<OrderRow>(&mut conn)?
            .into_iter()
            .map(OrderRecord::try_from)
            .collect()
    }

    fn find_member(&self, id: i64) -> Result<Member, DomainError> {
        let mut conn = self.pool.get()?;

        members::table
            .find(id)
            .select(MemberRow::as_select())
            .first(&mut conn)
            .optional()?
            .map(Member::from)
            .ok_or_else(|| missing("member", id))
    }

    fn find_delivery(&self, id: i64) -> Result<Delivery, DomainError> {
        let mut conn = self.pool.get()?;

        deliveries::table
            .find(id)
            .select(DeliveryRow::as_select())
            .first(&mut conn)
            .optional()?
            .map(Delivery::from)
            .ok_or_else(|| missing("delivery", id))
    }

    fn find_order_items(&self, order_id: i64) -> Result<Vec<OrderItemRecord>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .select(OrderItemRow::as_select())
            .order(order_items::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(OrderItemRecord::from).collect())
    }

    fn find_item(&self, id: i64) -> Result<Item, DomainError> {
        let mut conn = self.pool.get()?;

        items::table
            .find(id)
            .select(ItemRow::as_select())
            .first(&mut conn)
            .optional()?
            .map(Item::from)
            .ok_or_else(|| missing("item", id))
    }

    fn find_all_with_item(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        // One row per order line; the order columns repeat on every row.
        let rows: Vec<(OrderRow, MemberRow, DeliveryRow, OrderItemRow, ItemRow)> = orders::table
            .inner_join(members::table)
            .inner_join(deliveries::table)
            .inner_join(order_items::table.inner_join(items::table))
            .select((
                OrderRow::as_select(),
                MemberRow::as_select(),
                DeliveryRow::as_select(),
                OrderItemRow::as_select(),
                ItemRow::as_select(),
            ))
            .order((orders::id.asc(), order_items::id.asc()))
            .load(&mut conn)?;

        let row_count = rows.len();
        let grouped = group_ordered(
            rows.into_iter()
                .map(|(o, m, d, line, item)| ((o, m, d), (line, item))),
            |parent: &(OrderRow, MemberRow, DeliveryRow)| parent.0.id,
        );
        log::debug!(
            "fetch join read {} rows for {} orders",
            row_count,
            grouped.len()
        );

        grouped
            .into_iter()
            .map(|((row, member, delivery), lines)| {
                let lines = lines
                    .into_iter()
                    .map(|(line, item)| order_item(line, item))
                    .collect();
                order(row, member, delivery, Some(lines))
            })
            .collect()
    }

    fn find_all_with_member_delivery(
        &self,
        page: Option<Page>,
    ) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = orders::table
            .inner_join(members::table)
            .inner_join(deliveries::table)
            .select((
                OrderRow::as_select(),
                MemberRow::as_select(),
                DeliveryRow::as_select(),
            ))
            .order(orders::id.asc())
            .into_boxed();
        if let Some(page) = page {
            query = query.offset(page.offset).limit(page.limit);
        }

        query
            .load::<(OrderRow, MemberRow, DeliveryRow)>(&mut conn)?
            .into_iter()
            .map(|(row, member, delivery)| order(row, member, delivery, None))
            .collect()
    }

    fn find_order_items_in(&self, order_ids: &[i64]) -> Result<Vec<OrderItem>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_items::table
            .inner_join(items::table)
            .filter(order_items::order_id.eq_any(order_ids))
            .select((OrderItemRow::as_select(), ItemRow::as_select()))
            .order(order_items::id.asc())
            .load::<(OrderItemRow, ItemRow)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(line, item)| order_item(line, item))
            .collect())
    }
}

impl OrderQueryRepository for DieselOrderStore {
    fn find_order_headers(&self) -> Result<Vec<OrderQueryDto>, DomainError> {
        let mut conn = self.pool.get()?;

        orders::table
            .inner_join(members::table)
            .inner_join(deliveries::table)
            .select((
                orders::id,
                members::name,
                orders::order_date,
                orders::status,
                deliveries::city,
                deliveries::street,
                deliveries::zipcode,
            ))
            .order(orders::id.asc())
            .load::<OrderHeaderRow>(&mut conn)?
            .into_iter()
            .map(OrderQueryDto::try_from)
            .collect()
    }

    fn find_order_item_dtos(&self, order_id: i64) -> Result<Vec<OrderItemQueryDto>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_items::table
            .inner_join(items::table)
            .filter(order_items::order_id.eq(order_id))
            .select((
                order_items::order_id,
                items::name,
                order_items::order_price,
                order_items::quantity,
            ))
            .order(order_items::id.asc())
            .load::<OrderLineRow>(&mut conn)?;

        Ok(rows.into_iter().map(OrderItemQueryDto::from).collect())
    }

    fn find_order_item_dtos_in(
        &self,
        order_ids: &[i64],
    ) -> Result<Vec<OrderItemQueryDto>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = order_items::table
            .inner_join(items::table)
            .filter(order_items::order_id.eq_any(order_ids))
            .select((
                order_items::order_id,
                items::name,
                order_items::order_price,
                order_items::quantity,
            ))
            .order(order_items::id.asc())
            .load::<OrderLineRow>(&mut conn)?;

        Ok(rows.into_iter().map(OrderItemQueryDto::from).collect())
    }

    fn find_all_flat(&self) -> Result<Vec<OrderFlatDto>, DomainError> {
        let mut conn = self.pool.get()?;

        orders::table
            .inner_join(members::table)
            .inner_join(deliveries::table)
            .inner_join(order_items::table.inner_join(items::table))
            .select((
                orders::id,
                members::name,
                orders::order_date,
                orders::status,
                deliveries::city,
                deliveries::street,
                deliveries::zipcode,
                items::name,
                order_items::order_price,
                order_items::quantity,
            ))
            .order((orders::id.asc(), order_items::id.asc()))
            .load::<OrderFlatRow>(&mut conn)?
            .into_iter()
            .map(OrderFlatDto::try_from)
            .collect()
    }
}

impl OrderSimpleQueryRepository for DieselOrderStore {
    fn find_order_dtos(&self) -> Result<Vec<OrderSimpleQueryDto>, DomainError> {
        let mut conn = self.pool.get()?;

        orders::table
            .inner_join(members::table)
            .inner_join(deliveries::table)
            .select((
                orders::id,
                members::name,
                orders::order_date,
                orders::status,
                deliveries::city,
                deliveries::street,
                deliveries::zipcode,
            ))
            .order(orders::id.asc())
            .load::<OrderHeaderRow>(&mut conn)?
            .into_iter()
            .map(OrderSimpleQueryDto::try_from)
            .collect()
    }
}
