use super::errors::DomainError;
use super::order::{Delivery, Item, Member, Order, OrderItem, OrderItemRecord, OrderRecord};
use super::query::{OrderFlatDto, OrderItemQueryDto, OrderQueryDto, OrderSimpleQueryDto};
use super::search::{OrderSearch, Page};

/// Entity reads. Each method is one round trip to the store.
pub trait OrderRepository: Send + Sync + 'static {
    /// Order rows matching `search`, relations unresolved.
    fn find_orders(&self, search: &OrderSearch) -> Result<Vec<OrderRecord>, DomainError>;
    fn find_member(&self, id: i64) -> Result<Member, DomainError>;
    fn find_delivery(&self, id: i64) -> Result<Delivery, DomainError>;
    fn find_order_items(&self, order_id: i64) -> Result<Vec<OrderItemRecord>, DomainError>;
    fn find_item(&self, id: i64) -> Result<Item, DomainError>;

    /// Orders joined with buyer, delivery, lines and items in a single query,
    /// de-duplicated to one aggregate per order.
    fn find_all_with_item(&self) -> Result<Vec<Order>, DomainError>;

    /// Orders joined with buyer and delivery only. Lines are left unresolved,
    /// so `page` applies to orders rather than to joined rows.
    fn find_all_with_member_delivery(&self, page: Option<Page>)
        -> Result<Vec<Order>, DomainError>;

    /// Lines, with their items, belonging to any of `order_ids`.
    fn find_order_items_in(&self, order_ids: &[i64]) -> Result<Vec<OrderItem>, DomainError>;
}

/// Projection reads for the full order listing.
pub trait OrderQueryRepository: Send + Sync + 'static {
    /// Order headers with empty line lists.
    fn find_order_headers(&self) -> Result<Vec<OrderQueryDto>, DomainError>;
    fn find_order_item_dtos(&self, order_id: i64) -> Result<Vec<OrderItemQueryDto>, DomainError>;
    fn find_order_item_dtos_in(
        &self,
        order_ids: &[i64],
    ) -> Result<Vec<OrderItemQueryDto>, DomainError>;
    /// One row per (order, line) pair.
    fn find_all_flat(&self) -> Result<Vec<OrderFlatDto>, DomainError>;
}

/// Projection reads for the simplified listing.
pub trait OrderSimpleQueryRepository: Send + Sync + 'static {
    fn find_order_dtos(&self) -> Result<Vec<OrderSimpleQueryDto>, DomainError>;
}

/// Everything the listing services read from.
pub trait OrderStore: OrderRepository + OrderQueryRepository + OrderSimpleQueryRepository {}

impl<T> OrderStore for T where T: OrderRepository + OrderQueryRepository + OrderSimpleQueryRepository
{}
