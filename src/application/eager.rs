use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderItem};
use crate::domain::ports::OrderRepository;
use crate::domain::search::OrderSearch;

/// Whether the resolution pass also reads each order's lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lines {
    Resolve,
    Skip,
}

/// Reads the orders matching `search`, then resolves each relation with its
/// own lookup: buyer and delivery per order, and when `lines` asks for it,
/// the order's lines plus one item lookup per line.
pub fn resolve_orders<R>(
    repo: &R,
    search: &OrderSearch,
    lines: Lines,
) -> Result<Vec<Order>, DomainError>
where
    R: OrderRepository + ?Sized,
{
    repo.find_orders(search)?
        .into_iter()
        .map(|record| {
            let member = repo.find_member(record.member_id)?;
            let delivery = repo.find_delivery(record.delivery_id)?;
            let order_items = match lines {
                Lines::Resolve => Some(resolve_lines(repo, record.id)?),
                Lines::Skip => None,
            };

            Ok(Order {
                id: record.id,
                member,
                delivery,
                order_items,
                order_date: record.order_date,
                status: record.status,
            })
        })
        .collect()
}

fn resolve_lines<R>(repo: &R, order_id: i64) -> Result<Vec<OrderItem>, DomainError>
where
    R: OrderRepository + ?Sized,
{
    repo.find_order_items(order_id)?
        .into_iter()
        .map(|line| {
            Ok(OrderItem {
                id: line.id,
                order_id: line.order_id,
                item: repo.find_item(line.item_id)?,
                order_price: line.order_price,
                count: line.count,
            })
        })
        .collect()
}
