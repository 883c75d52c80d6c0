//! In-memory shaping of joined result sets.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use super::query::{OrderFlatDto, OrderKey, OrderQueryDto};

/// Groups `(parent, child)` rows by the key of the parent.
///
/// Groups come out in the order their key was first seen, and children keep
/// their row order within a group. The first parent seen for a key is kept;
/// later duplicates are dropped.
pub fn group_ordered<K, P, C, I>(rows: I, key_of: impl Fn(&P) -> K) -> Vec<(P, Vec<C>)>
where
    K: Eq + Hash,
    I: IntoIterator<Item = (P, C)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(P, Vec<C>)> = Vec::new();

    for (parent, child) in rows {
        let slot = match index.entry(key_of(&parent)) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                groups.push((parent, Vec::new()));
                *e.insert(groups.len() - 1)
            }
        };
        groups[slot].1.push(child);
    }

    groups
}

/// Regroups flat order × line rows into one `OrderQueryDto` per distinct
/// order header.
pub fn group_flat_rows(rows: Vec<OrderFlatDto>) -> Vec<OrderQueryDto> {
    group_ordered(rows.into_iter().map(OrderFlatDto::into_parts), |key: &OrderKey| key.clone())
        .into_iter()
        .map(|(key, items)| OrderQueryDto {
            order_items: items,
            ..OrderQueryDto::header(key)
        })
        .collect()
}

/// Buckets `children` by parent id, keeping their relative order.
pub fn index_by_parent<C>(children: Vec<C>, parent_of: impl Fn(&C) -> i64) -> HashMap<i64, Vec<C>> {
    let mut by_parent: HashMap<i64, Vec<C>> = HashMap::new();
    for child in children {
        by_parent.entry(parent_of(&child)).or_default().push(child);
    }
    by_parent
}

/// Loads the children of `parent_ids` with one `fetch` call per batch of at
/// most `batch_size` ids, then buckets them by parent id.
///
/// No call is made when `parent_ids` is empty.
pub fn load_in_batches<C, E>(
    parent_ids: &[i64],
    batch_size: usize,
    mut fetch: impl FnMut(&[i64]) -> Result<Vec<C>, E>,
    parent_of: impl Fn(&C) -> i64,
) -> Result<HashMap<i64, Vec<C>>, E> {
    let mut children = Vec::new();
    for batch in parent_ids.chunks(batch_size.max(1)) {
        children.extend(fetch(batch)?);
    }
    Ok(index_by_parent(children, parent_of))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Address, OrderStatus};
    use chrono::{NaiveDate, NaiveDateTime};

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn row(order_id: i64, name: &str, item: &str, price: i32, count: i32) -> OrderFlatDto {
        OrderFlatDto {
            order_id,
            name: name.to_string(),
            order_date: date(),
            order_status: OrderStatus::Ordered,
            address: Address {
                city: "Seoul".to_string(),
                street: "Main".to_string(),
                zipcode: "01234".to_string(),
            },
            item_name: item.to_string(),
            order_price: price,
            count,
        }
    }

    fn item_names(dto: &OrderQueryDto) -> Vec<&str> {
        dto.order_items.iter().map(|i| i.item_name.as_str()).collect()
    }

    #[test]
    fn interleaved_rows_group_per_order() {
        let rows = vec![
            row(1, "Alice", "Book", 10, 1),
            row(2, "Bob", "Book", 10, 2),
            row(1, "Alice", "Pen", 2, 3),
        ];

        let groups = group_flat_rows(rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].order_id, 1);
        assert_eq!(groups[0].name, "Alice");
        assert_eq!(item_names(&groups[0]), vec!["Book", "Pen"]);
        assert_eq!(groups[1].order_id, 2);
        assert_eq!(item_names(&groups[1]), vec!["Book"]);
        assert_eq!(groups[1].order_items[0].count, 2);
    }

    #[test]
    fn group_count_is_independent_of_interleaving() {
        let orders = [
            vec![
                row(1, "Alice", "Book", 10, 1),
                row(1, "Alice", "Pen", 2, 3),
                row(2, "Bob", "Book", 10, 2),
            ],
            vec![
                row(2, "Bob", "Book", 10, 2),
                row(1, "Alice", "Book", 10, 1),
                row(1, "Alice", "Pen", 2, 3),
            ],
        ];

        for rows in orders {
            let groups = group_flat_rows(rows);
            assert_eq!(groups.len(), 2);
            let alice = groups.iter().find(|g| g.order_id == 1).unwrap();
            let bob = groups.iter().find(|g| g.order_id == 2).unwrap();
            assert_eq!(item_names(alice), vec!["Book", "Pen"]);
            assert_eq!(item_names(bob), vec!["Book"]);
        }
    }

    #[test]
    fn regrouping_is_repeatable() {
        let rows = vec![
            row(1, "Alice", "Book", 10, 1),
            row(2, "Bob", "Book", 10, 2),
            row(1, "Alice", "Pen", 2, 3),
        ];
        assert_eq!(group_flat_rows(rows.clone()), group_flat_rows(rows));
    }

    #[test]
    fn header_differences_split_groups_with_the_same_id() {
        let mut renamed = row(1, "Alice", "Pen", 2, 3);
        renamed.name = "Alicia".to_string();
        let rows = vec![row(1, "Alice", "Book", 10, 1), renamed];

        let groups = group_flat_rows(rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Alice");
        assert_eq!(groups[1].name, "Alicia");
    }

    #[test]
    fn empty_rows_give_no_groups() {
        assert!(group_flat_rows(Vec::new()).is_empty());
    }

    #[test]
    fn group_ordered_keeps_first_parent_for_duplicates() {
        let rows = vec![((1, "first"), 'a'), ((1, "second"), 'b'), ((2, "only"), 'c')];

        let groups = group_ordered(rows, |parent: &(i32, &str)| parent.0);

        assert_eq!(groups, vec![((1, "first"), vec!['a', 'b']), ((2, "only"), vec!['c'])]);
    }

    #[test]
    fn batches_are_chunked_by_size() {
        let ids = [1, 2, 3, 4, 5];
        let mut calls: Vec<Vec<i64>> = Vec::new();

        let loaded = load_in_batches(
            &ids,
            2,
            |batch| {
                calls.push(batch.to_vec());
                Ok::<_, ()>(batch.iter().map(|id| (*id, id * 10)).collect())
            },
            |(parent, _)| *parent,
        )
        .unwrap();

        assert_eq!(calls, vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(loaded[&3], vec![(3, 30)]);
        assert_eq!(loaded.len(), 5);
    }

    #[test]
    fn no_ids_means_no_fetch() {
        let mut called = false;
        let loaded = load_in_batches(
            &[],
            10,
            |_| {
                called = true;
                Ok::<Vec<(i64, i32)>, ()>(Vec::new())
            },
            |(parent, _)| *parent,
        )
        .unwrap();

        assert!(!called);
        assert!(loaded.is_empty());
    }

    #[test]
    fn batch_errors_stop_loading() {
        let mut calls = 0;
        let result = load_in_batches(
            &[1, 2, 3],
            1,
            |_| {
                calls += 1;
                Err::<Vec<(i64, i32)>, _>("boom")
            },
            |(parent, _)| *parent,
        );

        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(calls, 1);
    }

    #[test]
    fn index_by_parent_preserves_child_order() {
        let children = vec![(1, 'a'), (2, 'b'), (1, 'c')];
        let by_parent = index_by_parent(children, |(parent, _)| *parent);
        assert_eq!(by_parent[&1], vec![(1, 'a'), (1, 'c')]);
        assert_eq!(by_parent[&2], vec![(2, 'b')]);
    }
}
