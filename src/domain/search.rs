use serde::Deserialize;
use utoipa::IntoParams;

use super::order::OrderStatus;

/// Maximum number of orders a search returns.
pub const SEARCH_RESULT_LIMIT: i64 = 1000;

/// Filter for entity searches. The default value matches every order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderSearch {
    /// Substring of the buyer's name.
    pub member_name: Option<String>,
    pub order_status: Option<OrderStatus>,
}

impl OrderSearch {
    /// Returns true when `name` and `status` satisfy this filter.
    pub fn matches(&self, name: &str, status: OrderStatus) -> bool {
        let name_ok = self
            .member_name
            .as_deref()
            .map_or(true, |needle| name.contains(needle));
        let status_ok = self.order_status.map_or(true, |wanted| wanted == status);
        name_ok && status_ok
    }

    /// `LIKE` pattern for the name filter, with wildcard characters escaped.
    pub fn member_name_pattern(&self) -> Option<String> {
        self.member_name.as_deref().map(|needle| {
            let escaped = needle
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{escaped}%")
        })
    }
}

/// Order-level paging window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: i64::from(offset),
            limit: i64::from(limit),
        }
    }
}
