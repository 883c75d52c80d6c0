pub mod errors;
pub mod grouping;
pub mod order;
pub mod ports;
pub mod query;
pub mod search;
