pub mod dto;
pub mod eager;
pub mod order_service;
pub mod simple_order_service;
