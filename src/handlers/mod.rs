//! HTTP handlers: one per route, orchestrating validation, repository call,
//! and serialized response.

pub mod customer;
pub mod order;
pub mod product;
