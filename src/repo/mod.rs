//! Repository layer: explicit parameterized queries per entity, translating
//! rows to the types in `models`.

pub mod customer;
pub mod order;
pub mod product;
