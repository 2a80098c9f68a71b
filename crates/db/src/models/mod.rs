//! Row structs for the `product` and `category` tables.

pub mod category;
pub mod product;
