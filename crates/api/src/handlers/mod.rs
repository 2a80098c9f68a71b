//! Request handlers.
//!
//! Handlers only extract parameters and map results; every rule lives in
//! [`storefront_core::service::ProductService`]. Failures return early
//! through [`crate::error::AppError`].

pub mod category;
pub mod product;
