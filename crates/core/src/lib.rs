//! Domain core for the storefront API.
//!
//! Holds the product validation and normalization rules, the
//! [`store::ProductStore`] persistence seam, and the [`service::ProductService`]
//! workflow that ties them together. Nothing here knows about HTTP or SQL.

pub mod error;
pub mod normalize;
pub mod product;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
