//! Foundation building blocks shared by every layer.
//!
//! This crate contains **pure** types (no storage or transport concerns):
//! the product identifier and the generic pagination container.

pub mod id;
pub mod page;

pub use id::{InvalidProductId, ProductId};
pub use page::{page_count, PagedResponse};
