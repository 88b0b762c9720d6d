//! Products domain module.
//!
//! This crate contains the business rules for the product catalog: the
//! record types, the storage port they are persisted through, and the
//! service mediating every lifecycle operation. No HTTP, no concrete
//! storage.

pub mod product;
pub mod service;
pub mod store;

pub use product::{PageRequest, Product, ProductDraft, SortDirection, SortField, UnknownSortField};
pub use service::{ProductError, ProductResult, ProductService};
pub use store::{ProductPage, ProductStore, StoreError};
