//! Product storage boundary.
//!
//! This module defines the capability the service depends on for durable
//! keyed storage of product records, without making any storage
//! assumptions.

use std::sync::Arc;

use async_trait::async_trait;
use catalog_core::ProductId;
use thiserror::Error;

use crate::product::{Product, ProductDraft, SortDirection, SortField};

/// Failure inside a storage backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A save or delete addressed a record that is no longer there.
    #[error("record missing from store: {0}")]
    Missing(ProductId),

    /// The backend itself failed (connection, query, pool).
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// One sorted page of records plus result-set totals, as the store reports
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub records: Vec<Product>,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// Durable keyed storage of product records.
///
/// ## Contract
///
/// - `insert` assigns the id; callers never pick one.
/// - `find_page` counts pages zero-indexed and reports set-wide totals for
///   the `size` it was given. An index past the end yields an empty page
///   with the totals intact.
/// - `save` writes the record under its id whether or not one is currently
///   there, so a record deleted between a caller's lookup and its save
///   comes back. Existence policy belongs to the caller.
/// - `delete` addresses a record that is expected to exist and fails
///   loudly when it is already gone.
///
/// Works with the in-memory implementation (tests/dev) and SQL backends
/// alike; implementations decide their own durability and ordering for
/// equal keys, except that pages must be stable for identical inputs.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a new record, assigning its id.
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Point lookup by id.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// One sorted page. `page_index` is zero-indexed.
    async fn find_page(
        &self,
        page_index: u32,
        size: u32,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<ProductPage, StoreError>;

    /// Write a record under its id, overwriting whatever is there.
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    /// Remove a record. Fails with [`StoreError::Missing`] when it is
    /// already gone.
    async fn delete(&self, product: Product) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).insert(draft).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_page(
        &self,
        page_index: u32,
        size: u32,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<ProductPage, StoreError> {
        (**self).find_page(page_index, size, sort, direction).await
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        (**self).save(product).await
    }

    async fn delete(&self, product: Product) -> Result<(), StoreError> {
        (**self).delete(product).await
    }
}
