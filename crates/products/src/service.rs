//! Product lifecycle operations.

use catalog_core::{PagedResponse, ProductId};
use thiserror::Error;

use crate::product::{PageRequest, Product, ProductDraft};
use crate::store::{ProductStore, StoreError};

/// Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Failure of a product operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// No record exists for the requested id.
    #[error("Could not find product with id {0}")]
    NotFound(ProductId),

    /// Collaborator failure, passed through untouched.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Mediates every product lifecycle operation against a [`ProductStore`].
///
/// Owns pagination normalization, existence enforcement and field-level
/// update semantics. Knows nothing about the transport; callers construct
/// it directly with the store it should use.
#[derive(Debug, Clone)]
pub struct ProductService<S> {
    store: S,
}

impl<S: ProductStore> ProductService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// One page of products, sorted as requested.
    ///
    /// The caller-facing `page` is 1-indexed; the store sees the
    /// zero-indexed page offset. A page past the end of the result set
    /// comes back with empty content and valid totals, never an error.
    pub async fn list_products(
        &self,
        request: PageRequest,
    ) -> ProductResult<PagedResponse<Product>> {
        tracing::info!(
            page = request.page,
            size = request.size,
            sort = ?request.sort,
            direction = ?request.direction,
            "listing products"
        );
        let page = self
            .store
            .find_page(request.offset(), request.size, request.sort, request.direction)
            .await?;
        Ok(PagedResponse::new(
            page.records,
            page.total_elements,
            page.total_pages,
        ))
    }

    /// Persist a new product; the store assigns the id.
    ///
    /// Field contents are stored as given. Validating them is a boundary
    /// concern, not this service's.
    pub async fn create_product(&self, draft: ProductDraft) -> ProductResult<Product> {
        let product = self.store.insert(draft).await?;
        tracing::info!(id = %product.id(), "product created");
        Ok(product)
    }

    /// Point lookup; no side effects.
    pub async fn get_product_by_id(&self, id: ProductId) -> ProductResult<Product> {
        tracing::debug!(%id, "fetching product");
        match self.store.find_by_id(id).await? {
            Some(product) => Ok(product),
            None => {
                tracing::warn!(%id, "product not found");
                Err(ProductError::NotFound(id))
            }
        }
    }

    /// Overwrite `name`, `description` and `price` on an existing record
    /// and persist it.
    ///
    /// The record keeps the id it is stored under; the patch carries no id
    /// to apply. Every patch field is written as given, never a sparse
    /// merge.
    ///
    /// Lookup and save are two uncoordinated store calls: concurrent
    /// updates of the same id are last-write-wins, and a delete landing
    /// between the two calls resurrects the record. Hardening that would
    /// take a version check in the store contract; the service performs
    /// none.
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductDraft,
    ) -> ProductResult<Product> {
        match self.store.find_by_id(id).await? {
            Some(existing) => {
                let updated = self.store.save(Product::new(existing.id(), patch)).await?;
                tracing::info!(id = %updated.id(), "product updated");
                Ok(updated)
            }
            None => {
                tracing::warn!(%id, "product not found for update");
                Err(ProductError::NotFound(id))
            }
        }
    }

    /// Remove an existing record.
    ///
    /// Deleting an id with no record is an error, not a no-op.
    pub async fn delete_product(&self, id: ProductId) -> ProductResult<()> {
        match self.store.find_by_id(id).await? {
            Some(existing) => {
                self.store.delete(existing).await?;
                tracing::info!(%id, "product deleted");
                Ok(())
            }
            None => {
                tracing::warn!(%id, "product not found for delete");
                Err(ProductError::NotFound(id))
            }
        }
    }
}
