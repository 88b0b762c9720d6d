//! In-memory product store for tests and development.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use catalog_core::{page_count, ProductId};
use catalog_products::{
    Product, ProductDraft, ProductPage, ProductStore, SortDirection, SortField, StoreError,
};

/// Keyed product storage backed by a `RwLock<HashMap>`.
///
/// Pages are produced by sorting a snapshot of all records, so they are
/// consistent within one call but not across calls that race with writers.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<ProductId, Product>>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend("product map lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<ProductId, Product>>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend("product map lock poisoned".to_string()))
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(a: &Product, b: &Product, sort: SortField, direction: SortDirection) -> Ordering {
    let primary = match sort {
        SortField::Id => a.id().as_uuid().cmp(b.id().as_uuid()),
        SortField::Name => a.name().cmp(b.name()),
        SortField::Description => a.description().cmp(b.description()),
        SortField::Price => a.price().total_cmp(&b.price()),
    };
    let primary = match direction {
        SortDirection::Ascending => primary,
        SortDirection::Descending => primary.reverse(),
    };
    // Equal sort keys still page deterministically: ids ascending.
    primary.then_with(|| a.id().as_uuid().cmp(b.id().as_uuid()))
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::new(ProductId::new(), draft);
        self.write()?.insert(product.id(), product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_page(
        &self,
        page_index: u32,
        size: u32,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<ProductPage, StoreError> {
        let mut records: Vec<Product> = self.read()?.values().cloned().collect();
        records.sort_by(|a, b| compare(a, b, sort, direction));

        let total_elements = records.len() as u64;
        let total_pages = page_count(total_elements, size);
        let start = page_index as usize * size as usize;
        let records: Vec<Product> = records
            .into_iter()
            .skip(start)
            .take(size as usize)
            .collect();

        Ok(ProductPage {
            records,
            total_elements,
            total_pages,
        })
    }

    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        self.write()?.insert(product.id(), product.clone());
        Ok(product)
    }

    async fn delete(&self, product: Product) -> Result<(), StoreError> {
        match self.write()?.remove(&product.id()) {
            Some(_) => Ok(()),
            None => Err(StoreError::Missing(product.id())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, description: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: description.to_string(),
            price,
        }
    }

    async fn seeded(store: &InMemoryProductStore, entries: &[(&str, f64)]) -> Vec<Product> {
        let mut products = Vec::with_capacity(entries.len());
        for (name, price) in entries {
            products.push(store.insert(draft(name, "desc", *price)).await.unwrap());
        }
        products
    }

    fn names(page: &ProductPage) -> Vec<&str> {
        page.records.iter().map(|p| p.name()).collect()
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = InMemoryProductStore::new();
        let a = store.insert(draft("Laptop", "Gaming Laptop", 1500.0)).await.unwrap();
        let b = store.insert(draft("Laptop", "Gaming Laptop", 1500.0)).await.unwrap();

        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), "Laptop");
    }

    #[tokio::test]
    async fn find_by_id_round_trips_and_misses_cleanly() {
        let store = InMemoryProductStore::new();
        let stored = store.insert(draft("Phone", "Smartphone", 800.0)).await.unwrap();

        assert_eq!(store.find_by_id(stored.id()).await.unwrap(), Some(stored));
        assert_eq!(store.find_by_id(ProductId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_overwrites_the_record_under_its_id() {
        let store = InMemoryProductStore::new();
        let stored = store.insert(draft("Tablet", "Android Tablet", 300.0)).await.unwrap();

        let updated = Product::new(stored.id(), draft("iPad", "iOS Tablet", 500.0));
        store.save(updated.clone()).await.unwrap();

        assert_eq!(store.find_by_id(stored.id()).await.unwrap(), Some(updated));
        let page = store
            .find_page(0, 10, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn save_writes_back_a_deleted_record() {
        let store = InMemoryProductStore::new();
        let stored = store.insert(draft("Tablet", "Android Tablet", 300.0)).await.unwrap();
        store.delete(stored.clone()).await.unwrap();

        store.save(stored.clone()).await.unwrap();

        assert_eq!(store.find_by_id(stored.id()).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn delete_fails_loudly_when_the_record_is_gone() {
        let store = InMemoryProductStore::new();
        let stored = store.insert(draft("Phone", "Smartphone", 800.0)).await.unwrap();

        store.delete(stored.clone()).await.unwrap();
        let err = store.delete(stored.clone()).await.unwrap_err();

        assert_eq!(err, StoreError::Missing(stored.id()));
    }

    #[tokio::test]
    async fn pages_sort_by_name_in_both_directions() {
        let store = InMemoryProductStore::new();
        seeded(&store, &[("Phone", 800.0), ("Tablet", 300.0), ("Laptop", 1500.0)]).await;

        let asc = store
            .find_page(0, 10, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(names(&asc), vec!["Laptop", "Phone", "Tablet"]);

        let desc = store
            .find_page(0, 10, SortField::Name, SortDirection::Descending)
            .await
            .unwrap();
        assert_eq!(names(&desc), vec!["Tablet", "Phone", "Laptop"]);
    }

    #[tokio::test]
    async fn price_sorts_numerically_not_lexically() {
        let store = InMemoryProductStore::new();
        seeded(&store, &[("A", 1500.0), ("B", 300.0), ("C", 800.0)]).await;

        let page = store
            .find_page(0, 10, SortField::Price, SortDirection::Ascending)
            .await
            .unwrap();
        let prices: Vec<f64> = page.records.iter().map(|p| p.price()).collect();
        assert_eq!(prices, vec![300.0, 800.0, 1500.0]);
    }

    #[tokio::test]
    async fn id_sort_orders_by_uuid_value() {
        let store = InMemoryProductStore::new();
        let mut inserted = seeded(&store, &[("A", 1.0), ("B", 2.0), ("C", 3.0)]).await;
        inserted.sort_by(|a, b| a.id().as_uuid().cmp(b.id().as_uuid()));

        let page = store
            .find_page(0, 10, SortField::Id, SortDirection::Ascending)
            .await
            .unwrap();

        assert_eq!(page.records, inserted);
    }

    #[tokio::test]
    async fn pages_slice_the_sorted_set_and_report_totals() {
        let store = InMemoryProductStore::new();
        seeded(
            &store,
            &[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0), ("E", 5.0)],
        )
        .await;

        let first = store
            .find_page(0, 2, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(names(&first), vec!["A", "B"]);
        assert_eq!(first.total_elements, 5);
        assert_eq!(first.total_pages, 3);

        let second = store
            .find_page(1, 2, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(names(&second), vec!["C", "D"]);

        let last = store
            .find_page(2, 2, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();
        assert_eq!(names(&last), vec!["E"]);
        assert!(last.records.len() <= 2);
    }

    #[tokio::test]
    async fn a_page_past_the_end_is_empty_with_valid_totals() {
        let store = InMemoryProductStore::new();
        seeded(&store, &[("A", 1.0), ("B", 2.0)]).await;

        let page = store
            .find_page(7, 10, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();

        assert!(page.records.is_empty());
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn an_empty_store_pages_to_nothing() {
        let store = InMemoryProductStore::new();

        let page = store
            .find_page(0, 10, SortField::Name, SortDirection::Ascending)
            .await
            .unwrap();

        assert!(page.records.is_empty());
        assert_eq!(page.total_elements, 0);
        assert_eq!(page.total_pages, 0);
    }
}
