//! Service construction and store selection.
//!
//! `build_services` picks the backing store from the environment once at
//! startup; handlers only ever talk to [`AppServices`] and never learn which
//! store sits underneath.

use std::sync::Arc;

use catalog_core::{PagedResponse, ProductId};
use catalog_infra::InMemoryProductStore;
#[cfg(feature = "postgres")]
use catalog_infra::PostgresProductStore;
use catalog_products::{PageRequest, Product, ProductDraft, ProductResult, ProductService};

#[derive(Clone)]
pub enum AppServices {
    InMemory {
        products: ProductService<Arc<InMemoryProductStore>>,
    },
    #[cfg(feature = "postgres")]
    Persistent {
        products: ProductService<PostgresProductStore>,
    },
}

pub async fn build_services() -> AppServices {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_persistent_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
            );
            return build_in_memory_services();
        }
    }

    build_in_memory_services()
}

fn build_in_memory_services() -> AppServices {
    tracing::info!("using in-memory product store");
    let store = Arc::new(InMemoryProductStore::new());
    AppServices::InMemory {
        products: ProductService::new(store),
    }
}

#[cfg(feature = "postgres")]
async fn build_persistent_services() -> AppServices {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set when USE_PERSISTENT_STORES=true");

    let store = PostgresProductStore::connect(&database_url)
        .await
        .expect("failed to connect to Postgres");
    store
        .ensure_schema()
        .await
        .expect("failed to create the products table");

    tracing::info!("using Postgres product store");
    AppServices::Persistent {
        products: ProductService::new(store),
    }
}

impl AppServices {
    pub async fn products_list(&self, request: PageRequest) -> ProductResult<PagedResponse<Product>> {
        match self {
            AppServices::InMemory { products } => products.list_products(request).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.list_products(request).await,
        }
    }

    pub async fn products_create(&self, draft: ProductDraft) -> ProductResult<Product> {
        match self {
            AppServices::InMemory { products } => products.create_product(draft).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.create_product(draft).await,
        }
    }

    pub async fn products_get(&self, id: ProductId) -> ProductResult<Product> {
        match self {
            AppServices::InMemory { products } => products.get_product_by_id(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.get_product_by_id(id).await,
        }
    }

    pub async fn products_update(&self, id: ProductId, patch: ProductDraft) -> ProductResult<Product> {
        match self {
            AppServices::InMemory { products } => products.update_product(id, patch).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.update_product(id, patch).await,
        }
    }

    pub async fn products_delete(&self, id: ProductId) -> ProductResult<()> {
        match self {
            AppServices::InMemory { products } => products.delete_product(id).await,
            #[cfg(feature = "postgres")]
            AppServices::Persistent { products } => products.delete_product(id).await,
        }
    }
}
