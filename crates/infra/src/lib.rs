//! Infrastructure layer: concrete product stores.

pub mod store;

pub use store::InMemoryProductStore;
#[cfg(feature = "postgres")]
pub use store::PostgresProductStore;
