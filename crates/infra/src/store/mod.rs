//! Product store implementations.
//!
//! The in-memory store backs tests and development; the Postgres store
//! (behind the `postgres` feature) backs real deployments. Both implement
//! the `ProductStore` trait from `catalog-products`.

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryProductStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresProductStore;
