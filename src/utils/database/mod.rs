mod memory;
mod seed;

pub use memory::MemoryCollection;
pub use seed::{seed, Seed, SeedError};

use crate::modules::{dish::repository::Dish, order::repository::Order};
use async_trait::async_trait;
use std::sync::Arc;

pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists: {0}")]
    Duplicate(String),
    #[error("collection is closed")]
    Closed,
}

/// An ordered collection of records keyed by id.
///
/// Records are kept in insertion order. Replacing a record keeps its
/// position; removing one shifts the records after it.
#[async_trait]
pub trait Collection<T: Record>: Send + Sync {
    async fn all(&self) -> Result<Vec<T>, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<T>, StoreError>;

    async fn append(&self, record: T) -> Result<T, StoreError>;

    /// Returns `None` when no record with the same id exists.
    async fn replace(&self, record: T) -> Result<Option<T>, StoreError>;

    async fn remove(&self, id: &str) -> Result<Option<T>, StoreError>;

    async fn len(&self) -> Result<usize, StoreError>;

    /// Drops every record. Any later call fails with [`StoreError::Closed`].
    async fn close(&self);
}

#[derive(Clone)]
pub struct DatabaseConnection {
    pub dishes: Arc<dyn Collection<Dish>>,
    pub orders: Arc<dyn Collection<Order>>,
}

impl DatabaseConnection {
    pub async fn close(&self) {
        let dishes = self.dishes.len().await.unwrap_or_default();
        let orders = self.orders.len().await.unwrap_or_default();

        self.dishes.close().await;
        self.orders.close().await;

        tracing::debug!("Closed store holding {dishes} dishes and {orders} orders");
    }
}

pub fn connect() -> DatabaseConnection {
    DatabaseConnection {
        dishes: Arc::new(MemoryCollection::<Dish>::new()),
        orders: Arc::new(MemoryCollection::<Order>::new()),
    }
}
