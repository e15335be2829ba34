use super::{DatabaseConnection, StoreError};
use crate::modules::{
    dish::repository::{CreateDishPayload, Dish},
    order::repository::{CreateOrderPayload, Order},
};
use serde::Deserialize;
use std::path::Path;
use validator::{Validate, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid {kind} {id} in seed file: {source}")]
    Invalid {
        kind: &'static str,
        id: String,
        source: ValidationErrors,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Deserialize, Default)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl Seed {
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| SeedError::Read {
                path: display.clone(),
                source,
            })?;

        serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
            path: display,
            source,
        })
    }
}

fn check_dish(dish: &Dish) -> Result<(), SeedError> {
    CreateDishPayload::from(dish)
        .validate()
        .map_err(|source| SeedError::Invalid {
            kind: "dish",
            id: dish.id.clone(),
            source,
        })
}

fn check_order(order: &Order) -> Result<(), SeedError> {
    CreateOrderPayload::from(order)
        .validate()
        .and_then(|_| order.dishes.iter().try_for_each(Validate::validate))
        .map_err(|source| SeedError::Invalid {
            kind: "order",
            id: order.id.clone(),
            source,
        })
}

/// Loads `seed` into the store. Every record must satisfy the same rules
/// as a created one; nothing is stored if any of them fails.
pub async fn seed(db_conn: &DatabaseConnection, seed: Seed) -> Result<(), SeedError> {
    seed.dishes.iter().try_for_each(check_dish)?;
    seed.orders.iter().try_for_each(check_order)?;

    let dishes = seed.dishes.len();
    let orders = seed.orders.len();

    for dish in seed.dishes {
        db_conn.dishes.append(dish).await?;
    }

    for order in seed.orders {
        db_conn.orders.append(order).await?;
    }

    tracing::debug!("Seeded store with {dishes} dishes and {orders} orders");

    Ok(())
}
