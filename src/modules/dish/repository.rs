use crate::utils::database::{DatabaseConnection, Record, StoreError};
use serde::{Deserialize, Serialize};
use ulid::Ulid;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Validate, Clone, Debug)]
pub struct CreateDishPayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 1))]
    pub price: i64,
    #[validate(length(min = 1))]
    pub image_url: String,
}

pub type UpdateDishPayload = CreateDishPayload;

impl From<&Dish> for CreateDishPayload {
    fn from(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            description: dish.description.clone(),
            price: dish.price,
            image_url: dish.image_url.clone(),
        }
    }
}

pub async fn find_many(db_conn: &DatabaseConnection) -> Result<Vec<Dish>, StoreError> {
    db_conn.dishes.all().await
}

pub async fn find_by_id(
    db_conn: &DatabaseConnection,
    id: &str,
) -> Result<Option<Dish>, StoreError> {
    db_conn.dishes.find(id).await
}

pub async fn create(
    db_conn: &DatabaseConnection,
    payload: CreateDishPayload,
) -> Result<Dish, StoreError> {
    db_conn
        .dishes
        .append(Dish {
            id: Ulid::new().to_string(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        })
        .await
}

pub async fn update_by_id(
    db_conn: &DatabaseConnection,
    id: String,
    payload: UpdateDishPayload,
) -> Result<Option<Dish>, StoreError> {
    db_conn
        .dishes
        .replace(Dish {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            image_url: payload.image_url,
        })
        .await
}
