use crate::utils::database::{DatabaseConnection, Record, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};
use ulid::Ulid;
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        })
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// A dish line inside an order. Whatever the client sent about the dish
/// besides `quantity` is kept as-is.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
pub struct OrderDish {
    #[validate(range(min = 1))]
    pub quantity: i64,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Validate, Clone, Debug)]
pub struct CreateOrderPayload {
    #[validate(length(min = 1))]
    pub deliver_to: String,
    #[validate(length(min = 1))]
    pub mobile_number: String,
    pub status: OrderStatus,
    #[validate(length(min = 1))]
    pub dishes: Vec<OrderDish>,
}

pub type UpdateOrderPayload = CreateOrderPayload;

impl From<&Order> for CreateOrderPayload {
    fn from(order: &Order) -> Self {
        Self {
            deliver_to: order.deliver_to.clone(),
            mobile_number: order.mobile_number.clone(),
            status: order.status,
            dishes: order.dishes.clone(),
        }
    }
}

pub async fn find_many(db_conn: &DatabaseConnection) -> Result<Vec<Order>, StoreError> {
    db_conn.orders.all().await
}

pub async fn find_by_id(
    db_conn: &DatabaseConnection,
    id: &str,
) -> Result<Option<Order>, StoreError> {
    db_conn.orders.find(id).await
}

pub async fn create(
    db_conn: &DatabaseConnection,
    payload: CreateOrderPayload,
) -> Result<Order, StoreError> {
    db_conn
        .orders
        .append(Order {
            id: Ulid::new().to_string(),
            deliver_to: payload.deliver_to,
            mobile_number: payload.mobile_number,
            status: payload.status,
            dishes: payload.dishes,
        })
        .await
}

pub async fn update_by_id(
    db_conn: &DatabaseConnection,
    id: String,
    payload: UpdateOrderPayload,
) -> Result<Option<Order>, StoreError> {
    db_conn
        .orders
        .replace(Order {
            id,
            deliver_to: payload.deliver_to,
            mobile_number: payload.mobile_number,
            status: payload.status,
            dishes: payload.dishes,
        })
        .await
}

pub async fn delete_by_id(
    db_conn: &DatabaseConnection,
    id: &str,
) -> Result<Option<Order>, StoreError> {
    db_conn.orders.remove(id).await
}
