use super::repository::{self, CreateOrderPayload, Order, OrderDish, OrderStatus};
use crate::utils::{
    database::DatabaseConnection,
    error::Error,
    validation::{self, Step},
};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

const STATUS_REQUIRED: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

#[derive(Deserialize, Default)]
pub struct Body {
    pub data: Option<OrderData>,
}

#[derive(Deserialize, Default, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub id: Option<Value>,
    pub deliver_to: Option<String>,
    pub mobile_number: Option<String>,
    pub status: Option<String>,
    pub dishes: Option<Value>,
}

/// What an order step looks at. `route_id` and `current_status` are only
/// set for updates.
pub struct Submission {
    pub route_id: Option<String>,
    pub current_status: Option<OrderStatus>,
    pub data: OrderData,
}

impl Submission {
    pub fn new(body: Body) -> Self {
        Self {
            route_id: None,
            current_status: None,
            data: body.data.unwrap_or_default(),
        }
    }

    pub fn for_order(order: &Order, body: Body) -> Self {
        Self {
            route_id: Some(order.id.clone()),
            current_status: Some(order.status),
            ..Self::new(body)
        }
    }
}

fn order_dishes(dishes: Option<&Value>) -> Vec<OrderDish> {
    let Some(Value::Array(dishes)) = dishes else {
        return vec![];
    };

    dishes
        .iter()
        .map(|dish| match dish {
            Value::Object(fields) => {
                let mut fields = fields.clone();
                let quantity = fields
                    .remove("quantity")
                    .as_ref()
                    .and_then(validation::as_integer)
                    .unwrap_or_default();
                OrderDish {
                    quantity,
                    dish: fields,
                }
            }
            _ => OrderDish {
                quantity: 0,
                dish: Default::default(),
            },
        })
        .collect()
}

impl From<&OrderData> for CreateOrderPayload {
    fn from(data: &OrderData) -> Self {
        Self {
            deliver_to: data.deliver_to.clone().unwrap_or_default(),
            mobile_number: data.mobile_number.clone().unwrap_or_default(),
            status: data
                .status
                .as_deref()
                .and_then(|status| status.parse().ok())
                .unwrap_or(OrderStatus::Pending),
            dishes: order_dishes(data.dishes.as_ref()),
        }
    }
}

pub const CREATE_STEPS: &[Step<Submission>] = &[
    has_all_properties,
    dishes_are_valid,
    properties_are_not_empty,
    quantities_are_positive,
    status_is_valid,
];

pub const UPDATE_STEPS: &[Step<Submission>] = &[
    has_all_properties,
    dishes_are_valid,
    properties_are_not_empty,
    quantities_are_positive,
    id_matches_route,
    status_is_present,
    status_is_valid,
    status_is_not_delivered,
];

pub const DELETE_STEPS: &[Step<Order>] = &[status_is_pending];

pub async fn order_exists(db_conn: &DatabaseConnection, id: &str) -> Result<Order, Error> {
    repository::find_by_id(db_conn, id).await?.ok_or_else(|| {
        tracing::warn!("Order not found: {id}");
        Error::NotFound(format!("Order does not exist: {id}."))
    })
}

fn has_all_properties(submission: &Submission) -> Result<(), Error> {
    let data = &submission.data;

    if validation::is_given(data.deliver_to.as_deref())
        && validation::is_given(data.mobile_number.as_deref())
        && data.dishes.as_ref().is_some_and(validation::is_truthy)
    {
        return Ok(());
    }

    Err(Error::BadRequest(String::from(
        "All body properties are required. (ie: deliverTo, mobileNumber, dishes)",
    )))
}

fn dishes_are_valid(submission: &Submission) -> Result<(), Error> {
    let quantities_are_integers = match submission.data.dishes.as_ref() {
        Some(Value::Array(dishes)) => dishes.iter().all(|dish| {
            dish.get("quantity")
                .and_then(validation::as_integer)
                .is_some()
        }),
        _ => false,
    };

    if quantities_are_integers {
        return Ok(());
    }

    Err(Error::BadRequest(String::from(
        "Dishes must be an array. Quantity must be an integer greater than zero.",
    )))
}

fn properties_are_not_empty(submission: &Submission) -> Result<(), Error> {
    CreateOrderPayload::from(&submission.data)
        .validate()
        .map_err(|errors| {
            validation::reject(errors, "deliverTo, mobileNumber, & dishes cannot be empty.")
        })
}

fn quantities_are_positive(submission: &Submission) -> Result<(), Error> {
    order_dishes(submission.data.dishes.as_ref())
        .iter()
        .try_for_each(|dish| dish.validate())
        .map_err(|errors| {
            validation::reject(errors, "Quantity must be an integer greater than zero!")
        })
}

fn id_matches_route(submission: &Submission) -> Result<(), Error> {
    let Some(route_id) = submission.route_id.as_deref() else {
        return Ok(());
    };

    match submission.data.id.as_ref() {
        Some(id) if !validation::id_matches(Some(id), route_id) => Err(Error::BadRequest(format!(
            "Order id does not match route id. Order: {}, Route: {}.",
            validation::display_id(id),
            route_id
        ))),
        _ => Ok(()),
    }
}

fn status_is_present(submission: &Submission) -> Result<(), Error> {
    if validation::is_given(submission.data.status.as_deref()) {
        return Ok(());
    }

    Err(Error::BadRequest(String::from(STATUS_REQUIRED)))
}

fn status_is_valid(submission: &Submission) -> Result<(), Error> {
    match submission.data.status.as_deref() {
        Some(status) if !status.is_empty() => status
            .parse::<OrderStatus>()
            .map(|_| ())
            .map_err(|err| {
                tracing::warn!("Rejected order status: {err}");
                Error::BadRequest(String::from(STATUS_REQUIRED))
            }),
        _ => Ok(()),
    }
}

fn status_is_not_delivered(submission: &Submission) -> Result<(), Error> {
    match submission.current_status {
        Some(OrderStatus::Delivered) => Err(Error::BadRequest(String::from(
            "A delivered order cannot be changed",
        ))),
        _ => Ok(()),
    }
}

fn status_is_pending(order: &Order) -> Result<(), Error> {
    match order.status {
        OrderStatus::Pending => Ok(()),
        status => Err(Error::BadRequest(format!(
            "An order cannot be deleted unless it is pending. Current status: {status}"
        ))),
    }
}
