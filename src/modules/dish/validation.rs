use super::repository::{self, CreateDishPayload, Dish};
use crate::utils::{
    database::DatabaseConnection,
    error::Error,
    validation::{self, Step},
};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

#[derive(Deserialize, Default)]
pub struct Body {
    pub data: Option<DishData>,
}

#[derive(Deserialize, Default, Clone, Debug)]
pub struct DishData {
    pub id: Option<Value>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Value>,
    pub image_url: Option<String>,
}

/// What a dish step looks at: the submitted data and, for updates, the id
/// taken from the route.
pub struct Submission {
    pub route_id: Option<String>,
    pub data: DishData,
}

impl Submission {
    pub fn new(body: Body) -> Self {
        Self {
            route_id: None,
            data: body.data.unwrap_or_default(),
        }
    }

    pub fn for_route(id: String, body: Body) -> Self {
        Self {
            route_id: Some(id),
            ..Self::new(body)
        }
    }
}

impl From<&DishData> for CreateDishPayload {
    fn from(data: &DishData) -> Self {
        Self {
            name: data.name.clone().unwrap_or_default(),
            description: data.description.clone().unwrap_or_default(),
            price: data
                .price
                .as_ref()
                .and_then(validation::as_integer)
                .unwrap_or_default(),
            image_url: data.image_url.clone().unwrap_or_default(),
        }
    }
}

pub const CREATE_STEPS: &[Step<Submission>] =
    &[has_all_properties, price_is_integer, properties_are_not_empty];

pub const UPDATE_STEPS: &[Step<Submission>] = &[
    has_all_properties,
    price_is_integer,
    properties_are_not_empty,
    id_matches_route,
];

pub async fn dish_exists(db_conn: &DatabaseConnection, id: &str) -> Result<Dish, Error> {
    repository::find_by_id(db_conn, id).await?.ok_or_else(|| {
        tracing::warn!("Dish not found: {id}");
        Error::NotFound(format!("Dish does not exist: {id}."))
    })
}

fn has_all_properties(submission: &Submission) -> Result<(), Error> {
    let data = &submission.data;

    if validation::is_given(data.name.as_deref())
        && validation::is_given(data.description.as_deref())
        && data.price.as_ref().is_some_and(validation::is_truthy)
        && validation::is_given(data.image_url.as_deref())
    {
        return Ok(());
    }

    Err(Error::BadRequest(String::from(
        "All body properties are required. (ie: name, description, price, image_url)",
    )))
}

fn price_is_integer(submission: &Submission) -> Result<(), Error> {
    match submission.data.price.as_ref().and_then(validation::as_integer) {
        Some(_) => Ok(()),
        None => Err(Error::BadRequest(String::from(
            "Dish must have a price that is an integer greater than 0",
        ))),
    }
}

fn properties_are_not_empty(submission: &Submission) -> Result<(), Error> {
    CreateDishPayload::from(&submission.data)
        .validate()
        .map_err(|errors| {
            validation::reject(
                errors,
                "Name, description, and image_url properties cannot be empty. Price property cannot be zero or less.",
            )
        })
}

fn id_matches_route(submission: &Submission) -> Result<(), Error> {
    let Some(route_id) = submission.route_id.as_deref() else {
        return Ok(());
    };

    match submission.data.id.as_ref() {
        Some(id) if !validation::id_matches(Some(id), route_id) => Err(Error::BadRequest(format!(
            "Dish id does not match route id. Dish: {}, Route: {}",
            validation::display_id(id),
            route_id
        ))),
        _ => Ok(()),
    }
}
