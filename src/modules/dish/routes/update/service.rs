use super::types::{request, response};
use crate::{
    modules::dish::{
        repository::{self, UpdateDishPayload},
        validation::{self, Submission},
    },
    types::Context,
    utils::validation::run,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dish = validation::dish_exists(&ctx.db_conn, &payload.id).await?;

    let submission = Submission::for_route(dish.id.clone(), payload.body);
    run(&submission, validation::UPDATE_STEPS)?;

    repository::update_by_id(
        &ctx.db_conn,
        dish.id.clone(),
        UpdateDishPayload::from(&submission.data),
    )
    .await?
    .map(response::Success::DishUpdated)
    .ok_or_else(|| response::Error::NotFound(format!("Dish does not exist: {}.", dish.id)))
}
