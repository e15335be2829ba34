use super::types::{request, response};
use crate::{
    modules::dish::{
        repository::{self, CreateDishPayload},
        validation::{self, Submission},
    },
    types::Context,
    utils::validation::run,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let submission = Submission::new(payload.body);
    run(&submission, validation::CREATE_STEPS)?;

    let dish = repository::create(&ctx.db_conn, CreateDishPayload::from(&submission.data)).await?;

    tracing::debug!("Created dish {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
