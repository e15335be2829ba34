use super::types::{request, response};
use crate::{
    modules::order::{
        repository::{self, CreateOrderPayload},
        validation::{self, Submission},
    },
    types::Context,
    utils::validation::run,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let submission = Submission::new(payload.body);
    run(&submission, validation::CREATE_STEPS)?;

    let order =
        repository::create(&ctx.db_conn, CreateOrderPayload::from(&submission.data)).await?;

    tracing::debug!("Created order {} with status {}", order.id, order.status);

    Ok(response::Success::OrderCreated(order))
}
