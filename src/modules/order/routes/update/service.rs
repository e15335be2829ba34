use super::types::{request, response};
use crate::{
    modules::order::{
        repository::{self, UpdateOrderPayload},
        validation::{self, Submission},
    },
    types::Context,
    utils::validation::run,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = validation::order_exists(&ctx.db_conn, &payload.id).await?;

    let submission = Submission::for_order(&order, payload.body);
    run(&submission, validation::UPDATE_STEPS)?;

    let updated = repository::update_by_id(
        &ctx.db_conn,
        order.id.clone(),
        UpdateOrderPayload::from(&submission.data),
    )
    .await?
    .ok_or_else(|| response::Error::NotFound(format!("Order does not exist: {}.", order.id)))?;

    if updated.status != order.status {
        tracing::debug!(
            "Order {} moved from {} to {}",
            updated.id,
            order.status,
            updated.status
        );
    }

    Ok(response::Success::OrderUpdated(updated))
}
