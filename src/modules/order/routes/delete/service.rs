use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
    utils::validation::run,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let order = validation::order_exists(&ctx.db_conn, &payload.id).await?;
    run(&order, validation::DELETE_STEPS)?;

    repository::delete_by_id(&ctx.db_conn, &order.id)
        .await?
        .map(|order| {
            tracing::debug!("Deleted order {}", order.id);
            response::Success::OrderDeleted
        })
        .ok_or_else(|| response::Error::NotFound(format!("Order does not exist: {}.", order.id)))
}
