use super::types::{request, response};
use crate::{modules::dish::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    validation::dish_exists(&ctx.db_conn, &payload.id)
        .await
        .map(response::Success::Dish)
}
