use super::types::response;
use crate::{modules::dish::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(&ctx.db_conn)
        .await
        .map(response::Success::Dishes)
        .map_err(Into::into)
}
