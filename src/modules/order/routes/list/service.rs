use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    repository::find_many(&ctx.db_conn)
        .await
        .map(response::Success::Orders)
        .map_err(Into::into)
}
