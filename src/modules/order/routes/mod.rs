mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::{types::Context, utils::error};
use axum::routing::{any, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(list::get_router())
        .merge(create::get_router())
        .merge(get::get_router())
        .merge(update::get_router())
        .merge(delete::get_router())
        .route("/", any(error::method_not_allowed))
        .route("/:orderId", any(error::method_not_allowed))
}
