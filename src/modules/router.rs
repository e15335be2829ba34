use super::{dish, order};
use crate::{types::Context, utils::error};
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dishes", dish::routes::get_router())
        .nest("/orders", order::routes::get_router())
        .fallback(error::not_found)
}
