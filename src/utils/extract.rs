use super::error::Error;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejections go through [`Error`].
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => Ok(Self(body)),
            Err(rejection) => {
                tracing::warn!("Rejected request body: {}", rejection.body_text());
                Err(Error::BadRequest(rejection.body_text()))
            }
        }
    }
}

/// The single `:id` segment of a route, rejected through [`Error`].
pub struct RouteId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RouteId
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => {
                tracing::warn!("Rejected route id: {}", rejection.body_text());
                Err(Error::BadRequest(rejection.body_text()))
            }
        }
    }
}
