pub mod request {
    pub use crate::modules::order::validation::Body;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::order::repository::Order;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub use crate::utils::error::Error;

    pub enum Success {
        OrderCreated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderCreated(order) => {
                    (StatusCode::CREATED, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
