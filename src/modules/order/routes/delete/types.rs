pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use axum::{http::StatusCode, response::IntoResponse};

    pub use crate::utils::error::Error;

    pub enum Success {
        OrderDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
