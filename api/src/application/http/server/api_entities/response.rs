use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response as AxumResponse},
};
use serde::Serialize;

/// The `{"data": ...}` envelope every successful request carries.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T: Serialize> {
    pub data: T,
}

pub enum Response<T: Serialize> {
    OK(T),
    Created(T),
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> AxumResponse {
        match self {
            Response::OK(body) => {
                (StatusCode::OK, Json(DataEnvelope { data: body })).into_response()
            }
            Response::Created(body) => {
                (StatusCode::CREATED, Json(DataEnvelope { data: body })).into_response()
            }
        }
    }
}
