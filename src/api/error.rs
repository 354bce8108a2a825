use crate::application_port::*;
use crate::logger::*;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use warp::http::StatusCode;
use warp::{Rejection, reject};

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (code, message) = if let Some(rejection) = err.find::<ApiRejection>() {
        (rejection.code.clone(), rejection.message.clone())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (ApiErrorCode::ValidationFailed, e.to_string())
    } else if let Some(e) = err.find::<reject::InvalidQuery>() {
        (ApiErrorCode::ValidationFailed, e.to_string())
    } else if let Some(e) = err.find::<reject::UnsupportedMediaType>() {
        (ApiErrorCode::ValidationFailed, e.to_string())
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        let code = ApiErrorCode::MethodNotAllowed;
        let message = code.to_string();
        (code, message)
    } else if err.is_not_found() {
        let code = ApiErrorCode::NotFound;
        let message = code.to_string();
        (code, message)
    } else {
        error!("unhandled rejection: {:?}", err);
        let code = ApiErrorCode::InternalError;
        let message = code.to_string();
        (code, message)
    };

    let status = code.status();
    let json = warp::reply::json(&ApiError { code, message });
    Ok(warp::reply::with_status(json, status))
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ApiErrorCode {
    #[error("Request does not match the schema")]
    ValidationFailed,
    #[error("User with this login already exists")]
    DuplicateLogin,
    #[error("User with this id already exists")]
    DuplicateId,
    #[error("Not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Internal error")]
    InternalError,
}

impl ApiErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::ValidationFailed
            | ApiErrorCode::DuplicateLogin
            | ApiErrorCode::DuplicateId => StatusCode::BAD_REQUEST,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A handler failure carried through warp's rejection chain to `recover_error`.
#[derive(Debug)]
pub struct ApiRejection {
    pub code: ApiErrorCode,
    pub message: String,
}

impl reject::Reject for ApiRejection {}

impl From<UserError> for ApiRejection {
    fn from(error: UserError) -> Self {
        let code = match error {
            UserError::Validation(_) => ApiErrorCode::ValidationFailed,
            UserError::DuplicateLogin(_) => ApiErrorCode::DuplicateLogin,
            UserError::DuplicateId(_) => ApiErrorCode::DuplicateId,
            UserError::NotFound(_) => ApiErrorCode::NotFound,
        };
        ApiRejection {
            code,
            message: error.to_string(),
        }
    }
}
