use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{Debug, Display};

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        database_error(err)
    }
}

// codes 1..=99 are internal and never leak their message,
// 200..=299 map to not found, 300..=399 to unauthorized,
// everything else is a bad request carrying its message
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            200..=299 => (StatusCode::NOT_FOUND, self.message.as_str()),
            300..=399 => (StatusCode::UNAUTHORIZED, self.message.as_str()),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn database_error<T: Debug>(_: T) -> Error {
    Error {
        code: 2,
        message: "database error".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn geocoding_error<T: Display>(address: &str, detail: T) -> Error {
    Error {
        code: 102,
        message: format!("error geocoding address \"{}\": {}", address, detail),
    }
}

pub fn route_error<T: Display>(detail: T) -> Error {
    Error {
        code: 103,
        message: format!("error calculating route: {}", detail),
    }
}

pub fn not_found_error(entity: &str, id: &uuid::Uuid) -> Error {
    Error {
        code: 201,
        message: format!("{} with id {} not found", entity, id),
    }
}

pub fn unauthorized_error(message: &str) -> Error {
    Error {
        code: 301,
        message: message.into(),
    }
}
