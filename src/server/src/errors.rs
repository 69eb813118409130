use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use std::fmt;

#[derive(Debug)]
pub enum DiffHttpError {
    NotFound,
    MethodNotAllowed,
    AppDataDoesNotExist,
    BadRequest(String),
    TemplateError(minijinja::Error),
    InternalServerError,
}

impl fmt::Display for DiffHttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffHttpError::NotFound => write!(f, "Not found"),
            DiffHttpError::MethodNotAllowed => write!(f, "Method not allowed"),
            DiffHttpError::AppDataDoesNotExist => write!(f, "App data does not exist"),
            DiffHttpError::BadRequest(msg) => write!(f, "Bad request: {msg}"),
            DiffHttpError::TemplateError(err) => write!(f, "Template error: {err}"),
            DiffHttpError::InternalServerError => write!(f, "Internal server error"),
        }
    }
}

impl From<minijinja::Error> for DiffHttpError {
    fn from(err: minijinja::Error) -> Self {
        DiffHttpError::TemplateError(err)
    }
}

impl ResponseError for DiffHttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            DiffHttpError::NotFound => StatusCode::NOT_FOUND,
            DiffHttpError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            DiffHttpError::AppDataDoesNotExist => StatusCode::BAD_REQUEST,
            DiffHttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DiffHttpError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DiffHttpError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            DiffHttpError::NotFound => HttpResponse::NotFound().body("404 page not found"),
            DiffHttpError::MethodNotAllowed => {
                HttpResponse::MethodNotAllowed().body("Method not allowed")
            }
            DiffHttpError::AppDataDoesNotExist => {
                log::error!("App data does not exist");
                HttpResponse::BadRequest().body("App data does not exist")
            }
            DiffHttpError::BadRequest(msg) => {
                HttpResponse::BadRequest().body(format!("Bad request: {msg}"))
            }
            DiffHttpError::TemplateError(err) => {
                log::error!("Template error: {err}");
                HttpResponse::InternalServerError().body(err.to_string())
            }
            DiffHttpError::InternalServerError => {
                HttpResponse::InternalServerError().body("Internal server error")
            }
        }
    }
}
