use actix_web::{HttpRequest, HttpResponse, Result};

use crate::errors::DiffHttpError;

/// Default service for paths with no registered route.
pub async fn index(req: HttpRequest) -> Result<HttpResponse, DiffHttpError> {
    log::debug!("404 no route for {} {}", req.method(), req.path());
    Err(DiffHttpError::NotFound)
}
