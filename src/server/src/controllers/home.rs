use actix_web::{HttpRequest, HttpResponse, Result};

use libdiffview::constants::INDEX_TEMPLATE;

use crate::errors::DiffHttpError;
use crate::helpers::render_template;
use crate::params::app_data;

/// Serve the comparison input form.
pub async fn index(req: HttpRequest) -> Result<HttpResponse, DiffHttpError> {
    let app_data = app_data(&req)?;
    render_template(app_data, INDEX_TEMPLATE, serde_json::json!({}))
}

pub async fn not_allowed(_req: HttpRequest) -> Result<HttpResponse, DiffHttpError> {
    Err(DiffHttpError::MethodNotAllowed)
}
