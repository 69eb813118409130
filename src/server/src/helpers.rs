use actix_web::HttpResponse;
use serde::Serialize;

use crate::app_data::DiffAppData;
use crate::errors::DiffHttpError;

/// Render a template from the app's environment into a 200 response.
/// Resolution and execution failures bubble up as template errors (500).
pub fn render_template<S: Serialize>(
    app_data: &DiffAppData,
    name: &str,
    ctx: S,
) -> Result<HttpResponse, DiffHttpError> {
    let template = app_data.env.get_template(name)?;
    let body = template.render(ctx)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
