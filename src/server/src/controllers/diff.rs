use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;

use libdiffview::constants::DIFF_TEMPLATE;
use libdiffview::view::DiffView;

use crate::errors::DiffHttpError;
use crate::helpers::render_template;
use crate::params::app_data;

/// Fields submitted from the comparison form. Absent fields are treated as
/// empty text, not as an error.
#[derive(Deserialize, Debug)]
pub struct DiffPageData {
    #[serde(default)]
    pub text1: String,
    #[serde(default)]
    pub text2: String,
}

/// Compute the diff between the submitted texts and render the result page.
pub async fn create(
    req: HttpRequest,
    form: web::Form<DiffPageData>,
) -> Result<HttpResponse, DiffHttpError> {
    let app_data = app_data(&req)?;
    let DiffPageData { text1, text2 } = form.into_inner();
    log::debug!(
        "diff::create comparing {} bytes against {} bytes",
        text1.len(),
        text2.len()
    );

    let view = DiffView::from_texts(text1, text2);
    render_template(app_data, DIFF_TEMPLATE, &view)
}

pub async fn not_allowed(_req: HttpRequest) -> Result<HttpResponse, DiffHttpError> {
    Err(DiffHttpError::MethodNotAllowed)
}
