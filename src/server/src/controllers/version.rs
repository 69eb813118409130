use actix_web::{HttpRequest, HttpResponse, Result};

use libdiffview::constants::DIFFVIEW_VERSION;
use libdiffview::view::{StatusMessage, VersionResponse};

use crate::errors::DiffHttpError;

pub async fn index(_req: HttpRequest) -> Result<HttpResponse, DiffHttpError> {
    let response = VersionResponse {
        status: StatusMessage::resource_found(),
        version: String::from(DIFFVIEW_VERSION),
    };
    Ok(HttpResponse::Ok().json(response))
}
