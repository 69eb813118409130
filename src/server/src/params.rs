use actix_web::HttpRequest;

use crate::app_data::DiffAppData;
use crate::errors::DiffHttpError;

pub fn app_data(req: &HttpRequest) -> Result<&DiffAppData, DiffHttpError> {
    req.app_data::<DiffAppData>()
        .ok_or(DiffHttpError::AppDataDoesNotExist)
}
