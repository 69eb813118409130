use actix_web::{HttpRequest, HttpResponse, Result};

use libdiffview::view::StatusMessage;

use crate::errors::DiffHttpError;

pub async fn index(_req: HttpRequest) -> Result<HttpResponse, DiffHttpError> {
    Ok(HttpResponse::Ok().json(StatusMessage::resource_found()))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use crate::controllers;
    use crate::routes;

    #[actix_web::test]
    async fn test_health_returns_success() {
        let app = test::init_service(
            App::new()
                .app_data(crate::test::app_data())
                .configure(routes::config)
                .default_service(web::route().to(controllers::not_found::index)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
    }
}
