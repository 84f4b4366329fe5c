//! HTTP surface: three POST routes, one per pipeline stage.
//!
//! Stage failures are answered with `200 OK` and an `{"error": ...}` body. Requests
//! that cannot be decoded at all get `422 Unprocessable Entity` with the same body
//! shape.

mod handlers;
mod responses;

use actix_web::{error::InternalError, web, HttpResponse};

pub use responses::{PredictRequest, PredictResponse, TrainResponse, UploadResponse};
use responses::ErrorResponse;

/// Registers the routes and the JSON body settings. Expects a
/// `web::Data<StoragePaths>` to be registered on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/upload", web::post().to(handlers::upload))
        .route("/train", web::post().to(handlers::train))
        .route("/predict", web::post().to(handlers::predict));
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = ErrorResponse {
            error: err.to_string(),
        };
        InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body)).into()
    })
}
