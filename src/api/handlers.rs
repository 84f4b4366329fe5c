use actix_multipart::{Multipart, MultipartError};
use actix_web::{error::BlockingError, web, HttpResponse};
use futures::TryStreamExt;
use log::warn;
use serde::Serialize;

use super::responses::{
    ErrorResponse, PredictRequest, PredictResponse, TrainResponse, UploadResponse,
};
use crate::{
    config::StoragePaths,
    dataset,
    error::{PipelineErr, Result},
    inference::{self, Reading},
    training,
};

/// Name of the multipart field carrying the dataset.
const FILE_FIELD: &str = "file";

pub async fn upload(storage: web::Data<StoragePaths>, mut payload: Multipart) -> HttpResponse {
    let bytes = match read_file_field(&mut payload).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return unprocessable(format!("missing multipart field '{FILE_FIELD}'")),
        Err(e) => return unprocessable(e.to_string()),
    };

    let storage = storage.into_inner();
    let result = web::block(move || dataset::upload(&storage, &bytes)).await;
    respond::<_, UploadResponse>(joined(result))
}

pub async fn train(storage: web::Data<StoragePaths>) -> HttpResponse {
    let storage = storage.into_inner();
    let result = web::block(move || training::train(&storage)).await;
    respond::<_, TrainResponse>(joined(result))
}

pub async fn predict(
    storage: web::Data<StoragePaths>,
    body: web::Json<PredictRequest>,
) -> HttpResponse {
    let PredictRequest {
        temperature,
        run_time,
    } = body.into_inner();
    let reading = Reading {
        temperature,
        run_time,
    };

    let storage = storage.into_inner();
    let result = web::block(move || inference::predict(&storage, reading)).await;
    respond::<_, PredictResponse>(joined(result))
}

/// Drains the multipart stream until the dataset field shows up.
async fn read_file_field(
    payload: &mut Multipart,
) -> std::result::Result<Option<Vec<u8>>, MultipartError> {
    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
        }

        return Ok(Some(bytes));
    }

    Ok(None)
}

fn joined<T>(result: std::result::Result<Result<T>, BlockingError>) -> Result<T> {
    result.map_err(|e| PipelineErr::Blocking(e.to_string()))?
}

fn respond<T, B>(result: Result<T>) -> HttpResponse
where
    B: From<T> + Serialize,
{
    match result {
        Ok(value) => HttpResponse::Ok().json(B::from(value)),
        Err(e) => {
            warn!("request failed ({:?}): {e}", e.kind());
            HttpResponse::Ok().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

fn unprocessable(error: String) -> HttpResponse {
    warn!("rejected upload: {error}");
    HttpResponse::UnprocessableEntity().json(ErrorResponse { error })
}
