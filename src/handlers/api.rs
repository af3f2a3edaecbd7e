use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::services::{Lookup, MediaService};

pub async fn get_config(media: web::Data<MediaService>) -> HttpResponse {
    HttpResponse::Ok().json(media.config())
}

/// Catalog is rebuilt on every request, off the async workers.
pub async fn list_files(media: web::Data<MediaService>) -> AppResult<HttpResponse> {
    let service = media.get_ref().clone();
    let files = web::block(move || service.list_files())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(HttpResponse::Ok().json(files))
}

pub async fn describe_file(
    name: web::Path<String>,
    media: web::Data<MediaService>,
) -> AppResult<HttpResponse> {
    let name = name.into_inner();
    let service = media.get_ref().clone();
    let lookup = {
        let name = name.clone();
        web::block(move || service.describe(&name))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    };
    match lookup {
        Lookup::Found(file) => Ok(HttpResponse::Ok().json(file)),
        Lookup::Denied => Err(AppError::Forbidden(name)),
        Lookup::NotFound => Err(AppError::NotFound(name)),
    }
}
