use actix_web::{web, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::services::{AssetService, Lookup};

pub async fn serve_static(
    path: web::Path<String>,
    assets: web::Data<AssetService>,
) -> AppResult<HttpResponse> {
    let path = path.into_inner();
    let service = assets.get_ref().clone();
    let lookup = {
        let path = path.clone();
        web::block(move || service.get(&path))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    };
    match lookup {
        Lookup::Found(asset) => Ok(HttpResponse::Ok()
            .content_type(asset.content_type)
            .body(asset.content.into_owned())),
        Lookup::Denied => Err(AppError::Forbidden(path)),
        Lookup::NotFound => Err(AppError::NotFound(format!("File '{}' not found", path))),
    }
}
