use actix_files::NamedFile;
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult};
use crate::services::{Lookup, MediaService};

/// Stream one media file. Range requests and conditional headers are handled
/// by `NamedFile`; the content type always comes from the media table.
pub async fn serve_media(
    req: HttpRequest,
    name: web::Path<String>,
    media: web::Data<MediaService>,
) -> AppResult<HttpResponse> {
    let name = name.into_inner();
    let service = media.get_ref().clone();
    let resolution = {
        let name = name.clone();
        web::block(move || service.resolve(&name))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
    };

    match resolution {
        Lookup::Found(stream) => {
            let content_type = stream.content_type;
            let file = NamedFile::from_file(stream.file, &stream.path)?.use_last_modified(true);
            let mut res = file.into_response(&req);
            res.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static(content_type),
            );
            Ok(res)
        }
        Lookup::Denied => Err(AppError::Forbidden(name)),
        Lookup::NotFound => Err(AppError::NotFound(name)),
    }
}
