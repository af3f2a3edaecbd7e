use serde::Serialize;

mod media;
pub use media::*;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
