pub mod api;
pub mod assets;
pub mod media;

pub use api::*;
pub use assets::*;
pub use media::*;
