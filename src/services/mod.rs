pub mod assets;
pub mod catalog;
pub mod resolver;

mod media;
pub use media::*;

pub use assets::{Asset, AssetService};
pub use resolver::{Lookup, MediaStream, PathCheck, Resolution};
