#![forbid(unsafe_code)]

pub mod assets;
pub mod canvas;
pub mod error;
pub mod icns;
pub mod logo;
pub mod png;

pub use assets::{AssetPaths, write_assets};
pub use canvas::{Canvas, Rgba};
pub use error::{ArcmarkError, ArcmarkResult};
pub use icns::{ICNS_MAGIC, IconEntry, IconType, assemble, build_icon_family};
pub use logo::{REFERENCE_SIZE, compose_logo, scaled};
pub use png::{PNG_SIGNATURE, encode_png, encode_rgba};
