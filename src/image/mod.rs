//! Image conversion core: dimension math, the extension allow-list, the
//! processor backend and the pipeline that ties them together.

pub mod conversion;
pub mod dimension;
pub mod extension;
pub mod image_rs_processor;
pub mod processor;
pub mod upload;
