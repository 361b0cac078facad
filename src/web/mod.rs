//! HTTP transport: routes, multipart binding and responses.

pub mod cors;
pub mod error;
pub mod form;
pub mod handlers;
pub mod router;
