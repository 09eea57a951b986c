//! HTTP request handlers.
//!
//! Controllers convert DTOs into parameter models, call the service layer and convert the
//! resulting domain models back into DTOs. Errors are returned as `AppError` and turned
//! into responses by its `IntoResponse` implementation.

pub mod application;
pub mod group;
pub mod param;
pub mod role;
pub mod user;
