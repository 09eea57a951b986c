//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validating referenced rows before writes
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Conflict Translation**: Turning rejected writes into localized client responses

pub mod application;
pub mod conflict;
pub mod group;
pub mod role;
pub mod user;
