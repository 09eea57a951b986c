//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, including conflict translation
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types, query failure classification
//!   and HTTP response mapping
//! - **Middleware** (`middleware/`) - Localized translation of rejected database writes
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Localization** (`i18n`) - Message sets for conflict and bad request responses
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** converts DTOs to params, calls service
//! 3. **Service** validates and orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//! 6. **Middleware** rewrites responses of rejected writes into localized 409/400 bodies

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;

#[cfg(test)]
mod test;
