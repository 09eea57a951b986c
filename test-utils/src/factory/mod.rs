//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let application = factory::create_application(&db, user.id).await?;
//!
//! let group = factory::group::GroupFactory::new(&db)
//!     .name("Operators")
//!     .build()
//!     .await?;
//! ```

pub mod application;
pub mod group;
pub mod helpers;
pub mod role;
pub mod user;

pub use application::create_application;
pub use group::create_group;
pub use role::create_role;
pub use user::create_user;
