//! SeaORM entity models for the accessboard database.
//!
//! Table names follow the schema created by the `migration` crate. Join tables for the
//! many-to-many group memberships are modelled as their own entities so that `Related`
//! can traverse them.

pub mod prelude;

pub mod application;
pub mod group;
pub mod role;
pub mod role_group;
pub mod user;
pub mod user_group;
