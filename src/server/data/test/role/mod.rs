use crate::server::{
    data::role::RoleRepository,
    model::role::{CreateRoleParam, UpdateRoleParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find_by_id;
