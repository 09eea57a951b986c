use crate::server::{
    data::application::ApplicationRepository,
    model::application::{CreateApplicationParam, UpdateApplicationParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_by_id;
mod update;
