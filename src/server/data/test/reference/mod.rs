use crate::server::{
    data::reference::ReferenceRepository, error::lookup::ReferenceLookupError,
    model::conflict::ReferenceRow, service::conflict::ReferenceLookup,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod find_reference;
