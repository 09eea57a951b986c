use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{BadRequestDto, ErrorDto},
        pagination::PageDto,
        role::{CreateRoleDto, RoleDto, UpdateRoleDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::role::{CreateRoleParam, UpdateRoleParam},
        service::role::RoleService,
        state::AppState,
    },
};

pub static ROLE_TAG: &str = "role";

#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Successfully created role", body = RoleDto),
        (status = 400, description = "Unknown group IDs or rejected write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleService::new(&state.db)
        .create(CreateRoleParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved roles", body = PageDto<RoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_roles(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = RoleService::new(&state.db)
        .list(pagination.page, pagination.per_page())
        .await?;

    let dto = page.map(|role| role.into_dto());

    Ok((StatusCode::OK, Json(PageDto::from(dto))))
}

#[utoipa::path(
    get,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved role", body = RoleDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Successfully updated role", body = RoleDto),
        (status = 400, description = "Unknown group IDs or rejected write", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleService::new(&state.db)
        .update(id, UpdateRoleParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(
        ("id" = Uuid, Path, description = "Role ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted role"),
        (status = 400, description = "Rejected write", body = BadRequestDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    RoleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
