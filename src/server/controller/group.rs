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
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::group::{CreateGroupParam, UpdateGroupParam},
        service::group::GroupService,
        state::AppState,
    },
};

pub static GROUP_TAG: &str = "group";

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Rejected write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .create(CreateGroupParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved groups", body = PageDto<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_groups(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = GroupService::new(&state.db)
        .list(pagination.page, pagination.per_page())
        .await?;

    let dto = page.map(|group| group.into_dto());

    Ok((StatusCode::OK, Json(PageDto::from(dto))))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Rejected write", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .update(id, UpdateGroupParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// DELETE /api/groups/{id}
///
/// Memberships of users and roles in the group are removed with it.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted group"),
        (status = 400, description = "Rejected write", body = BadRequestDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
