use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{BadRequestDto, ConflictErrorDto, ErrorDto},
        pagination::PageDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::user::{CreateUserParam, UpdateUserParam},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Unknown group IDs or rejected write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PageDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_users(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = UserService::new(&state.db)
        .list(pagination.page, pagination.per_page())
        .await?;

    let dto = page.map(|user| user.into_dto());

    Ok((StatusCode::OK, Json(PageDto::from(dto))))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Unknown group IDs or rejected write", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(id, UpdateUserParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /api/users/{id}
///
/// Users that still own an application are answered with 409 and the name of the
/// application when it can be resolved.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted user"),
        (status = 400, description = "Rejected write", body = BadRequestDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User is still referenced", body = ConflictErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
