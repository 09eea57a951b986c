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
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationDto},
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        model::application::{CreateApplicationParam, UpdateApplicationParam},
        service::application::ApplicationService,
        state::AppState,
    },
};

pub static APPLICATION_TAG: &str = "application";

#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Successfully created application", body = ApplicationDto),
        (status = 400, description = "Unknown owner or rejected write", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(payload): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db)
        .create(CreateApplicationParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(application.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved applications", body = PageDto<ApplicationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_paginated_applications(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let page = ApplicationService::new(&state.db)
        .list(pagination.page, pagination.per_page())
        .await?;

    let dto = page.map(|application| application.into_dto());

    Ok((StatusCode::OK, Json(PageDto::from(dto))))
}

#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved application", body = ApplicationDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateApplicationDto,
    responses(
        (status = 200, description = "Successfully updated application", body = ApplicationDto),
        (status = 400, description = "Unknown owner or rejected write", body = ErrorDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateApplicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let application = ApplicationService::new(&state.db)
        .update(id, UpdateApplicationParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(application.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted application"),
        (status = 400, description = "Rejected write", body = BadRequestDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_application(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    ApplicationService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
