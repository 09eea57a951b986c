use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{BadRequestDto, CascadeDto, ConflictErrorDto, ErrorDto},
        application::{ApplicationDto, CreateApplicationDto, UpdateApplicationDto},
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
        role::{CreateRoleDto, RoleDto, UpdateRoleDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{application, group, role, user},
        middleware::conflict::translate_query_failures,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        user::get_paginated_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        role::create_role,
        role::get_paginated_roles,
        role::get_role,
        role::update_role,
        role::delete_role,
        group::create_group,
        group::get_paginated_groups,
        group::get_group,
        group::update_group,
        group::delete_group,
        application::create_application,
        application::get_paginated_applications,
        application::get_application,
        application::update_application,
        application::delete_application,
    ),
    components(schemas(
        ErrorDto,
        ConflictErrorDto,
        CascadeDto,
        BadRequestDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        RoleDto,
        CreateRoleDto,
        UpdateRoleDto,
        GroupDto,
        CreateGroupDto,
        UpdateGroupDto,
        ApplicationDto,
        CreateApplicationDto,
        UpdateApplicationDto,
    )),
    tags(
        (name = user::USER_TAG, description = "User management"),
        (name = role::ROLE_TAG, description = "Role management"),
        (name = group::GROUP_TAG, description = "Group management"),
        (name = application::APPLICATION_TAG, description = "Application management"),
    )
)]
pub struct ApiDoc;

/// API routes without documentation or transport layers.
///
/// Every route sits behind the query failure translation layer, so rejected writes from
/// any handler are answered with localized 409/400 bodies.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/users",
            get(user::get_paginated_users).post(user::create_user),
        )
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/roles",
            get(role::get_paginated_roles).post(role::create_role),
        )
        .route(
            "/api/roles/{id}",
            get(role::get_role)
                .patch(role::update_role)
                .delete(role::delete_role),
        )
        .route(
            "/api/groups",
            get(group::get_paginated_groups).post(group::create_group),
        )
        .route(
            "/api/groups/{id}",
            get(group::get_group)
                .patch(group::update_group)
                .delete(group::delete_group),
        )
        .route(
            "/api/applications",
            get(application::get_paginated_applications).post(application::create_application),
        )
        .route(
            "/api/applications/{id}",
            get(application::get_application)
                .patch(application::update_application)
                .delete(application::delete_application),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            translate_query_failures,
        ))
        .with_state(state)
}

/// Full application router with Swagger UI, CORS and request tracing.
pub fn router(state: AppState) -> Router {
    api_router(state)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
