//! Translation of rejected database writes into localized responses.
//!
//! `AppError` marks responses for failed queries with the `QueryFailure` extension. This
//! layer runs after the handler, picks the language from the request's `Accept-Language`
//! header and replaces any marked response with the conflict translator's 409 or 400.

use axum::{
    extract::{Request, State},
    http::{header::ACCEPT_LANGUAGE, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::api::{BadRequestDto, ConflictErrorDto},
    server::{
        data::reference::ReferenceRepository,
        error::query::QueryFailure,
        i18n::Language,
        model::conflict::{ConflictReport, Translation},
        service::conflict::ConflictTranslator,
        state::AppState,
    },
};

/// Middleware replacing responses marked with a `QueryFailure`.
pub async fn translate_query_failures(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let language = Language::from_accept_language(
        request
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok()),
    );

    let mut response = next.run(request).await;

    let Some(failure) = response.extensions_mut().remove::<QueryFailure>() else {
        return response;
    };

    let lookup = ReferenceRepository::new(&state.db);

    ConflictTranslator::new(&lookup)
        .translate(&failure, language)
        .await
        .into_response()
}

impl IntoResponse for Translation {
    fn into_response(self) -> Response {
        match self {
            Self::Conflict { message, cascade } => (
                StatusCode::CONFLICT,
                Json(ConflictErrorDto {
                    status_code: StatusCode::CONFLICT.as_u16(),
                    message,
                    cascade: cascade.map(ConflictReport::into_dto),
                }),
            )
                .into_response(),
            Self::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(BadRequestDto {
                    status_code: StatusCode::BAD_REQUEST.as_u16(),
                    message,
                }),
            )
                .into_response(),
        }
    }
}
