//! Session authentication middleware and extractor.

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::auth::{AuthService, AuthenticatedIdentity};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "token";

/// Extractor for authenticated requests.
///
/// Resolves the session token - cookie first, `Authorization: Bearer` as a
/// fallback - into a typed identity, exactly once per request. Handlers
/// receive the identity as a parameter and never dig the user id out of the
/// request themselves.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub AuthenticatedIdentity);

/// Pull the bearer token from the request: the `token` cookie, or the
/// Authorization header.
fn extract_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let token = extract_token(parts)
                .ok_or_else(|| ApiError::unauthorized("Missing session token"))?;

            // App state is injected into extensions by the auth_context
            // middleware
            let app_state = parts
                .extensions
                .get::<Arc<AppState>>()
                .ok_or_else(|| ApiError::internal("App state not configured"))?;

            let auth = AuthService::new(&app_state.db, &app_state.tokens);
            let identity = auth
                .resolve_session(&token)
                .await
                .map_err(ApiError::from)?;

            Ok(CurrentUser(identity))
        })
    }
}

/// Middleware function to inject app state into request extensions so the
/// `CurrentUser` extractor can reach the token service and store.
pub async fn auth_context(
    app_state: Arc<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(app_state);
    next.run(request).await
}
