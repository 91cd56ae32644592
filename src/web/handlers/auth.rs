//! Authentication handlers.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use validator::Validate;

use crate::auth::AuthService;
use crate::web::dto::{
    ApiResponse, LoginRequest, SignupRequest, UpdateNameRequest, UpdatePasswordRequest,
    UserResponse,
};
use crate::web::error::ApiError;
use crate::web::middleware::{CurrentUser, SESSION_COOKIE};

use super::AppState;

/// Build the HTTP-only session cookie carrying a freshly issued token.
fn session_cookie(token: String, max_age_secs: u64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::seconds(max_age_secs as i64))
        .build()
}

/// Build the expired cookie that clears the session on the client.
fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .http_only(true)
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

/// POST /api/auth/signup - Register a new account.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<SignupRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserResponse>>), ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let auth = AuthService::new(&state.db, &state.tokens);
    let session = auth.signup(&req.name, &req.email, &req.password).await?;

    let jar = jar.add(session_cookie(session.token, state.tokens.expiry_secs()));
    Ok((jar, Json(ApiResponse::new(session.user.into()))))
}

/// POST /api/auth/login - Authenticate and establish a session.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<UserResponse>>), ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let auth = AuthService::new(&state.db, &state.tokens);
    let session = auth.login(&req.email, &req.password).await?;

    let jar = jar.add(session_cookie(session.token, state.tokens.expiry_secs()));
    Ok((jar, Json(ApiResponse::new(session.user.into()))))
}

/// POST /api/auth/logout - Clear the session cookie.
///
/// Purely client-side invalidation: tokens are not server-tracked, so an
/// unexpired token presented again would still validate.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    let jar = jar.add(clear_session_cookie());
    (jar, Json(ApiResponse::new(())))
}

/// GET /api/auth/me - Get the current user's profile.
pub async fn me(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let auth = AuthService::new(&state.db, &state.tokens);
    let profile = auth.current_user(identity).await?;

    Ok(Json(ApiResponse::new(profile.into())))
}

/// PATCH /api/auth/name - Update the current user's display name.
pub async fn update_name(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Json(req): Json<UpdateNameRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate().map_err(ApiError::from_validation_errors)?;

    let auth = AuthService::new(&state.db, &state.tokens);
    let profile = auth.update_name(identity, &req.name).await?;

    Ok(Json(ApiResponse::new(profile.into())))
}

/// PUT /api/auth/password - Change the current user's password.
pub async fn update_password(
    State(state): State<Arc<AppState>>,
    CurrentUser(identity): CurrentUser,
    Json(req): Json<UpdatePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let auth = AuthService::new(&state.db, &state.tokens);
    auth.update_password(identity, &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::new(())))
}
