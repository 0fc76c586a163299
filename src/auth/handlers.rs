use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        avatar::profile_pic_url,
        dto::{LoginRequest, MessageResponse, PublicUser, SignupRequest},
        jwt::JwtKeys,
        password::{dummy_hash, hash_password, verify_password},
    },
    error::{AppError, AppResult},
    state::AppState,
    users::{repo::is_unique_violation, repo_types::User},
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Signs a session token for the user and wraps it in a `Set-Cookie` header.
fn session_headers(keys: &JwtKeys, user_id: Uuid) -> AppResult<HeaderMap> {
    let token = keys.sign(user_id)?;
    let cookie = keys.session_cookie(&token).map_err(anyhow::Error::new)?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);
    Ok(headers)
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<impl IntoResponse> {
    let gender = payload.validate()?;
    let username = payload.username.trim();

    // Advisory pre-check; the unique constraint closes the race below.
    if let Ok(Some(_)) = User::find_by_username(&state.db, username).await {
        warn!(%username, "username already exists");
        return Err(AppError::UsernameTaken);
    }

    let hash = hash_password(&payload.password)?;
    let profile_pic = profile_pic_url(&state.config.avatar_base_url, gender, username);

    let user = match User::create(
        &state.db,
        payload.full_name.trim(),
        username,
        &hash,
        gender,
        &profile_pic,
    )
    .await
    {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(%username, "concurrent signup took the username");
            return Err(AppError::UsernameTaken);
        }
        Err(e) => return Err(e.into()),
    };

    let keys = JwtKeys::from_ref(&state);
    let headers = session_headers(&keys, user.id)?;

    info!(user_id = %user.id, username = %user.username, "user signed up");
    Ok((StatusCode::CREATED, headers, Json(PublicUser::from(user))))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let username = payload.username.trim();

    let user = User::find_by_username(&state.db, username).await?;

    // Unknown usernames still pay for a hash comparison so the timing stays
    // close to the wrong-password path.
    let stored_hash = user
        .as_ref()
        .map(|u| u.password_hash.as_str())
        .unwrap_or_else(|| dummy_hash());
    let ok = verify_password(&payload.password, stored_hash)?;

    let Some(user) = user else {
        warn!(%username, "login with unknown username");
        return Err(AppError::InvalidCredentials);
    };
    if !ok {
        warn!(user_id = %user.id, %username, "login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let headers = session_headers(&keys, user.id)?;

    info!(user_id = %user.id, %username, "user logged in");
    Ok((StatusCode::OK, headers, Json(PublicUser::from(user))))
}

#[instrument(skip(state))]
pub async fn logout(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let keys = JwtKeys::from_ref(&state);
    let cookie = keys.clear_session_cookie().map_err(anyhow::Error::new)?;
    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    info!("session cookie cleared");
    Ok((
        StatusCode::OK,
        headers,
        Json(MessageResponse {
            message: "Logged out successfully".into(),
        }),
    ))
}
