use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::jwt::AuthUser,
    error::AppResult,
    state::AppState,
    users::{dto::ContactUser, repo_types::User},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_contacts))
}

/// Everyone except the caller, projected down to sidebar fields.
#[instrument(skip(state))]
pub async fn list_contacts(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<Vec<ContactUser>>> {
    let users = User::list_except(&state.db, user_id).await?;
    info!(caller = %user_id, count = users.len(), "contact list served");
    Ok(Json(users.into_iter().map(ContactUser::from).collect()))
}
