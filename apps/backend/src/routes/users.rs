//! User directory and the caller's own profile.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::repos::users::User;
use crate::services::users;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UserResponse {
    id: i64,
    display_name: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub display_name: String,
}

/// GET /api/users
async fn list_users(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let body: Vec<UserResponse> = users::list_users(db)
        .await?
        .into_iter()
        .map(|u| UserResponse {
            id: u.id,
            display_name: u.display_name,
            email: u.email,
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/users/me
async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(user))
}

/// PATCH /api/users/me
async fn update_me(
    user: CurrentUser,
    body: ValidatedJson<UpdateProfileRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let User {
        id,
        sub,
        display_name,
        email,
        profile_completed,
        ..
    } = users::update_profile(db, user.id, &body.display_name).await?;

    Ok(HttpResponse::Ok().json(CurrentUser {
        id,
        sub,
        display_name,
        email,
        profile_completed,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_users)).service(
        web::resource("/me")
            .route(web::get().to(me))
            .route(web::patch().to(update_me)),
    );
}
