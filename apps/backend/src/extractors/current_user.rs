use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;
use tracing::debug;

use super::{app_state, AuthToken};
use crate::auth::jwt::verify_access_token;
use crate::db::require_db;
use crate::error::AppError;
use crate::services::users;

/// The authenticated caller's profile.
///
/// Verifies the bearer token and makes sure a `users` row exists for its
/// subject, creating one on the first authenticated request.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub sub: String,
    pub display_name: String,
    pub email: Option<String>,
    pub profile_completed: bool,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = AuthToken::from_header(&req)?;
            let state = app_state(&req)?;
            let claims = verify_access_token(&token.token, &state.security)?;

            let db = require_db(&state)?;
            let user = users::ensure_user(
                db,
                &claims.sub,
                claims.name.as_deref(),
                claims.email.as_deref(),
            )
            .await?;
            debug!(user_id = user.id, "authenticated");

            Ok(CurrentUser {
                id: user.id,
                sub: user.sub,
                display_name: user.display_name,
                email: user.email,
                profile_completed: user.profile_completed,
            })
        })
    }
}
