pub mod auth_token;
pub mod current_user;
pub mod game_id;
pub mod validated_json;

pub use auth_token::AuthToken;
pub use current_user::CurrentUser;
pub use game_id::GameId;
pub use validated_json::ValidatedJson;

use actix_web::{web, HttpRequest};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Shared state registered with the app, or an internal error when it is missing.
pub(crate) fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("AppState not available"))
}
