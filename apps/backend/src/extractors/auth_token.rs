use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};

use crate::AppError;

/// Bearer token taken from the Authorization header
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub(crate) fn from_header(req: &HttpRequest) -> Result<Self, AppError> {
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(AppError::unauthorized_missing_bearer)?;

        let mut parts = value.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => {
                Ok(AuthToken {
                    token: token.to_string(),
                })
            }
            _ => Err(AppError::unauthorized_missing_bearer()),
        }
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        std::future::ready(Self::from_header(req))
    }
}
