use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Emits one `request_completed` event per request.
///
/// Level follows the status class: 5xx `error`, 4xx `warn`, otherwise `info`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_owned();
        let trace_id = req
            .extensions()
            .get::<String>()
            .cloned()
            .unwrap_or_else(|| "unknown".to_owned());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route) = match &result {
                Ok(res) => (res.status(), res.request().match_pattern()),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            // `/api/games/{game_id}/rounds` rather than one path per game
            let route = route.unwrap_or(path);
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            macro_rules! completed {
                ($level:ident) => {
                    $level!(
                        http.method = %method,
                        http.route = %route,
                        http.status_code = status.as_u16(),
                        elapsed_ms,
                        trace_id = %trace_id,
                        "request_completed"
                    )
                };
            }

            if status.is_server_error() {
                completed!(error);
            } else if status.is_client_error() {
                completed!(warn);
            } else {
                completed!(info);
            }

            result
        })
    }
}
