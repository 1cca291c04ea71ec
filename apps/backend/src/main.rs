use actix_web::{web, App, HttpServer};
use kingscore::config::db::DbKind;
use kingscore::infra::state::build_state;
use kingscore::middleware::cors::cors_middleware;
use kingscore::middleware::request_trace::RequestTrace;
use kingscore::middleware::structured_logger::StructuredLogger;
use kingscore::middleware::trace_span::TraceSpan;
use kingscore::routes;
use kingscore::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment.
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt = match std::env::var("BACKEND_JWT_SECRET") {
        Ok(jwt) => jwt,
        Err(_) => {
            eprintln!("BACKEND_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt.as_bytes());

    let db_kind = match DbKind::from_env() {
        Ok(kind) => kind,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db(db_kind.clone())
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%host, port, db_kind = ?db_kind, "starting kingscore backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
