use actix_web::web;
use time::OffsetDateTime;

pub mod deck;
pub mod games;
pub mod health;
pub mod rounds;
pub mod users;

/// Register every route; shared by `main.rs` and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Deck lookup: /api/deck-requirements/**
    cfg.service(web::scope("/api/deck-requirements").configure(deck::configure_routes));

    // User directory and profile: /api/users/**
    cfg.service(web::scope("/api/users").configure(users::configure_routes));

    // Games and rounds: /api/games/**
    cfg.service(
        web::scope("/api/games")
            .configure(games::configure_routes)
            .configure(rounds::configure_routes),
    );
}

/// RFC 3339 timestamp for response bodies.
pub(crate) fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string())
}
