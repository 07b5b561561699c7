use crate::handlers;
use crate::state::AppState;
use crate::ui::Page;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Page::Welcome.path(), get(handlers::welcome))
        .route(Page::MatchPerformance.path(), get(handlers::match_performance))
        .route(Page::Tournaments.path(), get(handlers::tournaments))
        .route(Page::PenaltyCards.path(), get(handlers::penalty_cards))
        .route(Page::HowToUse.path(), get(handlers::how_to_use))
        .route(Page::Acknowledgments.path(), get(handlers::acknowledgments))
        .route("/api/match-performance/goals", get(handlers::get_goals_points))
        .route("/api/match-performance/results", get(handlers::get_results))
        .route("/api/tournaments/hosts", get(handlers::get_host_nations))
        .route("/api/tournaments/medals", get(handlers::get_medals))
        .route("/api/penalty-cards", get(handlers::get_penalty_round))
        .route("/api/penalty-cards/rounds", get(handlers::get_rounds))
        .with_state(state)
}
