use crate::datasets::{is_known_round, Dataset, CARD_COLORS, ROUNDS};
use crate::errors::AppError;
use crate::models::{LimitQuery, PanelView, RoundQuery, RoundView, RoundsResponse};
use crate::state::AppState;
use crate::ui::{render_page, Page};
use crate::views;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use tracing::info;

pub async fn welcome() -> Html<String> {
    Html(render_page(Page::Welcome))
}

pub async fn match_performance() -> Html<String> {
    Html(render_page(Page::MatchPerformance))
}

pub async fn tournaments() -> Html<String> {
    Html(render_page(Page::Tournaments))
}

pub async fn penalty_cards() -> Html<String> {
    Html(render_page(Page::PenaltyCards))
}

pub async fn how_to_use() -> Html<String> {
    Html(render_page(Page::HowToUse))
}

pub async fn acknowledgments() -> Html<String> {
    Html(render_page(Page::Acknowledgments))
}

pub async fn get_goals_points(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<PanelView>, AppError> {
    let teams = state.load(Dataset::TeamRecords).await?;
    info!(limit = ?query.limit, "goals and points");
    Ok(Json(views::goals_and_points(&teams, query.limit)?))
}

pub async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<PanelView>, AppError> {
    let teams = state.load(Dataset::TeamRecords).await?;
    info!(limit = ?query.limit, "won and lost");
    Ok(Json(views::won_and_lost(&teams, query.limit)?))
}

pub async fn get_host_nations(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<PanelView>, AppError> {
    let hosts = state.load(Dataset::HostCountries).await?;
    info!(limit = ?query.limit, "host nations");
    Ok(Json(views::host_nations(&hosts, query.limit)?))
}

pub async fn get_medals(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<PanelView>, AppError> {
    let medals = state.load(Dataset::TeamMedals).await?;
    info!(limit = ?query.limit, "medals tally");
    Ok(Json(views::medals_tally(&medals, query.limit)?))
}

pub async fn get_penalty_round(
    State(state): State<AppState>,
    Query(query): Query<RoundQuery>,
) -> Result<Json<RoundView>, AppError> {
    let round = query.round.as_deref().unwrap_or(ROUNDS[0]).trim();
    if !is_known_round(round) {
        return Err(AppError::bad_request(format!(
            "round must be one of: {}",
            ROUNDS.join(", ")
        )));
    }

    let cards = state.load(Dataset::PenaltyCards).await?;
    info!(round, "penalty cards");
    Ok(Json(views::penalty_round(&cards, round)?))
}

pub async fn get_rounds() -> Json<RoundsResponse> {
    Json(RoundsResponse {
        rounds: ROUNDS.iter().map(|round| round.to_string()).collect(),
        card_colors: CARD_COLORS.iter().map(|color| color.to_string()).collect(),
    })
}
