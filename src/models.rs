use crate::chart::Figure;
use crate::pipeline::LimitPolicy;
use crate::table::Table;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: LimitPolicy,
}

#[derive(Debug, Deserialize)]
pub struct RoundQuery {
    pub round: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LimitOption {
    pub value: LimitPolicy,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct PanelView {
    pub limit: LimitPolicy,
    pub options: Vec<LimitOption>,
    pub figure: Figure,
    pub grid: Table,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CardPanel {
    Chart {
        card_color: String,
        figure: Figure,
        counts: Table,
    },
    NoData {
        card_color: String,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct RoundView {
    pub round: String,
    pub panels: Vec<CardPanel>,
    pub grid: Table,
}

#[derive(Debug, Serialize)]
pub struct RoundsResponse {
    pub rounds: Vec<String>,
    pub card_colors: Vec<String>,
}
