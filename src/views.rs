use crate::chart::{self, ChartKind, Figure, Panel};
use crate::datasets::{columns::*, CARD_COLORS};
use crate::models::{CardPanel, LimitOption, PanelView, RoundView};
use crate::pipeline::{filter_eq, filter_in, rank, round_counts, sort_desc, value_counts, LimitPolicy};
use crate::table::{Table, TableError, Value};

const POINTS_COLOR: &str = "#fe218b";
const SCORED_COLOR: &str = "#fed700";
const CONCEDED_COLOR: &str = "#21b0fe";

const PLAYED_COLOR: &str = "#26547c";
const WON_COLOR: &str = "#ef476f";
const DRAWN_COLOR: &str = "#ffd166";
const LOST_COLOR: &str = "#06d6a0";

const MEDAL_COLORS: [(&str, &str); 3] = [(GOLD, "#fca311"), (SILVER, "#e5e5e5"), (BRONZE, "#14213d")];

fn options(noun: &str) -> Vec<LimitOption> {
    LimitPolicy::OPTIONS
        .iter()
        .map(|&value| LimitOption {
            value,
            label: value.label(noun),
        })
        .collect()
}

fn bar_panel(table: &Table, metric: &str, title: &str, color: &str) -> Result<Panel, TableError> {
    Ok(Panel {
        title: title.to_string(),
        kind: ChartKind::Bar,
        series: vec![chart::series(table, TEAM, metric, title, Some(color))?],
        show_values: false,
    })
}

pub fn goals_and_points(teams: &Table, limit: LimitPolicy) -> Result<PanelView, TableError> {
    let points = rank(teams, TOTAL_POINTS, limit, None)?;
    let scored = rank(teams, GOALS_SCORED, limit, None)?;
    let conceded = rank(teams, GOALS_CONCEDED, limit, None)?;

    let figure = Figure {
        title: "Goals & Points Subplots".to_string(),
        rows: 1,
        cols: 3,
        panels: vec![
            bar_panel(&points, TOTAL_POINTS, "Total Points", POINTS_COLOR)?,
            bar_panel(&scored, GOALS_SCORED, "Goals Scored", SCORED_COLOR)?,
            bar_panel(&conceded, GOALS_CONCEDED, "Goals Conceded", CONCEDED_COLOR)?,
        ],
    };

    Ok(PanelView {
        limit,
        options: options("teams"),
        figure,
        grid: points,
    })
}

// The won/drawn/lost panels reuse the teams picked by matches played.
pub fn won_and_lost(teams: &Table, limit: LimitPolicy) -> Result<PanelView, TableError> {
    let played = rank(teams, MATCHES_PLAYED, limit, None)?;
    let selected = filter_in(teams, TEAM, &played.values(TEAM)?)?;

    let won = sort_desc(&selected, WON)?;
    let drawn = sort_desc(&selected, DRAWN)?;
    let lost = sort_desc(&selected, LOST)?;

    let figure = Figure {
        title: "Match Statistics Subplots".to_string(),
        rows: 2,
        cols: 2,
        panels: vec![
            bar_panel(&played, MATCHES_PLAYED, "Matches Played", PLAYED_COLOR)?,
            bar_panel(&won, WON, "Matches Won", WON_COLOR)?,
            bar_panel(&drawn, DRAWN, "Matches Drawn", DRAWN_COLOR)?,
            bar_panel(&lost, LOST, "Matches Lost", LOST_COLOR)?,
        ],
    };

    Ok(PanelView {
        limit,
        options: options("teams"),
        figure,
        grid: played,
    })
}

// Co-hosted tournaments contribute fractional shares.
pub fn host_nations(hosts: &Table, limit: LimitPolicy) -> Result<PanelView, TableError> {
    let hosts = hosts.select(&[NATION, TIMES_HOSTED, YEARS])?;
    let ranked = rank(&hosts, TIMES_HOSTED, limit, Some(NATION))?;
    let ranked = round_counts(&ranked, TIMES_HOSTED)?;

    let panel = chart::pie(
        &ranked,
        NATION,
        TIMES_HOSTED,
        "Number of Times Nations Hosted Events",
    )?;

    Ok(PanelView {
        limit,
        options: options("nations"),
        figure: Figure::single(panel),
        grid: ranked,
    })
}

pub fn medals_tally(medals: &Table, limit: LimitPolicy) -> Result<PanelView, TableError> {
    let ranked = rank(medals, TOTAL, limit, None)?;

    let series = MEDAL_COLORS
        .iter()
        .map(|(medal, color)| chart::series(&ranked, TEAM, medal, medal, Some(*color)))
        .collect::<Result<Vec<_>, _>>()?;

    let panel = Panel {
        title: "UEFA Euro Tournament Medals by Country".to_string(),
        kind: ChartKind::StackedBar,
        series,
        show_values: true,
    };

    Ok(PanelView {
        limit,
        options: options("teams"),
        figure: Figure::single(panel),
        grid: ranked,
    })
}

pub fn penalty_round(cards: &Table, round: &str) -> Result<RoundView, TableError> {
    let mut panels = Vec::with_capacity(CARD_COLORS.len());
    for color in CARD_COLORS {
        let filtered = filter_eq(cards, &[(ROUND, round), (CARD_COLOR, color)])?;
        if filtered.is_empty() {
            panels.push(CardPanel::NoData {
                card_color: color.to_string(),
                message: format!("No {color} cards issued in this round."),
            });
            continue;
        }

        let counts = value_counts(&filtered, REPRESENTING, "Country", "Count")?;
        let panel = chart::pie(&counts, "Country", "Count", &format!("{color} Cards in {round}"))?;
        panels.push(CardPanel::Chart {
            card_color: color.to_string(),
            figure: Figure::single(panel),
            counts,
        });
    }

    let grid = filter_eq(cards, &[(ROUND, round)])?
        .map_column(TOURNAMENT, |value| match value {
            Value::Null => Value::Null,
            other => Value::Text(other.to_string().replace(',', "")),
        })?
        .with_first_column(ROUND)?;

    Ok(RoundView {
        round: round.to_string(),
        panels,
        grid,
    })
}
