pub mod columns {
    pub const TEAM: &str = "Team";
    pub const MATCHES_PLAYED: &str = "Matches Played";
    pub const WON: &str = "Won";
    pub const DRAWN: &str = "Drawn";
    pub const LOST: &str = "Lost";
    pub const GOALS_SCORED: &str = "Goals scored";
    pub const GOALS_CONCEDED: &str = "Goals conceded";
    pub const TOTAL_POINTS: &str = "Total points";

    pub const GOLD: &str = "Gold";
    pub const SILVER: &str = "Silver";
    pub const BRONZE: &str = "Bronze";
    pub const TOTAL: &str = "Total";

    pub const NATION: &str = "Nation";
    pub const TIMES_HOSTED: &str = "Number of times hosted";
    pub const YEARS: &str = "Year(s)";

    pub const ROUND: &str = "Round";
    pub const CARD_COLOR: &str = "Card Color";
    pub const REPRESENTING: &str = "Representing";
    pub const TOURNAMENT: &str = "Tournament";
}

use columns::*;

pub const ROUNDS: [&str; 5] = [
    "Group stage",
    "Round of 16",
    "Quarter-finals",
    "Semi-finals",
    "Final",
];

pub const CARD_COLORS: [&str; 2] = ["Red", "Two-Yellow"];

// Each dataset lists the columns its file must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    TeamRecords,
    TeamMedals,
    HostCountries,
    PenaltyCards,
}

impl Dataset {
    pub fn file_name(self) -> &'static str {
        match self {
            Dataset::TeamRecords => "100-overall_team_records.csv",
            Dataset::TeamMedals => "110-team_medals.csv",
            Dataset::HostCountries => "210-host_countries.csv",
            Dataset::PenaltyCards => "220-red_cards.csv",
        }
    }

    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            Dataset::TeamRecords => &[
                TEAM,
                MATCHES_PLAYED,
                WON,
                DRAWN,
                LOST,
                GOALS_SCORED,
                GOALS_CONCEDED,
                TOTAL_POINTS,
            ],
            Dataset::TeamMedals => &[TEAM, GOLD, SILVER, BRONZE, TOTAL],
            Dataset::HostCountries => &[NATION, TIMES_HOSTED, YEARS],
            Dataset::PenaltyCards => &[ROUND, CARD_COLOR, REPRESENTING, TOURNAMENT],
        }
    }

    // Columns that look numeric but are labels.
    pub fn text_columns(self) -> &'static [&'static str] {
        match self {
            Dataset::HostCountries => &[YEARS],
            Dataset::PenaltyCards => &[TOURNAMENT],
            Dataset::TeamRecords | Dataset::TeamMedals => &[],
        }
    }
}

pub fn is_known_round(round: &str) -> bool {
    ROUNDS.contains(&round)
}
