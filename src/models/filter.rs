//! Control values: sort keys, chart types and the FilterState built from them.

use crate::models::error::DashboardError;
use crate::models::player::{countries, PlayerRecord};
use serde::Serialize;
use std::str::FromStr;

/// Column the view is sorted by (always descending).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    GrandSlamWins,
    WinRatePercent,
    MatchesPlayed,
    BestRanking,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::GrandSlamWins,
        SortKey::WinRatePercent,
        SortKey::MatchesPlayed,
        SortKey::BestRanking,
    ];

    /// Numeric value of this column for a record.
    pub fn value(self, p: &PlayerRecord) -> f64 {
        match self {
            SortKey::GrandSlamWins => f64::from(p.grand_slam_wins),
            SortKey::WinRatePercent => p.win_rate_percent,
            SortKey::MatchesPlayed => f64::from(p.matches_played),
            SortKey::BestRanking => f64::from(p.best_ranking),
        }
    }

    /// Column header shown in the selector and the table.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::GrandSlamWins => "대满贯 우승",
            SortKey::WinRatePercent => "승률(%)",
            SortKey::MatchesPlayed => "경기 출전 수",
            SortKey::BestRanking => "최고 랭킹",
        }
    }

    /// Query string token.
    pub fn token(self) -> &'static str {
        match self {
            SortKey::GrandSlamWins => "grand_slam_wins",
            SortKey::WinRatePercent => "win_rate_percent",
            SortKey::MatchesPlayed => "matches_played",
            SortKey::BestRanking => "best_ranking",
        }
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.token() == s)
            .ok_or_else(|| DashboardError::UnknownSortKey(s.to_string()))
    }
}

/// Which chart is drawn below the table. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    GrandSlamComparison,
    WinRateComparison,
    MatchesComparison,
    CountryDistribution,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::GrandSlamComparison,
        ChartType::WinRateComparison,
        ChartType::MatchesComparison,
        ChartType::CountryDistribution,
    ];

    /// Radio button label.
    pub fn label(self) -> &'static str {
        match self {
            ChartType::GrandSlamComparison => "대满贯 우승 비교",
            ChartType::WinRateComparison => "승률 비교",
            ChartType::MatchesComparison => "경기 출전 수 비교",
            ChartType::CountryDistribution => "국가 분포",
        }
    }

    /// Section heading above the chart.
    pub fn subtitle(self) -> &'static str {
        match self {
            ChartType::GrandSlamComparison => "🏆 선수별 대满贯 우승 수",
            ChartType::WinRateComparison => "📈 선수별 승률 비교",
            ChartType::MatchesComparison => "🎾 선수별 경기 출전 수",
            ChartType::CountryDistribution => "🌍 국가별 선수 분포",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            ChartType::GrandSlamComparison => "grand_slam_comparison",
            ChartType::WinRateComparison => "win_rate_comparison",
            ChartType::MatchesComparison => "matches_comparison",
            ChartType::CountryDistribution => "country_distribution",
        }
    }
}

impl FromStr for ChartType {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartType::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| DashboardError::UnknownChartType(s.to_string()))
    }
}

/// Current value of every control. Rebuilt from the request on each render pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterState {
    /// Selected countries, kept in dataset order without duplicates.
    pub selected_countries: Vec<String>,
    pub search_query: String,
    pub sort_key: SortKey,
    pub show_table: bool,
    pub chart_type: ChartType,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_countries: countries().into_iter().map(String::from).collect(),
            search_query: String::new(),
            sort_key: SortKey::default(),
            show_table: true,
            chart_type: ChartType::default(),
        }
    }
}

/// Query key marking a submitted control form (as opposed to a first visit).
pub const APPLIED_KEY: &str = "applied";

impl FilterState {
    pub fn is_country_selected(&self, country: &str) -> bool {
        self.selected_countries.iter().any(|c| c == country)
    }

    /// Build a state from URL query pairs.
    ///
    /// Without the `applied` marker every missing control keeps its default. With it,
    /// a missing `country` is the empty selection and a missing `show_table` is false,
    /// because browsers omit unchecked boxes from form submissions.
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Result<Self, DashboardError> {
        let applied = pairs.iter().any(|(k, _)| k == APPLIED_KEY);
        let mut state = Self::default();
        if applied {
            state.show_table = false;
        }

        let options = countries();
        let mut picked: Vec<&'static str> = Vec::new();
        let mut saw_country = false;

        for (key, value) in pairs {
            match key.as_str() {
                "country" => {
                    saw_country = true;
                    let known = options
                        .iter()
                        .copied()
                        .find(|c| *c == value.as_str())
                        .ok_or_else(|| DashboardError::UnknownCountry(value.clone()))?;
                    if !picked.contains(&known) {
                        picked.push(known);
                    }
                }
                "q" => state.search_query = value.clone(),
                "sort" => state.sort_key = value.parse()?,
                "chart" => state.chart_type = value.parse()?,
                "show_table" => state.show_table = parse_toggle("show_table", value)?,
                _ => {}
            }
        }

        if saw_country || applied {
            state.selected_countries = options
                .into_iter()
                .filter(|c| picked.contains(c))
                .map(String::from)
                .collect();
        }
        Ok(state)
    }
}

fn parse_toggle(field: &'static str, value: &str) -> Result<bool, DashboardError> {
    match value {
        "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(DashboardError::InvalidToggle {
            field,
            value: value.to_string(),
        }),
    }
}
