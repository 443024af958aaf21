//! PlayerRecord and the fixed sample dataset.

use serde::Serialize;

/// One row of the tennis statistics table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlayerRecord {
    pub name: &'static str,
    pub country: &'static str,
    pub age: u32,
    pub grand_slam_wins: u32,
    pub matches_played: u32,
    pub win_rate_percent: f64,
    /// Career-high ranking (1 is best).
    pub best_ranking: u32,
}

static PLAYERS: [PlayerRecord; 6] = [
    PlayerRecord {
        name: "노바크 조코비치",
        country: "세르비아",
        age: 36,
        grand_slam_wins: 24,
        matches_played: 1600,
        win_rate_percent: 83.0,
        best_ranking: 1,
    },
    PlayerRecord {
        name: "라파엘 Nadal",
        country: "스페인",
        age: 37,
        grand_slam_wins: 22,
        matches_played: 1500,
        win_rate_percent: 82.0,
        best_ranking: 1,
    },
    PlayerRecord {
        name: "로저 페더러",
        country: "스위스",
        age: 42,
        grand_slam_wins: 20,
        matches_played: 1520,
        win_rate_percent: 82.0,
        best_ranking: 1,
    },
    PlayerRecord {
        name: "세라나 윌리엄스",
        country: "미국",
        age: 42,
        grand_slam_wins: 23,
        matches_played: 1100,
        win_rate_percent: 84.0,
        best_ranking: 1,
    },
    PlayerRecord {
        name: "마리아 샤라포바",
        country: "러시아",
        age: 36,
        grand_slam_wins: 5,
        matches_played: 800,
        win_rate_percent: 79.0,
        best_ranking: 1,
    },
    PlayerRecord {
        name: "이수민",
        country: "한국",
        age: 28,
        grand_slam_wins: 0,
        matches_played: 200,
        win_rate_percent: 65.0,
        best_ranking: 50,
    },
];

/// All players, always the same records in the same order.
pub fn all_players() -> &'static [PlayerRecord] {
    &PLAYERS
}

/// Distinct countries in order of first appearance (the country filter options).
pub fn countries() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for p in all_players() {
        if !out.contains(&p.country) {
            out.push(p.country);
        }
    }
    out
}
